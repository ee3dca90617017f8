//! Configuration management commands.

use clap::Subcommand;
use studyflow_core::PlannerConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the active configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration to disk
    Init,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = PlannerConfig::load_or_default();
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => match PlannerConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("no config directory on this platform"),
        },
        ConfigAction::Init => {
            let config = PlannerConfig::default();
            config.save()?;
            println!("default configuration written");
        }
    }
    Ok(())
}
