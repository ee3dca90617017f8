//! Effectiveness model commands.

use clap::Subcommand;
use studyflow_core::PlannerConfig;

#[derive(Subcommand)]
pub enum EffectivenessAction {
    /// Render the hour-of-day table as an ASCII chart
    Chart,
    /// List the optimal study hours
    Hours,
}

pub fn run(action: EffectivenessAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = PlannerConfig::load_or_default();
    let model = config.effectiveness_model()?;

    match action {
        EffectivenessAction::Chart => {
            println!("{}", model.render_ascii_chart());
        }
        EffectivenessAction::Hours => {
            let hours: Vec<String> = model
                .optimal_hours()
                .iter()
                .map(|h| format!("{h:02}:00"))
                .collect();
            println!("optimal study hours: {}", hours.join(", "));
        }
    }
    Ok(())
}
