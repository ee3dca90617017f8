use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod store;

#[derive(Parser)]
#[command(name = "studyflow-cli", version, about = "Studyflow planner CLI")]
struct Cli {
    /// Path to the session store file (defaults to the user data directory)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Fixed current instant (YYYY-MM-DDTHH:MM), for scripting and tests
    #[arg(long, global = true)]
    now: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Session management
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Agenda view grouped by relative time
    Agenda {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Free-slot search on a single day
    Slots {
        /// Target day (YYYY-MM-DD, default today)
        #[arg(long)]
        day: Option<String>,
        /// Required duration in minutes
        #[arg(long, default_value = "30")]
        duration: i64,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Planning assistant: find and optionally book the next free slot
    Assist {
        /// Session type to schedule
        type_id: String,
        /// Duration in minutes (defaults to the type's configured duration)
        #[arg(long)]
        duration: Option<u32>,
        /// How many days ahead to search
        #[arg(long, default_value = "6")]
        days: u32,
        /// Book the proposal into the store under this title
        #[arg(long)]
        title: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Effectiveness model
    Effectiveness {
        #[command(subcommand)]
        action: commands::effectiveness::EffectivenessAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let ctx = commands::Context {
        store_path: cli.store,
        now: cli.now,
    };

    let result = match cli.command {
        Commands::Session { action } => commands::session::run(&ctx, action),
        Commands::Agenda { json } => commands::agenda::run(&ctx, json),
        Commands::Slots {
            day,
            duration,
            json,
        } => commands::slots::run(&ctx, day, duration, json),
        Commands::Assist {
            type_id,
            duration,
            days,
            title,
            json,
        } => commands::assist::run(&ctx, &type_id, duration, days, title, json),
        Commands::Effectiveness { action } => commands::effectiveness::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
