//! Session management commands for CLI.

use clap::Subcommand;
use studyflow_core::{PlannerConfig, Session};
use uuid::Uuid;

use super::{format_instant, parse_instant, Context};
use crate::store::SessionStore;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Create a new session
    Add {
        /// Session title
        title: String,
        /// Start time (YYYY-MM-DDTHH:MM)
        #[arg(long)]
        start: String,
        /// Session type (default: review)
        #[arg(long, default_value = "review")]
        type_id: String,
        /// Duration in minutes (defaults to the type's configured duration)
        #[arg(long)]
        duration: Option<u32>,
        /// Session description
        #[arg(long)]
        description: Option<String>,
        /// Lesson reference
        #[arg(long)]
        lesson: Option<String>,
    },
    /// List sessions
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark a session as completed
    Complete {
        /// Session ID
        id: String,
    },
    /// Remove a session
    Remove {
        /// Session ID
        id: String,
    },
}

pub fn run(ctx: &Context, action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SessionStore::open(ctx.store_path.clone())?;

    match action {
        SessionAction::Add {
            title,
            start,
            type_id,
            duration,
            description,
            lesson,
        } => {
            let config = PlannerConfig::load_or_default();
            let registry = config.registry();
            let minutes = match duration.or_else(|| registry.default_minutes(&type_id)) {
                Some(minutes) if minutes > 0 => minutes,
                Some(_) => return Err("duration must be positive".into()),
                None => {
                    return Err(format!(
                        "session type '{type_id}' has no default duration; pass --duration"
                    )
                    .into())
                }
            };

            let start_time = parse_instant(&start)?;
            let mut session = Session::new(
                Uuid::new_v4().to_string(),
                title,
                type_id,
                start_time,
                minutes,
            );
            if let Some(description) = description {
                session = session.with_description(description);
            }
            if let Some(lesson) = lesson {
                session = session.with_lesson(lesson);
            }

            println!(
                "session {} added: {} ({} min)",
                session.id,
                format_instant(session.start_time),
                session.estimated_minutes
            );
            store.add(session);
            store.save()?;
        }
        SessionAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(store.sessions())?);
            } else if store.sessions().is_empty() {
                println!("no sessions");
            } else {
                let mut sessions = store.sessions().to_vec();
                sessions.sort_by_key(|s| s.start_time);
                for s in &sessions {
                    let mark = if s.completed { "x" } else { " " };
                    println!(
                        "[{mark}] {}  {} ({} min, {})  {}",
                        s.id,
                        format_instant(s.start_time),
                        s.estimated_minutes,
                        s.type_id,
                        s.title
                    );
                }
            }
        }
        SessionAction::Complete { id } => {
            if !store.complete(&id) {
                return Err(format!("no session with id '{id}'").into());
            }
            store.save()?;
            println!("session {id} completed");
        }
        SessionAction::Remove { id } => {
            if !store.remove(&id) {
                return Err(format!("no session with id '{id}'").into());
            }
            store.save()?;
            println!("session {id} removed");
        }
    }
    Ok(())
}
