//! Planning assistant command.

use studyflow_core::{PlannerConfig, PlanningAssistant};
use uuid::Uuid;

use super::{format_instant, Context};
use crate::store::SessionStore;

pub fn run(
    ctx: &Context,
    type_id: &str,
    duration: Option<u32>,
    days: u32,
    title: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SessionStore::open(ctx.store_path.clone())?;
    let config = PlannerConfig::load_or_default();
    let now = ctx.now()?;

    let assistant = PlanningAssistant::with_parts(config.effectiveness_model()?, config.registry());
    let proposal = assistant.propose(
        now,
        days,
        type_id,
        duration,
        store.sessions(),
        config.window.start_hour,
        config.window.end_hour,
        now,
    )?;

    let proposal = match proposal {
        Some(proposal) => proposal,
        None => {
            println!("no room in the next {days} day(s)");
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&proposal)?);
        return Ok(());
    }

    println!(
        "proposed: {} for {} min ({:.0}% effective)",
        format_instant(proposal.start_time),
        proposal.duration_minutes,
        proposal.effectiveness * 100.0
    );

    if let Some(title) = title {
        let session = proposal.into_session(Uuid::new_v4().to_string(), title);
        println!("booked as session {}", session.id);
        store.add(session);
        store.save()?;
    }
    Ok(())
}
