//! Free-slot search command.

use chrono::Timelike;
use studyflow_core::{PlannerConfig, SlotSearch};

use super::{format_time, parse_day, Context};
use crate::store::SessionStore;

pub fn run(
    ctx: &Context,
    day: Option<String>,
    duration: i64,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open(ctx.store_path.clone())?;
    let config = PlannerConfig::load_or_default();
    let now = ctx.now()?;

    let day = match day {
        Some(raw) => parse_day(&raw)?,
        None => now,
    };

    let model = config.effectiveness_model()?;
    let search = SlotSearch::with_model(model.clone());
    let slots = search.find_slots(
        day,
        duration,
        store.sessions(),
        config.window.start_hour,
        config.window.end_hour,
        now,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }

    if slots.is_empty() {
        println!("no free slots of {duration} min on {}", day.format("%Y-%m-%d"));
        return Ok(());
    }

    for slot in &slots {
        let badge = if model.is_optimal(slot.start_time.hour()) {
            " ●"
        } else {
            ""
        };
        println!(
            "{}-{}  {} min ({:?}, {:.0}% effective{})",
            format_time(slot.start_time),
            format_time(slot.end_time),
            slot.duration_minutes(),
            slot.size,
            slot.effectiveness * 100.0,
            badge
        );
    }
    Ok(())
}
