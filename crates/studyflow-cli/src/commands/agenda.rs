//! Agenda view grouped by relative-time bucket.

use studyflow_core::group_sessions;

use super::{format_instant, Context};
use crate::store::SessionStore;

pub fn run(ctx: &Context, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = SessionStore::open(ctx.store_path.clone())?;
    let now = ctx.now()?;

    let groups = group_sessions(now, store.sessions());

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if groups.is_empty() {
        println!("nothing planned");
        return Ok(());
    }

    for group in &groups {
        println!("{}", group.bucket.label());
        for s in &group.sessions {
            let mark = if s.completed { "x" } else { " " };
            println!(
                "  [{mark}] {}  {} ({} min)",
                format_instant(s.start_time),
                s.title,
                s.estimated_minutes
            );
        }
    }
    Ok(())
}
