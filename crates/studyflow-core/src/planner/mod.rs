//! Planner engine.
//!
//! This module provides:
//! - Free-slot search over a day window with existing sessions as obstacles
//! - Relative-time bucket classification for agenda grouping
//! - Pure offset/length projection for day/week grid display
//! - The planning assistant's multi-day slot proposal

mod buckets;
mod layout;
mod proposal;
mod slots;

pub use buckets::{classify, group_sessions, AgendaGroup, TimeBucket};
pub use layout::{LayoutProjector, LayoutSettings, Projection};
pub use proposal::{PlanningAssistant, SessionProposal};
pub use slots::{find_free_slots, FreeSlot, SlotSearch, SlotSize};

use chrono::{DateTime, Utc};

/// Resolve a whole hour (0-24) on the calendar day of `day`.
///
/// Hour 24 maps to midnight of the following day so it can close a window.
pub(crate) fn hour_on_day(day: DateTime<Utc>, hour: u32) -> DateTime<Utc> {
    let date = day.date_naive();
    if hour == 24 {
        let next = date.succ_opt().expect("calendar day out of range");
        next.and_hms_opt(0, 0, 0)
            .expect("midnight is always valid")
            .and_utc()
    } else {
        date.and_hms_opt(hour, 0, 0)
            .expect("whole hour below 24 is always valid")
            .and_utc()
    }
}
