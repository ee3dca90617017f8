//! Relative-time bucket classification for agenda grouping.
//!
//! Each session falls into exactly one named bucket relative to `now`. The
//! predicates are evaluated top to bottom, first match wins; together they
//! partition every possible start time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// Relative-time bucket, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    EarlierToday,
    Past,
    Next2Hours,
    LaterToday,
    Tomorrow,
    ThisWeek,
    ThisMonth,
    Future,
}

impl TimeBucket {
    /// All buckets in display order.
    pub const ALL: [TimeBucket; 8] = [
        Self::EarlierToday,
        Self::Past,
        Self::Next2Hours,
        Self::LaterToday,
        Self::Tomorrow,
        Self::ThisWeek,
        Self::ThisMonth,
        Self::Future,
    ];

    /// Human-readable agenda heading.
    pub fn label(&self) -> &'static str {
        match self {
            Self::EarlierToday => "Earlier Today",
            Self::Past => "Past Sessions",
            Self::Next2Hours => "Next 2 Hours",
            Self::LaterToday => "Later Today",
            Self::Tomorrow => "Tomorrow",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
            Self::Future => "Future",
        }
    }
}

/// Assign a session to its relative-time bucket.
///
/// Pure function of `(now, session.start_time)`; the `completed` flag does
/// not move a session between buckets.
pub fn classify(now: DateTime<Utc>, session: &Session) -> TimeBucket {
    let start = session.start_time;
    let today = now.date_naive();

    if start < now {
        if start.date_naive() == today {
            return TimeBucket::EarlierToday;
        }
        return TimeBucket::Past;
    }

    if start - now < Duration::hours(2) {
        return TimeBucket::Next2Hours;
    }

    if start.date_naive() == today {
        return TimeBucket::LaterToday;
    }

    if today.succ_opt() == Some(start.date_naive()) {
        return TimeBucket::Tomorrow;
    }

    if start - now <= Duration::days(7) {
        return TimeBucket::ThisWeek;
    }

    if start - now <= Duration::days(30) {
        return TimeBucket::ThisMonth;
    }

    TimeBucket::Future
}

/// A bucket together with its sessions, ascending by start time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaGroup {
    pub bucket: TimeBucket,
    pub sessions: Vec<Session>,
}

/// Group sessions into agenda buckets.
///
/// Returns only non-empty buckets, in display order; within each bucket
/// sessions are sorted ascending by start time. Every input session lands
/// in exactly one group.
pub fn group_sessions(now: DateTime<Utc>, sessions: &[Session]) -> Vec<AgendaGroup> {
    let mut groups: Vec<AgendaGroup> = TimeBucket::ALL
        .iter()
        .map(|&bucket| AgendaGroup {
            bucket,
            sessions: Vec::new(),
        })
        .collect();

    for session in sessions {
        let bucket = classify(now, session);
        let group = groups
            .iter_mut()
            .find(|g| g.bucket == bucket)
            .expect("every bucket has a group");
        group.sessions.push(session.clone());
    }

    for group in &mut groups {
        group.sessions.sort_by_key(|s| s.start_time);
    }

    groups.retain(|g| !g.sessions.is_empty());
    groups
}
