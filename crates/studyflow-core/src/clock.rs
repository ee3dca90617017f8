//! Clock collaborator.
//!
//! Every "past/future/today" decision in the engine is relative to a caller
//! supplied `now`. Engine functions take the instant as an explicit argument
//! so they stay pure; hosts that want a single source of time implement
//! [`Clock`] and re-query it before each call.

use chrono::{DateTime, Utc};

/// Supplies the current instant.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock backed [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A [`Clock`] frozen at a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
