//! CLI subcommand implementations.

pub mod agenda;
pub mod assist;
pub mod config;
pub mod effectiveness;
pub mod session;
pub mod slots;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::path::PathBuf;

use studyflow_core::{Clock, SystemClock};

/// Global options shared by every subcommand.
pub struct Context {
    pub store_path: Option<PathBuf>,
    pub now: Option<String>,
}

impl Context {
    /// The current instant: the `--now` override if given, else the wall clock.
    pub fn now(&self) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
        match &self.now {
            Some(raw) => parse_instant(raw),
            None => Ok(SystemClock.now()),
        }
    }
}

/// Parse an instant given as `YYYY-MM-DDTHH:MM[:SS]` or `YYYY-MM-DD HH:MM`.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(format!("invalid instant '{raw}': expected YYYY-MM-DDTHH:MM").into())
}

/// Parse a day given as `YYYY-MM-DD`, resolved to midnight.
pub fn parse_day(raw: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| format!("invalid day '{raw}': expected YYYY-MM-DD"))?;
    Ok(date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc())
}

/// Format an instant for display.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M").to_string()
}

/// Format a time-of-day for display.
pub fn format_time(instant: DateTime<Utc>) -> String {
    instant.format("%H:%M").to_string()
}
