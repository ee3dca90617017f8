//! Free-slot search between existing sessions.
//!
//! Walks a day window left to right, treating each existing session as an
//! obstacle, and emits every maximal free interval long enough for the
//! requested duration. The policy is greedy earliest-fit: slots come back in
//! chronological order and the first one wins, regardless of effectiveness.

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::hour_on_day;
use crate::effectiveness::EffectivenessModel;
use crate::error::ValidationError;
use crate::session::Session;

/// Size category of a free slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotSize {
    Short,    // under 30 minutes
    Standard, // 30-59 minutes
    Long,     // 60+ minutes
}

impl SlotSize {
    /// Categorize a slot by its duration in minutes
    pub fn from_minutes(minutes: i64) -> Self {
        if minutes < 30 {
            Self::Short
        } else if minutes < 60 {
            Self::Standard
        } else {
            Self::Long
        }
    }
}

/// A maximal free interval inside a search window.
///
/// Spans the whole gap between obstacles; the proposed booking starts at
/// `start_time` (earliest-fit) and the remainder stays available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Effectiveness score of the slot's starting hour, for display badges.
    pub effectiveness: f64,
    pub size: SlotSize,
}

impl FreeSlot {
    fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>, effectiveness: f64) -> Self {
        let minutes = (end_time - start_time).num_minutes();
        Self {
            start_time,
            end_time,
            effectiveness,
            size: SlotSize::from_minutes(minutes),
        }
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Check if this slot can fit a session of given duration
    pub fn can_fit(&self, minutes: i64) -> bool {
        self.duration_minutes() >= minutes
    }

    /// The earliest-fit booking interval for a session of given duration.
    pub fn booking(&self, duration_minutes: u32) -> (DateTime<Utc>, DateTime<Utc>) {
        let end = self.start_time + Duration::minutes(duration_minutes as i64);
        (self.start_time, end)
    }
}

/// Searcher for free capacity on a day timeline.
#[derive(Debug, Clone, Default)]
pub struct SlotSearch {
    model: EffectivenessModel,
}

impl SlotSearch {
    /// Create a search with the default effectiveness model
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a search with a custom effectiveness model
    pub fn with_model(model: EffectivenessModel) -> Self {
        Self { model }
    }

    /// Find free slots on a single day.
    ///
    /// # Arguments
    /// * `day` - Target day (only its calendar date matters)
    /// * `duration_minutes` - Required session length
    /// * `sessions` - Existing sessions; only those dated on `day` obstruct
    /// * `window_start_hour`, `window_end_hour` - Search window, whole hours 0-24
    /// * `now` - Current instant; nothing is proposed in the past
    ///
    /// # Returns
    /// Maximal free intervals of at least `duration_minutes`, in
    /// chronological order. An inverted window or a request longer than the
    /// window yields an empty result, not an error.
    ///
    /// # Errors
    /// Returns an error if `duration_minutes` is not positive or an hour
    /// bound exceeds 24.
    pub fn find_slots(
        &self,
        day: DateTime<Utc>,
        duration_minutes: i64,
        sessions: &[Session],
        window_start_hour: u32,
        window_end_hour: u32,
        now: DateTime<Utc>,
    ) -> Result<Vec<FreeSlot>, ValidationError> {
        if duration_minutes <= 0 {
            return Err(ValidationError::InvalidValue {
                field: "duration_minutes".to_string(),
                message: format!("duration {duration_minutes} must be positive"),
            });
        }
        if window_start_hour > 24 || window_end_hour > 24 {
            return Err(ValidationError::InvalidWindow {
                start_hour: window_start_hour,
                end_hour: window_end_hour,
            });
        }
        if window_start_hour >= window_end_hour {
            return Ok(Vec::new());
        }

        let window_start = hour_on_day(day, window_start_hour);
        let window_end = hour_on_day(day, window_end_hour);

        // No scheduling into the past
        let mut cursor = window_start.max(now);
        if cursor >= window_end {
            return Ok(Vec::new());
        }

        // Sort this day's sessions by start time
        let mut obstacles: Vec<&Session> = sessions
            .iter()
            .filter(|s| s.start_time.date_naive() == day.date_naive())
            .collect();
        obstacles.sort_by_key(|s| s.start_time);

        let mut slots = Vec::new();

        for session in obstacles {
            // Skip obstacles already behind the cursor
            if session.end_time <= cursor {
                continue;
            }

            // Obstacles past the window cannot shrink any further gap
            if session.start_time >= window_end {
                break;
            }

            if session.start_time > cursor {
                let gap_end = session.start_time.min(window_end);
                self.push_slot(&mut slots, cursor, gap_end, duration_minutes);
            }

            if session.end_time > cursor {
                cursor = session.end_time.min(window_end);
            }
        }

        if cursor < window_end {
            self.push_slot(&mut slots, cursor, window_end, duration_minutes);
        }

        Ok(slots)
    }

    /// Find the first available slot over a span of days.
    ///
    /// Runs the single-day search once per day and short-circuits at the
    /// first day that has room, returning that day's first slot. First day
    /// with room wins, first slot wins; no effectiveness ranking.
    pub fn find_first_slot(
        &self,
        start_day: DateTime<Utc>,
        days_ahead: u32,
        duration_minutes: i64,
        sessions: &[Session],
        window_start_hour: u32,
        window_end_hour: u32,
        now: DateTime<Utc>,
    ) -> Result<Option<FreeSlot>, ValidationError> {
        for offset in 0..=days_ahead {
            let day = start_day + Duration::days(offset as i64);
            let slots = self.find_slots(
                day,
                duration_minutes,
                sessions,
                window_start_hour,
                window_end_hour,
                now,
            )?;
            if let Some(slot) = slots.into_iter().next() {
                return Ok(Some(slot));
            }
        }
        Ok(None)
    }

    fn push_slot(
        &self,
        slots: &mut Vec<FreeSlot>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        duration_minutes: i64,
    ) {
        if (end - start).num_minutes() >= duration_minutes {
            let effectiveness = self.model.score_of(start.hour());
            slots.push(FreeSlot::new(start, end, effectiveness));
        }
    }
}

/// Convenience function to search with the default effectiveness model
pub fn find_free_slots(
    day: DateTime<Utc>,
    duration_minutes: i64,
    sessions: &[Session],
    window_start_hour: u32,
    window_end_hour: u32,
    now: DateTime<Utc>,
) -> Result<Vec<FreeSlot>, ValidationError> {
    SlotSearch::new().find_slots(
        day,
        duration_minutes,
        sessions,
        window_start_hour,
        window_end_hour,
        now,
    )
}
