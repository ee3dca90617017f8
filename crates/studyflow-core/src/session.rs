//! Session types and the session-type registry.
//!
//! A [`Session`] is a scheduled learning activity with a fixed start/end
//! interval. The engine only reads sessions; creating, completing, and
//! storing them is the caller's job.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::ValidationError;

/// A scheduled learning session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Redundant with the interval; kept in sync by construction.
    pub estimated_minutes: i64,
    /// Reference into the session-type registry. Opaque to the engine.
    pub type_id: String,
    /// Set by the lesson-completion flow, never by the engine.
    #[serde(default)]
    pub completed: bool,
    /// Optional reference to external lesson content.
    pub lesson_id: Option<String>,
}

impl Session {
    /// Create a new session from a start time and duration.
    ///
    /// # Panics
    /// Panics if `duration_minutes` is zero. Use [`try_new`](Self::try_new)
    /// for a non-panicking version with explicit end time.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        type_id: impl Into<String>,
        start_time: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Self {
        let end_time = start_time + Duration::minutes(duration_minutes as i64);
        Self::try_new(id, title, type_id, start_time, end_time, duration_minutes as i64)
            .expect("Session::new: duration_minutes must be greater than zero")
    }

    /// Create a new session, validating the interval.
    ///
    /// # Errors
    /// Returns an error if `end_time <= start_time` or if
    /// `estimated_minutes` contradicts the interval.
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        type_id: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        estimated_minutes: i64,
    ) -> Result<Self, ValidationError> {
        if end_time <= start_time {
            return Err(ValidationError::InvalidTimeRange {
                start: start_time,
                end: end_time,
            });
        }
        let interval = (end_time - start_time).num_minutes();
        if estimated_minutes != interval {
            return Err(ValidationError::DurationMismatch {
                estimated: estimated_minutes,
                interval,
            });
        }
        Ok(Self {
            id: id.into(),
            title: title.into(),
            description: None,
            start_time,
            end_time,
            estimated_minutes,
            type_id: type_id.into(),
            completed: false,
            lesson_id: None,
        })
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Check if this session overlaps with another
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }

    /// Check if this session overlaps with a time range
    pub fn overlaps_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time < end && self.end_time > start
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set lesson reference
    pub fn with_lesson(mut self, lesson_id: impl Into<String>) -> Self {
        self.lesson_id = Some(lesson_id.into());
        self
    }

    /// Mark as completed
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Display metadata for a class of sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionType {
    pub id: String,
    pub label: String,
    /// Display color (hex). Opaque to the engine.
    pub color: String,
    /// Used when a caller omits an explicit duration.
    pub default_minutes: u32,
}

impl SessionType {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        color: impl Into<String>,
        default_minutes: u32,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            default_minutes,
        }
    }
}

/// Registry mapping `type_id` to display metadata and default durations.
///
/// The engine treats everything here as opaque except `default_minutes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionTypeRegistry {
    types: HashMap<String, SessionType>,
}

impl Default for SessionTypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SessionTypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Registry with the built-in learning session types.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for t in [
            SessionType::new("vocabulary", "Vocabulary", "#4f9cf9", 30),
            SessionType::new("grammar", "Grammar", "#9b6cf0", 45),
            SessionType::new("reading", "Reading", "#41c98e", 30),
            SessionType::new("listening", "Listening", "#f2a93b", 25),
            SessionType::new("review", "Review", "#ef6461", 20),
        ] {
            registry.register(t);
        }
        registry
    }

    /// Add or replace a session type.
    pub fn register(&mut self, session_type: SessionType) {
        self.types.insert(session_type.id.clone(), session_type);
    }

    /// Look up a session type by id.
    pub fn get(&self, type_id: &str) -> Option<&SessionType> {
        self.types.get(type_id)
    }

    /// Default duration for a type, if registered.
    pub fn default_minutes(&self, type_id: &str) -> Option<u32> {
        self.types.get(type_id).map(|t| t.default_minutes)
    }

    /// All registered types, sorted by id for stable display.
    pub fn all(&self) -> Vec<&SessionType> {
        let mut types: Vec<_> = self.types.values().collect();
        types.sort_by(|a, b| a.id.cmp(&b.id));
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
    }

    #[test]
    fn test_session_new_derives_interval() {
        let session = Session::new("s1", "Irregular verbs", "grammar", at(9, 0), 45);
        assert_eq!(session.end_time, at(9, 45));
        assert_eq!(session.estimated_minutes, 45);
        assert_eq!(session.duration_minutes(), 45);
        assert!(!session.completed);
    }

    #[test]
    fn test_try_new_rejects_inverted_interval() {
        let result = Session::try_new("s1", "x", "review", at(10, 0), at(9, 0), 60);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn test_try_new_rejects_duration_mismatch() {
        let result = Session::try_new("s1", "x", "review", at(9, 0), at(10, 0), 45);
        assert!(matches!(
            result,
            Err(ValidationError::DurationMismatch {
                estimated: 45,
                interval: 60
            })
        ));
    }

    #[test]
    fn test_overlap_detection() {
        let a = Session::new("a", "a", "reading", at(9, 0), 60);
        let b = Session::new("b", "b", "reading", at(9, 30), 60);
        let c = Session::new("c", "c", "reading", at(10, 0), 30);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&c));
        // Back-to-back is not an overlap
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_registry_defaults() {
        let registry = SessionTypeRegistry::builtin();
        assert_eq!(registry.default_minutes("grammar"), Some(45));
        assert_eq!(registry.default_minutes("unknown"), None);
        assert_eq!(registry.get("review").unwrap().label, "Review");
        assert_eq!(registry.all().len(), 5);
    }
}
