//! Planning assistant.
//!
//! Turns a "find me time for this kind of session" request into a concrete
//! placement: resolves the duration (explicit or the session type's
//! default), searches day by day for capacity, and proposes the earliest
//! booking in the first slot found.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::slots::{FreeSlot, SlotSearch};
use crate::effectiveness::EffectivenessModel;
use crate::error::ValidationError;
use crate::session::{Session, SessionTypeRegistry};

/// A concrete placement proposed by the assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionProposal {
    /// The free slot the placement came from.
    pub slot: FreeSlot,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub type_id: String,
    pub duration_minutes: u32,
    /// Effectiveness score of the proposed starting hour.
    pub effectiveness: f64,
}

impl SessionProposal {
    /// Materialize the proposal as a session record.
    pub fn into_session(self, id: impl Into<String>, title: impl Into<String>) -> Session {
        Session::new(id, title, self.type_id, self.start_time, self.duration_minutes)
    }
}

/// Assistant that proposes where a new session should go.
#[derive(Debug, Clone, Default)]
pub struct PlanningAssistant {
    search: SlotSearch,
    registry: SessionTypeRegistry,
}

impl PlanningAssistant {
    /// Create an assistant with the default model and built-in types
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assistant with a custom model and registry
    pub fn with_parts(model: EffectivenessModel, registry: SessionTypeRegistry) -> Self {
        Self {
            search: SlotSearch::with_model(model),
            registry,
        }
    }

    /// Propose a placement within the next `days_ahead` days.
    ///
    /// When `duration_minutes` is `None` the session type's registered
    /// default applies. Greedy policy throughout: the first day with room
    /// wins and the booking starts at the front of its first slot.
    ///
    /// # Errors
    /// Returns an error if no duration is given and the session type is not
    /// registered, or if the search inputs are malformed.
    #[allow(clippy::too_many_arguments)]
    pub fn propose(
        &self,
        start_day: DateTime<Utc>,
        days_ahead: u32,
        type_id: &str,
        duration_minutes: Option<u32>,
        sessions: &[Session],
        window_start_hour: u32,
        window_end_hour: u32,
        now: DateTime<Utc>,
    ) -> Result<Option<SessionProposal>, ValidationError> {
        let duration = match duration_minutes.or_else(|| self.registry.default_minutes(type_id)) {
            Some(minutes) => minutes,
            None => {
                return Err(ValidationError::InvalidValue {
                    field: "duration_minutes".to_string(),
                    message: format!(
                        "no duration given and session type '{type_id}' has no default"
                    ),
                })
            }
        };

        let slot = self.search.find_first_slot(
            start_day,
            days_ahead,
            duration as i64,
            sessions,
            window_start_hour,
            window_end_hour,
            now,
        )?;

        Ok(slot.map(|slot| {
            let (start_time, end_time) = slot.booking(duration);
            let effectiveness = slot.effectiveness;
            SessionProposal {
                slot,
                start_time,
                end_time,
                type_id: type_id.to_string(),
                duration_minutes: duration,
                effectiveness,
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap()
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
    }

    #[test]
    fn test_proposal_books_front_of_first_slot() {
        let assistant = PlanningAssistant::new();
        let existing = vec![Session::new("a", "Busy", "review", at(9, 0), 60)];

        let proposal = assistant
            .propose(day(), 0, "review", Some(30), &existing, 6, 24, day())
            .unwrap()
            .expect("day has room");

        assert_eq!(proposal.start_time, at(6, 0));
        assert_eq!(proposal.end_time, at(6, 30));
        assert_eq!(proposal.duration_minutes, 30);

        let session = proposal.into_session("new", "Review flashcards");
        assert_eq!(session.start_time, at(6, 0));
        assert_eq!(session.estimated_minutes, 30);
        for s in &existing {
            assert!(!s.overlaps(&session));
        }
    }

    #[test]
    fn test_duration_defaults_from_registry() {
        let assistant = PlanningAssistant::new();
        let proposal = assistant
            .propose(day(), 0, "grammar", None, &[], 6, 24, day())
            .unwrap()
            .expect("empty day has room");
        // Built-in grammar default is 45 minutes
        assert_eq!(proposal.duration_minutes, 45);
        assert_eq!(proposal.end_time - proposal.start_time, chrono::Duration::minutes(45));
    }

    #[test]
    fn test_unknown_type_without_duration_is_rejected() {
        let assistant = PlanningAssistant::new();
        let result = assistant.propose(day(), 0, "mystery", None, &[], 6, 24, day());
        assert!(matches!(
            result,
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_booked_range_proposes_nothing() {
        let assistant = PlanningAssistant::new();
        let busy = vec![Session::new("a", "Busy", "review", at(6, 0), 18 * 60)];
        let proposal = assistant
            .propose(day(), 0, "review", Some(30), &busy, 6, 24, day())
            .unwrap();
        assert!(proposal.is_none());
    }
}
