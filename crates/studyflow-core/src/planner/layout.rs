//! Projection of sessions onto a 1-D grid axis.
//!
//! Converts a session's interval into an offset/length pair in pixel units
//! for day/week grid display. Clipping here is purely visual; the underlying
//! session is never modified or dropped.

use serde::{Deserialize, Serialize};

use super::hour_on_day;
use crate::error::ValidationError;
use crate::session::Session;

/// Grid geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Pixels covered by one hour of the window.
    #[serde(default = "default_pixels_per_hour")]
    pub pixels_per_hour: f64,
    /// Floor for a session's rendered length, so short sessions stay visible.
    #[serde(default = "default_min_visible_length")]
    pub min_visible_length: f64,
}

fn default_pixels_per_hour() -> f64 {
    60.0
}

fn default_min_visible_length() -> f64 {
    15.0
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            pixels_per_hour: default_pixels_per_hour(),
            min_visible_length: default_min_visible_length(),
        }
    }
}

/// A projected position on the grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub offset: f64,
    pub length: f64,
}

impl Projection {
    /// Projection of a session with no visible extent in the window.
    pub fn hidden() -> Self {
        Self {
            offset: 0.0,
            length: 0.0,
        }
    }

    /// Whether the session has no visible extent in the window.
    pub fn is_hidden(&self) -> bool {
        self.length == 0.0
    }
}

/// Projects sessions onto the grid axis of their own calendar day.
#[derive(Debug, Clone, Default)]
pub struct LayoutProjector {
    settings: LayoutSettings,
}

impl LayoutProjector {
    /// Create a projector with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a projector with custom settings
    pub fn with_settings(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    /// Project a session onto the day window `[start_hour:00, end_hour:00)`.
    ///
    /// The offset is clamped to zero for sessions starting before the
    /// window; the length is floored at `min_visible_length` and clamped so
    /// `offset + length` never exceeds the window. A session with no overlap
    /// with the window projects to zero offset and zero length.
    ///
    /// # Errors
    /// Returns an error unless `window_start_hour < window_end_hour` and
    /// both are at most 24.
    pub fn project(
        &self,
        session: &Session,
        window_start_hour: u32,
        window_end_hour: u32,
    ) -> Result<Projection, ValidationError> {
        if window_start_hour >= window_end_hour || window_end_hour > 24 {
            return Err(ValidationError::InvalidWindow {
                start_hour: window_start_hour,
                end_hour: window_end_hour,
            });
        }

        let window_start = hour_on_day(session.start_time, window_start_hour);
        let window_end = hour_on_day(session.start_time, window_end_hour);
        let total = (window_end_hour - window_start_hour) as f64 * self.settings.pixels_per_hour;

        if session.end_time <= window_start || session.start_time >= window_end {
            return Ok(Projection::hidden());
        }

        let start_offset_hours =
            (session.start_time - window_start).num_milliseconds() as f64 / 3_600_000.0;
        let offset = (start_offset_hours * self.settings.pixels_per_hour).max(0.0);

        let duration_hours =
            (session.end_time - session.start_time).num_milliseconds() as f64 / 3_600_000.0;
        let mut length = (duration_hours * self.settings.pixels_per_hour)
            .max(self.settings.min_visible_length);

        // Visual clipping at the window edge
        if offset + length > total {
            length = total - offset;
        }

        Ok(Projection { offset, length })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
    }

    fn session(start: DateTime<Utc>, minutes: u32) -> Session {
        Session::new("s", "Session", "review", start, minutes)
    }

    #[test]
    fn test_offset_and_length_from_window_start() {
        let projector = LayoutProjector::new();
        // 09:30 session in a 06:00-24:00 window at 60 px/h
        let p = projector.project(&session(at(9, 30), 60), 6, 24).unwrap();
        assert_eq!(p.offset, 3.5 * 60.0);
        assert_eq!(p.length, 60.0);
    }

    #[test]
    fn test_short_session_floors_at_min_visible() {
        let projector = LayoutProjector::new();
        let p = projector.project(&session(at(10, 0), 5), 6, 24).unwrap();
        assert_eq!(p.length, 15.0);
    }

    #[test]
    fn test_start_before_window_clamps_offset() {
        let projector = LayoutProjector::new();
        // Starts 05:00, window opens 06:00
        let p = projector.project(&session(at(5, 0), 120), 6, 24).unwrap();
        assert_eq!(p.offset, 0.0);
        assert!(p.length > 0.0);
    }

    #[test]
    fn test_end_after_window_clips_length() {
        let projector = LayoutProjector::new();
        // 21:00-23:00 session in a 06:00-22:00 window
        let p = projector.project(&session(at(21, 0), 120), 6, 22).unwrap();
        assert_eq!(p.offset, 15.0 * 60.0);
        assert_eq!(p.length, 60.0);
        let total = 16.0 * 60.0;
        assert!(p.offset + p.length <= total);
    }

    #[test]
    fn test_session_outside_window_is_hidden() {
        let projector = LayoutProjector::new();
        // 05:00-05:30 session, window 09:00-17:00
        let p = projector.project(&session(at(5, 0), 30), 9, 17).unwrap();
        assert!(p.is_hidden());
        assert_eq!(p, Projection::hidden());
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let projector = LayoutProjector::new();
        let result = projector.project(&session(at(10, 0), 30), 17, 9);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_custom_scale() {
        let projector = LayoutProjector::with_settings(LayoutSettings {
            pixels_per_hour: 40.0,
            min_visible_length: 10.0,
        });
        let p = projector.project(&session(at(8, 0), 90), 6, 24).unwrap();
        assert_eq!(p.offset, 80.0);
        assert_eq!(p.length, 60.0);
    }
}
