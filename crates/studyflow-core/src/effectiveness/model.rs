//! Static hour-of-day effectiveness table.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of entries in the effectiveness table.
pub const HOURS_PER_DAY: usize = 24;

/// Default per-hour scores. Peaks mid-morning, mid-afternoon, and early
/// evening; troughs overnight and after lunch.
const DEFAULT_SCORES: [f64; HOURS_PER_DAY] = [
    0.10, 0.10, 0.10, 0.10, 0.10, // 00-04
    0.20, 0.35, 0.55, 0.70, // 05-08
    0.90, 0.85, // 09-10
    0.75, 0.60, 0.50, 0.65, // 11-14
    0.85, 0.82, // 15-16
    0.70, 0.60, 0.70, // 17-19
    0.80, // 20
    0.65, 0.45, 0.25, // 21-23
];

const DEFAULT_OPTIMAL_THRESHOLD: f64 = 0.8;

/// Hour-of-day learning-effectiveness model.
///
/// Total over all 24 hours; lookups never fail. Scores are a configuration
/// table, not derived from usage data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectivenessModel {
    scores: [f64; HOURS_PER_DAY],
    optimal_threshold: f64,
}

impl Default for EffectivenessModel {
    fn default() -> Self {
        Self {
            scores: DEFAULT_SCORES,
            optimal_threshold: DEFAULT_OPTIMAL_THRESHOLD,
        }
    }
}

impl EffectivenessModel {
    /// Create a model from a custom table.
    ///
    /// # Errors
    /// Returns an error if any score or the threshold is outside [0, 1].
    pub fn from_table(
        scores: [f64; HOURS_PER_DAY],
        optimal_threshold: f64,
    ) -> Result<Self, ValidationError> {
        for (hour, score) in scores.iter().enumerate() {
            if !(0.0..=1.0).contains(score) {
                return Err(ValidationError::InvalidValue {
                    field: format!("scores[{hour}]"),
                    message: format!("score {score} must be within [0, 1]"),
                });
            }
        }
        if !(0.0..=1.0).contains(&optimal_threshold) {
            return Err(ValidationError::InvalidValue {
                field: "optimal_threshold".to_string(),
                message: format!("threshold {optimal_threshold} must be within [0, 1]"),
            });
        }
        Ok(Self {
            scores,
            optimal_threshold,
        })
    }

    /// Default table with a custom optimal threshold.
    ///
    /// # Errors
    /// Returns an error if the threshold is outside [0, 1].
    pub fn with_threshold(optimal_threshold: f64) -> Result<Self, ValidationError> {
        Self::from_table(DEFAULT_SCORES, optimal_threshold)
    }

    /// Effectiveness score for an hour of day, in [0, 1].
    pub fn score_of(&self, hour: u32) -> f64 {
        self.scores[hour as usize % HOURS_PER_DAY]
    }

    /// Whether an hour counts as an optimal study hour.
    pub fn is_optimal(&self, hour: u32) -> bool {
        self.score_of(hour) >= self.optimal_threshold
    }

    /// The configured optimal threshold.
    pub fn optimal_threshold(&self) -> f64 {
        self.optimal_threshold
    }

    /// All optimal hours, ascending.
    pub fn optimal_hours(&self) -> Vec<u32> {
        (0..HOURS_PER_DAY as u32)
            .filter(|&h| self.is_optimal(h))
            .collect()
    }

    /// Render the table as an ASCII bar chart.
    pub fn render_ascii_chart(&self) -> String {
        let mut output = String::from("\nLearning Effectiveness:\n");
        output.push_str(&"─".repeat(50));
        output.push('\n');

        for hour in 0..HOURS_PER_DAY as u32 {
            let score = self.score_of(hour);
            let bar_length = (score * 30.0) as usize;
            let bar = "█".repeat(bar_length);
            let empty = " ".repeat(30 - bar_length);
            let marker = if self.is_optimal(hour) { "●" } else { " " };

            output.push_str(&format!(
                "{:02}:00 {}{}{} {:.0}%\n",
                hour,
                bar,
                empty,
                marker,
                score * 100.0
            ));
        }

        output.push_str(&"─".repeat(50));
        output.push_str("\n● Optimal study hour\n");
        output
    }
}
