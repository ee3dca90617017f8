//! Core error types for studyflow-core.
//!
//! This module defines the error hierarchy using thiserror. The engine has
//! very few failure modes: impossible scheduling requests degrade to empty
//! results (see the planner module), so only malformed input and
//! configuration problems surface as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyflow-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
///
/// Raised at the boundary when input shape is invalid; never used for
/// "no capacity found", which is an empty result.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end_time ({end}) must be greater than start_time ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Estimated duration does not match the session interval
    #[error("Duration mismatch: estimated {estimated} min but interval spans {interval} min")]
    DurationMismatch { estimated: i64, interval: i64 },

    /// Invalid hour window
    #[error("Invalid hour window: start hour {start_hour} must be less than end hour {end_hour} (both 0-24)")]
    InvalidWindow { start_hour: u32, end_hour: u32 },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
