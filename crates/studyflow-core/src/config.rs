//! TOML-based planner configuration.
//!
//! Stores the tunable parts of the engine:
//! - Day-window hours for slot search and grid display
//! - The effectiveness table and optimal threshold
//! - Grid geometry (pixels per hour, minimum visible length)
//! - Custom session types
//!
//! Configuration is stored at `~/.config/studyflow/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::effectiveness::{EffectivenessModel, HOURS_PER_DAY};
use crate::error::ConfigError;
use crate::planner::LayoutSettings;
use crate::session::{SessionType, SessionTypeRegistry};

/// Day-window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_start")]
    pub start_hour: u32,
    #[serde(default = "default_window_end")]
    pub end_hour: u32,
}

fn default_window_start() -> u32 {
    6
}

fn default_window_end() -> u32 {
    24
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            start_hour: default_window_start(),
            end_hour: default_window_end(),
        }
    }
}

/// Effectiveness model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectivenessConfig {
    /// Optional per-hour score override; must hold exactly 24 values.
    #[serde(default)]
    pub scores: Option<Vec<f64>>,
    #[serde(default = "default_optimal_threshold")]
    pub optimal_threshold: f64,
}

fn default_optimal_threshold() -> f64 {
    0.8
}

impl Default for EffectivenessConfig {
    fn default() -> Self {
        Self {
            scores: None,
            optimal_threshold: default_optimal_threshold(),
        }
    }
}

/// Planner configuration.
///
/// Serialized to/from TOML at `~/.config/studyflow/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub effectiveness: EffectivenessConfig,
    #[serde(default)]
    pub layout: LayoutSettings,
    /// Extra session types merged over the built-ins.
    #[serde(default)]
    pub session_types: Vec<SessionType>,
}

impl PlannerConfig {
    /// Default configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("studyflow").join("config.toml"))
    }

    /// Load from the default path, falling back to defaults if the file is
    /// missing or unreadable.
    pub fn load_or_default() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save to the default path, creating parent directories as needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path().ok_or_else(|| ConfigError::SaveFailed {
            path: PathBuf::from("<none>"),
            message: "no config directory on this platform".to_string(),
        })?;
        self.save_to(&path)
    }

    /// Save to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(path, contents).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Build the effectiveness model described by this configuration.
    pub fn effectiveness_model(&self) -> Result<EffectivenessModel, ConfigError> {
        let threshold = self.effectiveness.optimal_threshold;
        let model = match &self.effectiveness.scores {
            None => EffectivenessModel::with_threshold(threshold),
            Some(scores) => {
                let table: [f64; HOURS_PER_DAY] =
                    scores
                        .as_slice()
                        .try_into()
                        .map_err(|_| ConfigError::InvalidValue {
                            key: "effectiveness.scores".to_string(),
                            message: format!(
                                "expected {HOURS_PER_DAY} scores, got {}",
                                scores.len()
                            ),
                        })?;
                EffectivenessModel::from_table(table, threshold)
            }
        };
        model.map_err(|e| ConfigError::InvalidValue {
            key: "effectiveness".to_string(),
            message: e.to_string(),
        })
    }

    /// Build the session-type registry: built-ins plus configured types.
    pub fn registry(&self) -> SessionTypeRegistry {
        let mut registry = SessionTypeRegistry::builtin();
        for session_type in &self.session_types {
            registry.register(session_type.clone());
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.window.start_hour, 6);
        assert_eq!(config.window.end_hour, 24);
        assert_eq!(config.effectiveness.optimal_threshold, 0.8);
        assert!(config.effectiveness.scores.is_none());
        assert!(config.effectiveness_model().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let config: PlannerConfig = toml::from_str(
            r#"
            [window]
            start_hour = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.window.start_hour, 8);
        assert_eq!(config.window.end_hour, 24);
        assert_eq!(config.layout.pixels_per_hour, 60.0);
    }

    #[test]
    fn test_scores_override_must_cover_every_hour() {
        let config: PlannerConfig = toml::from_str(
            r#"
            [effectiveness]
            scores = [0.5, 0.5, 0.5]
            "#,
        )
        .unwrap();
        assert!(matches!(
            config.effectiveness_model(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = PlannerConfig::default();
        config.window.start_hour = 7;
        config.session_types.push(SessionType::new(
            "writing",
            "Writing",
            "#cccccc",
            40,
        ));
        config.save_to(&path).unwrap();

        let loaded = PlannerConfig::load_from(&path).unwrap();
        assert_eq!(loaded.window.start_hour, 7);
        assert_eq!(loaded.registry().default_minutes("writing"), Some(40));
        // Built-ins survive the merge
        assert_eq!(loaded.registry().default_minutes("grammar"), Some(45));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            PlannerConfig::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
