//! Application configuration
//!
//! All scene setup has hard-coded defaults. A `scene2d.ron` file in the
//! working directory can override any subset of them.

use std::path::Path;

use macroquad::math::{vec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::services::{NotificationService, Severity};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "scene2d.ron";

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            title: "Graficas Computacionales 2D".to_string(),
        }
    }
}

/// Waypoint-following parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Units per second
    pub speed: f32,
    /// Seek stops moving inside this distance
    pub range: f32,
    /// Waypoint counts as reached below this distance
    pub arrival_threshold: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: 200.0,
            range: 10.0,
            arrival_threshold: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub motion: MotionConfig,
    pub waypoints: Vec<[f32; 2]>,
    /// Directory textures are loaded from
    pub texture_dir: String,
    /// Fallback texture, as (stem, extension)
    pub default_texture: (String, String),
    /// Message log written on shutdown
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            motion: MotionConfig::default(),
            waypoints: vec![
                [100.0, 100.0],
                [400.0, 100.0],
                [400.0, 400.0],
                [100.0, 400.0],
                [250.0, 250.0],
            ],
            texture_dir: ".".to_string(),
            default_texture: ("Default".to_string(), "png".to_string()),
            log_file: "Messages.txt".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let contents = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load `path` if it exists. A broken file is reported and ignored.
    pub fn load_or_default(path: impl AsRef<Path>, notes: &mut NotificationService) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_file(path) {
            Ok(config) => {
                notes.log(format!("AppConfig::load : loaded {}", path.display()));
                config
            }
            Err(e) => {
                notes.add_message(
                    Severity::Warning,
                    format!("AppConfig::load : {} ignored ({}), using defaults", path.display(), e),
                );
                Self::default()
            }
        }
    }

    /// Reject values the scene cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid {
                field: "window",
                reason: format!("{}x{} is not a usable size", self.window.width, self.window.height),
            });
        }
        if !self.motion.speed.is_finite() || self.motion.speed < 0.0 {
            return Err(ConfigError::Invalid {
                field: "motion.speed",
                reason: format!("{} must be a finite, non-negative number", self.motion.speed),
            });
        }
        if !(self.motion.arrival_threshold > 0.0) {
            return Err(ConfigError::Invalid {
                field: "motion.arrival_threshold",
                reason: format!("{} must be positive", self.motion.arrival_threshold),
            });
        }
        Ok(())
    }

    pub fn waypoint_points(&self) -> Vec<Vec2> {
        self.waypoints.iter().map(|[x, y]| vec2(*x, *y)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_scene() {
        let config = AppConfig::default();
        assert_eq!(config.waypoint_points().len(), 5);
        assert_eq!(config.waypoint_points()[4], vec2(250.0, 250.0));
        assert!((config.motion.arrival_threshold - 10.0).abs() < 0.001);
        assert_eq!(config.log_file, "Messages.txt");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene2d.ron");

        let mut config = AppConfig::default();
        config.motion.speed = 75.0;
        config.waypoints = vec![[1.0, 2.0]];
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene2d.ron");
        std::fs::write(&path, "(motion: (speed: 50.0))").unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert!((loaded.motion.speed - 50.0).abs() < 0.001);
        assert!((loaded.motion.range - 10.0).abs() < 0.001);
        assert_eq!(loaded.window, WindowConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults_silently() {
        let dir = tempfile::tempdir().unwrap();
        let mut notes = NotificationService::new();

        let config = AppConfig::load_or_default(dir.path().join("nope.ron"), &mut notes);
        assert_eq!(config, AppConfig::default());
        assert_eq!(notes.message_count(), 0);
    }

    #[test]
    fn test_broken_file_warns_and_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene2d.ron");
        std::fs::write(&path, "(window: oops").unwrap();
        let mut notes = NotificationService::new();

        let config = AppConfig::load_or_default(&path, &mut notes);
        assert_eq!(config, AppConfig::default());
        assert_eq!(notes.messages_for(Severity::Warning).len(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.window.width = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field: "window", .. })));

        let mut config = AppConfig::default();
        config.motion.arrival_threshold = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.motion.speed = f32::NAN;
        assert!(config.validate().is_err());
    }
}
