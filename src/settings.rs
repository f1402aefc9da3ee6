//! Game settings
//!
//! Loaded from a JSON file. Missing fields take their defaults, so an empty
//! object `{}` is a valid settings file.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Error loading or validating a settings file
#[derive(Debug)]
pub enum SettingsError {
    /// File could not be read
    Io(std::io::Error),
    /// File is not valid settings JSON
    Json(serde_json::Error),
    /// A value is out of range
    Invalid(&'static str),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "cannot read settings: {}", e),
            SettingsError::Json(e) => write!(f, "malformed settings: {}", e),
            SettingsError::Invalid(what) => write!(f, "invalid settings: {}", what),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Json(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Json(e)
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    /// Visible width in world units
    pub screen_width: f32,
    /// Visible height in world units (also the terrain baseline)
    pub screen_height: f32,
    /// Terrain samples across one screen width
    pub terrain_segments: usize,

    // === Timing ===
    /// Fixed tick rate
    pub tick_hz: f32,
    /// Stop a headless run after this many ticks (None = until game over)
    pub max_ticks: Option<u64>,

    // === Session ===
    /// RNG seed (None = random each run)
    pub seed: Option<u64>,
    /// Let the autopilot play
    pub demo: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            terrain_segments: TERRAIN_SEGMENTS,

            tick_hz: TICK_HZ,
            max_ticks: Some(5 * 60 * 60),

            seed: None,
            demo: true,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.screen_width > 0.0) {
            return Err(SettingsError::Invalid("screen_width must be positive"));
        }
        if !(self.screen_height > 0.0) {
            return Err(SettingsError::Invalid("screen_height must be positive"));
        }
        if self.terrain_segments == 0 {
            return Err(SettingsError::Invalid("terrain_segments must be at least 1"));
        }
        if !(self.tick_hz > 0.0) {
            return Err(SettingsError::Invalid("tick_hz must be positive"));
        }
        Ok(())
    }

    /// Duration of one tick in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz
    }

    /// Screen dimensions as consumed by the simulation
    pub fn dims(&self) -> crate::sim::ScreenDims {
        crate::sim::ScreenDims {
            width: self.screen_width,
            height: self.screen_height,
            segments: self.terrain_segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::from_json(r#"{"seed": 7, "demo": false}"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert!(!settings.demo);
        assert_eq!(settings.screen_width, SCREEN_WIDTH);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        let err = Settings::from_json(r#"{"terrain_segments": 0}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err = Settings::from_json(r#"{"screen_width": -1.0}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ nope").unwrap_err();
        assert!(matches!(err, SettingsError::Json(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/definitely/not/here/settings.json");
        assert!(matches!(
            Settings::load_from(path),
            Err(SettingsError::Io(_))
        ));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
    }
}
