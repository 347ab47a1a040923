//! Game settings and tuning
//!
//! Read once at startup. On the web the JSON lives in a
//! `<script id="settings" type="application/json">` element; the native build
//! takes a file path. Anything missing falls back to the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{Catalog, CatalogEntry};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error("could not read settings file")]
    Io(#[from] std::io::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Timing and geometry of the falling loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Milliseconds between falling steps
    pub tick_ms: u64,
    /// Pixels fallen per step
    pub fall_step_px: f32,
    /// Milliseconds an outcome stays on screen
    pub resolve_delay_ms: u64,
    /// Falling icon size (dp)
    pub icon_size_dp: f32,
    /// Role zone size (dp)
    pub zone_size_dp: f32,
    /// Autopilot drag speed (px per ms)
    pub autopilot_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            fall_step_px: FALL_STEP_PX,
            resolve_delay_ms: RESOLVE_DELAY_MS,
            icon_size_dp: ICON_SIZE_DP,
            zone_size_dp: ZONE_SIZE_DP,
            autopilot_speed: AUTOPILOT_SPEED,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "tick_ms",
                reason: "must be greater than zero",
            });
        }
        if self.resolve_delay_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "resolve_delay_ms",
                reason: "must be greater than zero",
            });
        }
        if !(self.fall_step_px > 0.0) {
            return Err(SettingsError::Invalid {
                field: "fall_step_px",
                reason: "must be a positive number",
            });
        }
        if !(self.icon_size_dp > 0.0) {
            return Err(SettingsError::Invalid {
                field: "icon_size_dp",
                reason: "must be a positive number",
            });
        }
        if !(self.zone_size_dp > 0.0) {
            return Err(SettingsError::Invalid {
                field: "zone_size_dp",
                reason: "must be a positive number",
            });
        }
        if !(self.autopilot_speed >= 0.0) {
            return Err(SettingsError::Invalid {
                field: "autopilot_speed",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}

/// Sound preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,
    pub audio: AudioSettings,
    /// Fixed RNG seed; the wall clock is used when absent
    pub seed: Option<u64>,
    /// Start with the autopilot steering the icon
    pub autopilot: bool,
    /// Replacement service → role table
    pub catalog: Option<Vec<CatalogEntry>>,
}

impl Settings {
    /// DOM id of the element carrying settings JSON
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "settings";

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.tuning.validate()?;
        Ok(settings)
    }

    /// Catalog to play with: the override if present, otherwise the built-in table
    pub fn catalog(&self) -> Catalog {
        match &self.catalog {
            Some(entries) => Catalog::new(entries.clone()),
            None => Catalog::default(),
        }
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from page");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring page settings: {}", e);
                    Self::default()
                }
            },
            _ => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Native loader: falls back to defaults on any failure
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::load_from_path(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Role, Service};

    #[test]
    fn test_empty_json_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.tuning.tick_ms, 100);
        assert_eq!(settings.tuning.resolve_delay_ms, 3000);
        assert_eq!(settings.tuning.fall_step_px, 20.0);
    }

    #[test]
    fn test_partial_tuning_keeps_other_defaults() {
        let settings = Settings::from_json(r#"{"tuning": {"tick_ms": 50}, "seed": 7}"#).unwrap();
        assert_eq!(settings.tuning.tick_ms, 50);
        assert_eq!(settings.tuning.resolve_delay_ms, RESOLVE_DELAY_MS);
        assert_eq!(settings.seed, Some(7));
        assert!(!settings.audio.muted);
    }

    #[test]
    fn test_zero_tick_rejected() {
        let err = Settings::from_json(r#"{"tuning": {"tick_ms": 0}}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "tick_ms", .. }));
    }

    #[test]
    fn test_negative_icon_size_rejected() {
        let err = Settings::from_json(r#"{"tuning": {"icon_size_dp": -4.0}}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "icon_size_dp", .. }));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Settings::from_json("{tuning").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_catalog_override() {
        let json = r#"{
            "catalog": [
                {"service": "Vaccination", "role": "Child", "explanation": "School shots"}
            ]
        }"#;
        let settings = Settings::from_json(json).unwrap();
        let catalog = settings.catalog();
        assert_eq!(catalog.expected_role(Service::Vaccination), Some(Role::Child));
        assert_eq!(catalog.expected_role(Service::Playground), None);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Some(std::path::Path::new("/nonexistent/role-drop.json")));
        assert_eq!(settings, Settings::default());
    }
}
