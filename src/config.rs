// SPDX-License-Identifier: MPL-2.0
//! Application configuration, loaded from and saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[display]` - Gallery display settings
//! - `[[tours]]` - 360° room tour entries shown on the gallery screen
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_VITRINE_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "de", "en-US").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Gallery display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Whether the lightbox shows a "current / total" counter.
    #[serde(default = "default_show_counter")]
    pub show_image_counter: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_image_counter: default_show_counter(),
        }
    }
}

fn default_show_counter() -> bool {
    true
}

/// A 360° room tour entry shown on the gallery screen.
///
/// The URL may be a placeholder containing the `TOUR_URL` token; the tour
/// dispatcher then shows an instructional message instead of launching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TourEntry {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default = "default_tours")]
    pub tours: Vec<TourEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            display: DisplayConfig::default(),
            tours: default_tours(),
        }
    }
}

fn default_tours() -> Vec<TourEntry> {
    vec![TourEntry {
        label: "Suite Panorama".to_string(),
        url: "https://example.com/TOUR_URL".to_string(),
    }]
}

fn config_file_path() -> Option<PathBuf> {
    paths::get_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields the defaults, and a broken file yields
/// the defaults plus a warning key the caller can surface as a notification.
pub fn load() -> (Config, Option<String>) {
    let Some(path) = config_file_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some("notification-config-parse-error".to_string()),
        ),
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = config_file_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
            },
            display: DisplayConfig {
                show_image_counter: false,
            },
            tours: vec![TourEntry {
                label: "Turmzimmer".to_string(),
                url: "https://my.matterport.com/show/?m=abc123".to_string(),
            }],
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_rejects_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn default_config_has_counter_and_placeholder_tour() {
        let config = Config::default();
        assert!(config.display.show_image_counter);
        assert!(config.general.language.is_none());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"de\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("de"));
        assert!(loaded.display.show_image_counter);
        assert_eq!(loaded.tours.len(), 1);
        assert!(loaded.tours[0].url.contains("TOUR_URL"));
    }
}
