// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! This holds the single durable preference the application keeps: the
//! visitor's cookie-consent choice. It is deliberately separate from the
//! user-editable TOML preferences; state here is written by the application
//! itself, read once at startup, and never merged.

use super::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// The visitor's recorded consent choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Consent {
    Accepted,
    Declined,
}

/// Application state that persists across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    /// Consent banner choice. `None` means the banner has not been answered
    /// yet and will present itself again after the startup delay.
    #[serde(default)]
    pub consent: Option<Consent>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns `(state, optional_warning)`. A missing file is not a warning;
    /// an unreadable or unparsable one falls back to the default state with a
    /// notification key the caller can surface.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory (tests, portable use).
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(state) => (state, None),
                    Err(_) => (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    ),
                }
            }
            Err(_) => (
                Self::default(),
                Some("notification-state-read-error".to_string()),
            ),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Returns an optional warning key if the save failed; persistence
    /// failures are never fatal.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory (tests, portable use).
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path(base_dir) else {
            return Some("notification-state-save-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-state-save-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                match ciborium::into_writer(self, writer) {
                    Ok(()) => None,
                    Err(_) => Some("notification-state-save-error".to_string()),
                }
            }
            Err(_) => Some("notification-state-save-error".to_string()),
        }
    }

    fn state_file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        let dir = base_dir.or_else(paths::get_data_dir)?;
        Some(dir.join(STATE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_consent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        let state = AppState {
            consent: Some(Consent::Accepted),
        };
        assert_eq!(state.save_to(base.clone()), None);

        let (loaded, warning) = AppState::load_from(base);
        assert_eq!(loaded, state);
        assert_eq!(warning, None);
    }

    #[test]
    fn declined_choice_round_trips() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());

        let state = AppState {
            consent: Some(Consent::Declined),
        };
        state.save_to(base.clone());
        let (loaded, _) = AppState::load_from(base);
        assert_eq!(loaded.consent, Some(Consent::Declined));
    }

    #[test]
    fn missing_file_yields_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert_eq!(warning, None);
        assert_eq!(state.consent, None);
    }

    #[test]
    fn corrupt_file_yields_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), b"not cbor at all")
            .expect("failed to write corrupt state");

        let (state, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));
        assert_eq!(state, AppState::default());
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
    }
}
