// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 2. **Environment variables** (`ICED_VITRINE_DATA_DIR`, `ICED_VITRINE_CONFIG_DIR`)
//! 3. **Platform default** - via the `dirs` crate

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedVitrine";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_VITRINE_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_VITRINE_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for data and config directories.
///
/// Must be called at most once, before any path resolution.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    CLI_DATA_DIR
        .set(data_dir.map(PathBuf::from))
        .expect("CLI data dir override already initialized");
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

fn env_dir(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Returns the application data directory (persisted state).
pub fn get_data_dir() -> Option<PathBuf> {
    if let Some(path) = CLI_DATA_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }
    if let Some(path) = env_dir(ENV_DATA_DIR) {
        return Some(path);
    }
    dirs::data_dir().map(|dir| dir.join(APP_NAME))
}

/// Returns the application config directory (`settings.toml`).
pub fn get_config_dir() -> Option<PathBuf> {
    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }
    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_dirs_end_with_app_name() {
        // Only meaningful when no overrides are active in the test environment.
        if std::env::var(ENV_DATA_DIR).is_err() && CLI_DATA_DIR.get().is_none() {
            if let Some(dir) = get_data_dir() {
                assert!(dir.ends_with(APP_NAME));
            }
        }
    }
}
