// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast manager's configuration, including loading
//! and saving it to a `toasts.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toasts::config::{self, ToastConfig};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.max_toasts = Some(3);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::toast::{MaxToasts, ProgressInterval, RemovalDelay};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "toasts.toml";
const APP_NAME: &str = "IcedToasts";

/// Persisted toast preferences. Unset fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    #[serde(default)]
    pub max_toasts: Option<usize>,
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    #[serde(default)]
    pub progress_interval_ms: Option<u64>,
    #[serde(default)]
    pub removal_delay_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_toasts: Some(DEFAULT_MAX_TOASTS),
            default_duration_ms: Some(DEFAULT_DURATION_MS),
            progress_interval_ms: Some(DEFAULT_PROGRESS_INTERVAL_MS),
            removal_delay_ms: Some(DEFAULT_REMOVAL_DELAY_MS),
        }
    }
}

impl ToastConfig {
    /// Resolves the persisted values into validated manager settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            max_toasts: MaxToasts::new(self.max_toasts.unwrap_or(DEFAULT_MAX_TOASTS)),
            default_duration: Duration::from_millis(
                self.default_duration_ms.unwrap_or(DEFAULT_DURATION_MS),
            ),
            progress_interval: ProgressInterval::from_millis(
                self.progress_interval_ms
                    .unwrap_or(DEFAULT_PROGRESS_INTERVAL_MS),
            ),
            removal_delay: RemovalDelay::from_millis(
                self.removal_delay_ms.unwrap_or(DEFAULT_REMOVAL_DELAY_MS),
            ),
        }
    }
}

/// Validated runtime settings of the toast manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub max_toasts: MaxToasts,
    /// Used when `show` is called without a duration. Zero means persistent.
    pub default_duration: Duration,
    pub progress_interval: ProgressInterval,
    pub removal_delay: RemovalDelay,
}

impl Default for Settings {
    fn default() -> Self {
        ToastConfig::default().settings()
    }
}

impl Settings {
    /// Returns a copy with a different capacity.
    #[must_use]
    pub fn with_max_toasts(mut self, max: usize) -> Self {
        self.max_toasts = MaxToasts::new(max);
        self
    }

    /// Returns a copy with a different default duration.
    #[must_use]
    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the user config directory.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (ToastConfig, Option<String>) {
    match get_default_config_path() {
        Some(path) if path.exists() => load_or_default(&path),
        _ => (ToastConfig::default(), None),
    }
}

/// Loads the configuration from `path`, falling back to defaults with a
/// warning when the file is unreadable or malformed.
pub fn load_or_default(path: &Path) -> (ToastConfig, Option<String>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => (
            ToastConfig::default(),
            Some(format!("failed to load {}: {err}", path.display())),
        ),
    }
}

pub fn load_from_path(path: &Path) -> Result<ToastConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save(config: &ToastConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn save_to_path(config: &ToastConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = ToastConfig {
            max_toasts: Some(3),
            default_duration_ms: Some(2500),
            progress_interval_ms: Some(100),
            removal_delay_ms: Some(0),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("toasts.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toasts.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_or_default_warns_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toasts.toml");
        fs::write(&config_path, "max_toasts = \"many\"").expect("failed to write toml");

        let (config, warning) = load_or_default(&config_path);
        assert_eq!(config, ToastConfig::default());
        assert!(warning.is_some());
    }

    #[test]
    fn partial_file_keeps_missing_fields_unset() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("toasts.toml");
        fs::write(&config_path, "max_toasts = 2\n").expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.max_toasts, Some(2));
        assert_eq!(loaded.default_duration_ms, None);

        let settings = loaded.settings();
        assert_eq!(settings.max_toasts.value(), 2);
        assert_eq!(
            settings.default_duration,
            Duration::from_millis(DEFAULT_DURATION_MS)
        );
    }

    #[test]
    fn settings_clamp_out_of_range_values() {
        let config = ToastConfig {
            max_toasts: Some(0),
            default_duration_ms: Some(0),
            progress_interval_ms: Some(1),
            removal_delay_ms: Some(99_999),
        };
        let settings = config.settings();
        assert_eq!(settings.max_toasts.value(), MIN_MAX_TOASTS);
        assert_eq!(settings.default_duration, Duration::ZERO);
        assert_eq!(settings.progress_interval.as_millis(), 10);
        assert_eq!(settings.removal_delay.as_millis(), 2000);
    }

    #[test]
    fn default_config_matches_default_settings() {
        let settings = ToastConfig::default().settings();
        assert_eq!(settings.max_toasts.value(), 5);
        assert_eq!(settings.default_duration, Duration::from_millis(5000));
        assert_eq!(settings.progress_interval.as_millis(), 50);
        assert_eq!(settings.removal_delay.as_millis(), 300);
    }
}
