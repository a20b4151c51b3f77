// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! The file uses a sectioned format:
//!
//! ```toml
//! [general]
//! language = "zh-CN"
//! ```
//!
//! The language choice is the only preference the app persists. A missing file
//! is not an error (defaults apply); an unreadable or unparsable file falls
//! back to defaults and reports a warning key the caller can surface as a
//! notification.
//!
//! The config directory is resolved by [`crate::app::paths`]: explicit
//! override, then `--config-dir`, then `AGIPOCKET_CONFIG_DIR`, then the
//! platform default.

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE: &str = "settings.toml";

/// i18n key surfaced as a warning toast when the config file exists but
/// cannot be read or parsed.
const LOAD_ERROR_KEY: &str = "notification-config-load-error";

/// General application preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Preferred UI language as a BCP-47 code (e.g. `en`, `zh-CN`).
    ///
    /// `None` means no preference was saved yet; the locale detection
    /// chain then falls through to the OS locale list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Root configuration structure mapping the sectioned `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Convenience constructor for a config carrying only a language choice.
    #[must_use]
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            general: GeneralConfig {
                language: Some(language.into()),
            },
        }
    }
}

/// Loads the configuration from the default location.
///
/// Returns the config plus an optional warning i18n key. A missing file
/// yields `(Config::default(), None)`; a file that exists but cannot be
/// read or parsed yields defaults plus the warning key so the UI can tell
/// the user their preferences were ignored.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration, optionally overriding the config directory.
///
/// The override exists so tests can run against isolated temp directories
/// without touching the user's real settings.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(config_dir) = paths::get_app_config_dir_with_override(base_dir) else {
        return (Config::default(), None);
    };

    let config_path = config_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return (Config::default(), None);
    }

    match load_from_path(&config_path) {
        Ok(config) => (config, None),
        Err(err) => {
            eprintln!(
                "Failed to load config from {}: {}",
                config_path.display(),
                err
            );
            (Config::default(), Some(LOAD_ERROR_KEY.to_string()))
        }
    }
}

/// Loads and parses the configuration file at `path`.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration, optionally overriding the config directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let config_dir = paths::get_app_config_dir_with_override(base_dir)
        .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;

    save_to_path(config, &config_dir.join(CONFIG_FILE))
}

/// Serializes the configuration as pretty TOML and writes it to `path`,
/// creating parent directories as needed.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    std::fs::write(path, content)?;
    Ok(())
}
