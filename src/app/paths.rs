// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the application config directory.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`AGIPOCKET_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! The explicit override has highest priority because it's the most specific -
//! when code explicitly passes a path, it should always be respected.
//!
//! # Usage
//!
//! The CLI override should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "AgiPocket";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "AGIPOCKET_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// This should be called once at application startup, before any path
/// resolution functions are called. The CLI override takes priority over
/// the environment variable and the platform default.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_overrides(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// Returns the CLI override for the config directory, if set.
fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// This directory holds user preferences (settings.toml); the language
/// choice is the only preference the app persists.
///
/// # Resolution Order
///
/// 1. CLI argument `--config-dir` (if set via [`init_cli_overrides`])
/// 2. `AGIPOCKET_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory:
///    - Linux: `~/.config/AgiPocket/`
///    - macOS: `~/Library/Application Support/AgiPocket/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\AgiPocket\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Serializes every test in the crate that touches `ENV_CONFIG_DIR`.
/// Tests in other modules set the variable too; a per-module mutex would
/// not stop them from racing each other.
#[cfg(test)]
pub(crate) fn env_lock() -> &'static std::sync::Mutex<()> {
    static LOCK: OnceLock<std::sync::Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| std::sync::Mutex::new(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = env_lock().lock().unwrap();
        // Clear env var to test default behavior
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
        // If dirs::config_dir() returns None (rare), the test passes silently
    }

    #[test]
    fn app_config_dir_is_absolute() {
        let _lock = env_lock().lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.is_absolute(), "App config dir should be absolute path");
        }
    }

    #[test]
    fn override_path_takes_precedence() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default() {
        let _lock = env_lock().lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        // Cleanup
        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = env_lock().lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        let result = get_app_config_dir();
        // Should fall back to platform default which contains app name
        if let Some(path) = result {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = env_lock().lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));

        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
