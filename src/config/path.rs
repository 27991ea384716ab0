//! Config path management.
//!
//! Determines the config file location, with support for a CLI override and
//! an environment variable.

use std::path::PathBuf;
use std::sync::OnceLock;

use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};

/// Environment variable naming the config file (also used for test isolation).
pub const CONFIG_PATH_ENV_VAR: &str = "PROMPTLINE_CONFIG_PATH";

/// Override for the config path, set via the `--config` CLI flag
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Set the config path override (called from the `--config` flag)
pub fn set_config_path(path: PathBuf) {
    CONFIG_PATH.set(path).ok();
}

/// Get the config file path.
///
/// Priority:
/// 1. CLI `--config` flag (set via `set_config_path`)
/// 2. `PROMPTLINE_CONFIG_PATH` environment variable
/// 3. Platform-specific default location
pub fn get_config_path() -> Option<PathBuf> {
    if let Some(path) = CONFIG_PATH.get() {
        return Some(path.clone());
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV_VAR)
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }

    // choose_base_strategy uses:
    // - XDG on Linux (respects XDG_CONFIG_HOME, falls back to ~/.config)
    // - XDG on macOS (~/.config instead of ~/Library/Application Support)
    // - Windows conventions on Windows (%APPDATA%)
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("promptline").join("config.toml"))
}
