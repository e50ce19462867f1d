//! Config path management.
//!
//! Handles determining the config file location across platforms,
//! with support for CLI overrides and environment variables.

use std::path::PathBuf;

use etcetera::base_strategy::{BaseStrategy, choose_base_strategy};

/// Environment variable naming the config file (used by tests for isolation).
pub const CONFIG_PATH_ENV_VAR: &str = "NODEGRID_CONFIG_PATH";

/// Get the config file path.
///
/// Priority:
/// 1. CLI --config flag
/// 2. NODEGRID_CONFIG_PATH environment variable
/// 3. Platform-specific default location
///
/// Returns `None` only when no home directory can be determined.
pub fn config_path(cli_override: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = cli_override {
        return Some(path);
    }

    if let Ok(path) = std::env::var(CONFIG_PATH_ENV_VAR) {
        return Some(PathBuf::from(path));
    }

    // choose_base_strategy uses:
    // - XDG on Linux (respects XDG_CONFIG_HOME, falls back to ~/.config)
    // - XDG on macOS (~/.config instead of ~/Library/Application Support)
    // - Windows conventions on Windows (%APPDATA%)
    let strategy = choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("nodegrid").join("config.toml"))
}
