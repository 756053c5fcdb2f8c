//! Directory paths for the scope.
//!
//! Uses the [`dirs`] crate for platform-appropriate resolution.
//! `SPOTIFY_SCOPE_CONFIG_DIR` overrides the config directory for tests or
//! custom deployments.

use std::path::PathBuf;

/// Environment variable that overrides [`config_dir`].
pub const CONFIG_DIR_ENV: &str = "SPOTIFY_SCOPE_CONFIG_DIR";

/// Scope config directory.
///
/// Resolves to `dirs::config_dir()/spotify-scope/` by default.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("spotify-scope"))
        .unwrap_or_else(|| PathBuf::from("/tmp/spotify-scope-config"))
}

/// Main config file path (`config_dir()/config.toml`).
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}
