//! Scope configuration, persisted as TOML.
//!
//! ```toml
//! [search]
//! max_results = 5
//! timeout_seconds = 8
//!
//! [session]
//! min_dispatch_interval_ms = 250
//!
//! [logging]
//! filter = "info"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use artist_search::SearchConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScopeError};

/// Top-level configuration for the scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Catalog endpoints, result cap and request timeout.
    pub search: SearchConfig,
    /// Dispatch behaviour of a search session.
    pub session: SessionConfig,
    /// Log filter used when `RUST_LOG` is unset.
    pub logging: LoggingConfig,
}

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Minimum time between two search dispatches, in milliseconds.
    /// Keystrokes arriving faster than this are delayed, not dropped.
    pub min_dispatch_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_dispatch_interval_ms: 250,
        }
    }
}

impl SessionConfig {
    /// The dispatch interval as a [`Duration`].
    pub fn min_dispatch_interval(&self) -> Duration {
        Duration::from_millis(self.min_dispatch_interval_ms)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` `EnvFilter` directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

impl ScopeConfig {
    /// Parse configuration from TOML text, falling back to defaults for
    /// missing fields.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::Config`] if the text is not valid TOML for this shape.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ScopeError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load the file at [`Self::default_config_path`], or defaults if it
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ScopeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path (`<config dir>/spotify-scope/config.toml`).
    pub fn default_config_path() -> PathBuf {
        crate::scope_dirs::config_file()
    }

    /// Validate the search section.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::Search`] wrapping the first invalid field.
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        Ok(())
    }
}
