//! Configuration for kase
//!
//! Read from `<config_dir>/kase/config.toml` when present:
//!
//! ```toml
//! case_dir = "~/cases"
//! debounce_ms = 100
//! log_file = "/tmp/kase.log"
//! ```
//!
//! The case directory resolves as: command-line argument, then the
//! `KASE_DIR` environment variable, then this file, then `~/cases`.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the configured case directory
pub const CASE_DIR_ENV: &str = "KASE_DIR";

const APP_NAME: &str = "kase";

fn default_case_dir() -> String {
    "~/cases".to_string()
}

const fn default_debounce_ms() -> u64 {
    100
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct KaseConfig {
    /// Root of the case store (may start with `~`)
    #[serde(default = "default_case_dir")]
    pub case_dir: String,

    /// Quiet period before a typed query is applied
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Log file; defaults to `<data_local_dir>/kase/kase.log`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for KaseConfig {
    fn default() -> Self {
        Self {
            case_dir: default_case_dir(),
            debounce_ms: default_debounce_ms(),
            log_file: None,
        }
    }
}

impl KaseConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;
        Ok(config_dir.join(APP_NAME).join("config.toml"))
    }

    /// Load the user's configuration, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Render the configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }

    /// Quiet period for the picker's debouncer
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Log file to write to
    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join(APP_NAME).join(format!("{APP_NAME}.log")))
        })
    }

    /// Resolve the case directory using the process environment
    #[must_use]
    pub fn case_dir(&self, cli: Option<&str>) -> String {
        let env = std::env::var(CASE_DIR_ENV).ok();
        self.resolve_case_dir(cli, env.as_deref())
    }

    /// Resolve the case directory from explicit overrides
    ///
    /// Empty overrides are ignored.
    #[must_use]
    pub fn resolve_case_dir(&self, cli: Option<&str>, env: Option<&str>) -> String {
        cli.or(env)
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| self.case_dir.clone(), ToString::to_string)
    }
}
