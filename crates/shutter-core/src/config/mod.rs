//! Configuration management for shutter.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults; a missing file is not an error.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for shutter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Decode resource limits
    pub limits: LimitsConfig,

    /// Camera capture settings
    pub capture: CaptureConfig,

    /// Media index settings
    pub index: IndexConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// Uses platform-appropriate directories (XDG on Linux, Application
    /// Support on macOS); falls back to `~/.shutter/config.toml` if
    /// directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("io", "shutter", "shutter")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".shutter").join("config.toml")
            })
    }

    /// Get the resolved media index database path (with ~ expansion).
    pub fn index_db_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.index.db_path);
        PathBuf::from(expanded.into_owned())
    }

    /// Get the resolved capture destination directory (with ~ expansion).
    pub fn capture_dir(&self) -> PathBuf {
        self.capture.resolved_dir()
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.limits.max_width, 800);
        assert_eq!(config.capture.file_prefix, "img");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_round_trip_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.limits.max_width, config.limits.max_width);
        assert_eq!(parsed.capture.title, config.capture.title);
    }

    #[test]
    fn test_load_from_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[limits]\nmax_width = 640").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.limits.max_width, 640);
        // Unspecified sections keep their defaults
        assert_eq!(config.limits.decode_timeout_ms, 5000);
    }

    #[test]
    fn test_load_from_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[limits]\nmax_width = 0").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }
}
