//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_width == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_width must be > 0".into(),
            ));
        }
        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.limits.decode_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.decode_timeout_ms must be > 0".into(),
            ));
        }
        if self.capture.file_prefix.is_empty() {
            return Err(ConfigError::ValidationError(
                "capture.file_prefix must not be empty".into(),
            ));
        }
        if self.index.db_path.is_empty() {
            return Err(ConfigError::ValidationError(
                "index.db_path must not be empty".into(),
            ));
        }
        Ok(())
    }
}
