//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// Decode resource limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Target display width in pixels. The decoder picks the largest
    /// power-of-two subsampling factor that keeps the decoded width at or
    /// above this value.
    pub max_width: u32,

    /// Maximum file size in megabytes
    pub max_file_size_mb: u64,

    /// Decode timeout in milliseconds
    pub decode_timeout_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_width: 800,
            max_file_size_mb: 100,
            decode_timeout_ms: 5000,
        }
    }
}

/// Camera capture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Directory where capture destinations are created
    pub capture_dir: String,

    /// Filename prefix for capture destinations ("img" -> img-1712345.jpg)
    pub file_prefix: String,

    /// Title recorded in the media index for new captures
    pub title: String,

    /// Description recorded in the media index for new captures
    pub description: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            capture_dir: "~/Pictures/shutter".to_string(),
            file_prefix: "img".to_string(),
            title: "shutter capture".to_string(),
            description: "Taken with shutter".to_string(),
        }
    }
}

impl CaptureConfig {
    /// The capture destination directory with ~ expansion applied.
    pub fn resolved_dir(&self) -> std::path::PathBuf {
        let expanded = shellexpand::tilde(&self.capture_dir);
        std::path::PathBuf::from(expanded.into_owned())
    }
}

/// Media index settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Path of the SQLite index database
    pub db_path: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            db_path: "~/.shutter/index.db".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
