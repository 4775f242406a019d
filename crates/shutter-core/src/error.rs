//! Error types for the shutter acquisition and decode pipeline.
//!
//! Errors are organized by stage. Acquisition and decode failures are
//! explicit results returned to the caller; metadata failures are never
//! typed here because the metadata reader absorbs them into defaults.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for shutter operations.
#[derive(Error, Debug)]
pub enum ShutterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Acquisition and locator-resolution errors
    #[error("Acquire error: {0}")]
    Acquire(#[from] AcquireError),

    /// Bounded-decode errors
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Acquisition-stage errors: session misuse, locator resolution, media index.
#[derive(Error, Debug)]
pub enum AcquireError {
    /// The media index has no row for the locator
    #[error("No media entry for locator: {locator}")]
    NotFound { locator: String },

    /// A camera result arrived but no capture was ever launched
    #[error("Capture result arrived with no pending capture")]
    NoPendingCapture,

    /// The media index query or insert itself failed
    #[error("Media index error: {0}")]
    Index(#[from] rusqlite::Error),

    /// A session method was called in the wrong state
    #[error("Invalid session state: expected {expected}, was {actual}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },

    /// The platform refused to launch the capture/pick action
    #[error("Failed to launch {action} action: {message}")]
    Launch {
        action: &'static str,
        message: String,
    },
}

/// Decode-stage errors. Any of these surfaces as an explicit failure to the
/// caller; the decoder never retries and never panics on bad input.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The byte-source does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File exceeds the configured size limit
    #[error("File too large: {path} ({size_mb}MB > {max_mb}MB)")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// Header-only dimension probe failed
    #[error("Probe error for {path}: {message}")]
    Probe { path: PathBuf, message: String },

    /// Pixel decode failed (corrupt bytes, unsupported encoding, allocation)
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// Decode exceeded the configured timeout
    #[error("Decode of {path} timed out after {timeout_ms}ms")]
    Timeout { path: PathBuf, timeout_ms: u64 },
}

/// Convenience type alias for shutter results.
pub type Result<T> = std::result::Result<T, ShutterError>;
