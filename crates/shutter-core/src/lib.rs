//! shutter-core - Photo acquisition and bounded decode library.
//!
//! shutter turns an opaque image reference (a camera capture or a gallery
//! pick) into a display-ready, correctly oriented, memory-bounded bitmap.
//!
//! # Architecture
//!
//! ```text
//! Acquire (capture | pick) -> Resolve locator -> Probe dimensions
//!     -> Bounded decode (power-of-two subsampling) -> Orient (EXIF)
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use shutter_core::{BoundedDecoder, Config, MetadataReader};
//!
//! #[tokio::main]
//! async fn main() -> shutter_core::Result<()> {
//!     let config = Config::load()?;
//!     let decoder = BoundedDecoder::new(config.limits.clone());
//!
//!     let decoded = decoder.decode("./photo.jpg".as_ref()).await?;
//!     println!("{}x{}", decoded.width, decoded.height);
//!
//!     if let Some(position) = MetadataReader::read_location("./photo.jpg".as_ref()) {
//!         println!("taken at {}, {}", position.latitude, position.longitude);
//!     }
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod acquire;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-exports for convenient access
pub use acquire::{
    AcquireChoice, AcquisitionSession, ActionLauncher, ActionOutcome, ActionResult,
    CaptureRequest, Completion, LocatorResolver, MediaIndex, PickRequest, SqliteMediaIndex,
};
pub use config::Config;
pub use error::{AcquireError, ConfigError, DecodeError, Result, ShutterError};
pub use pipeline::{BoundedDecoder, MetadataReader};
pub use types::{
    CorrelationCode, DecodedImage, GeoCoordinate, ImageReference, Locator, OrientationTag,
    PendingCapture, ResolvedPath, SourceKind,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience facade wiring components from one configuration.
pub struct Shutter {
    config: Config,
}

impl Shutter {
    /// Create a facade over the given configuration.
    pub fn new(config: Config) -> Self {
        tracing::debug!("Initializing shutter v{}", VERSION);
        Self { config }
    }

    /// Create a facade with configuration loaded from the default location.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(Config::load()?))
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a decoder from the configured limits.
    pub fn decoder(&self) -> BoundedDecoder {
        BoundedDecoder::new(self.config.limits.clone())
    }

    /// Open the configured media index, creating parent directories.
    pub fn open_index(&self) -> Result<SqliteMediaIndex> {
        let path = self.config.index_db_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(SqliteMediaIndex::open(&path)?)
    }
}
