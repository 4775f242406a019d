//! The decode half of the pipeline.
//!
//! - **decode**: probe dimensions, pick a power-of-two subsampling factor,
//!   decode at reduced resolution, rotate to the capture orientation
//! - **metadata**: lenient EXIF orientation and GPS extraction

pub mod decode;
pub mod metadata;

// Re-exports for convenient access
pub use decode::{sample_factor, BoundedDecoder};
pub use metadata::MetadataReader;
