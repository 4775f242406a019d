//! Memory-bounded image decoding with orientation correction.
//!
//! The decoder never materializes a full-resolution bitmap when the source
//! is wider than the configured target: it probes the header for dimensions,
//! picks a power-of-two subsampling factor, decodes at that reduced
//! resolution, and finally rotates the buffer to match the physical capture
//! orientation read from EXIF.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use std::path::Path;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::LimitsConfig;
use crate::error::DecodeError;
use crate::types::{DecodedImage, OrientationTag};

use super::metadata::MetadataReader;

/// Bounds-aware image decoder.
pub struct BoundedDecoder {
    limits: LimitsConfig,
}

impl BoundedDecoder {
    /// Create a new decoder with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Decode the image at `path` on a blocking task, with a timeout.
    ///
    /// The pipeline itself is synchronous and holds no locks; this wrapper
    /// only moves it off the async executor and bounds its wall time.
    pub async fn decode(&self, path: &Path) -> Result<DecodedImage, DecodeError> {
        let limits = self.limits.clone();
        let path_owned = path.to_path_buf();
        let timeout_duration = Duration::from_millis(self.limits.decode_timeout_ms);

        let decode_result = timeout(
            timeout_duration,
            tokio::task::spawn_blocking(move || {
                BoundedDecoder::new(limits).decode_sync(&path_owned)
            }),
        )
        .await;

        match decode_result {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(DecodeError::Decode {
                path: path.to_path_buf(),
                message: format!("Task join error: {}", e),
            }),
            Err(_) => Err(DecodeError::Timeout {
                path: path.to_path_buf(),
                timeout_ms: self.limits.decode_timeout_ms,
            }),
        }
    }

    /// Run the full decode pipeline synchronously.
    ///
    /// Callers that manage their own threading (or need cancellation via a
    /// task wrapper) use this directly.
    pub fn decode_sync(&self, path: &Path) -> Result<DecodedImage, DecodeError> {
        if !path.exists() {
            return Err(DecodeError::FileNotFound(path.to_path_buf()));
        }
        self.check_file_size(path)?;

        // Header-only probe, no pixel buffer allocated
        let (native_width, native_height) =
            image::image_dimensions(path).map_err(|e| DecodeError::Probe {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let factor = sample_factor(native_width, self.limits.max_width);
        tracing::debug!(
            "Decoding {:?}: native {}x{}, sample factor {}",
            path,
            native_width,
            native_height,
            factor
        );

        let decoded = image::ImageReader::open(path)
            .map_err(|e| DecodeError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot open file: {}", e),
            })?
            .with_guessed_format()
            .map_err(|e| DecodeError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?
            .decode()
            .map_err(|e| DecodeError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let subsampled = subsample(decoded, factor);

        // A missing or corrupt tag must not block display; the reader
        // resolves every failure to Normal.
        let orientation = MetadataReader::read_orientation(path);
        let oriented = apply_orientation(subsampled, orientation);

        let (width, height) = oriented.dimensions();
        Ok(DecodedImage {
            image: oriented,
            width,
            height,
            sample_factor: factor,
            orientation,
        })
    }

    fn check_file_size(&self, path: &Path) -> Result<(), DecodeError> {
        let metadata = std::fs::metadata(path).map_err(|e| DecodeError::Probe {
            path: path.to_path_buf(),
            message: format!("Cannot read metadata: {}", e),
        })?;

        let max_bytes = self.limits.max_file_size_mb * 1024 * 1024;
        if metadata.len() > max_bytes {
            return Err(DecodeError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb: metadata.len() / (1024 * 1024),
                max_mb: self.limits.max_file_size_mb,
            });
        }
        Ok(())
    }
}

/// Compute the power-of-two subsampling factor for a native width.
///
/// Starting at 1, the factor doubles while halving again would still leave
/// the decoded width at or above `max_width`. The result is the unique power
/// of two with `native_width / factor >= max_width` and
/// `native_width / (2 * factor) < max_width`; images already narrower than
/// `2 * max_width` decode at full resolution.
///
/// A zero `max_width` (rejected by config validation, but reachable through
/// a hand-built [`LimitsConfig`]) disables downsampling instead of looping.
pub fn sample_factor(native_width: u32, max_width: u32) -> u32 {
    if max_width == 0 {
        return 1;
    }
    let mut factor = 1u32;
    while native_width / factor / 2 >= max_width {
        factor *= 2;
    }
    factor
}

/// Subsample a decoded buffer by an integer factor.
///
/// This is an approximate decode, not an exact resize: nearest-pixel
/// selection at a `ceil(dim / factor)` grid, so the output width tracks the
/// subsampling rule rather than landing exactly on the configured target.
fn subsample(image: DynamicImage, factor: u32) -> DynamicImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    image.resize_exact(w.div_ceil(factor), h.div_ceil(factor), FilterType::Nearest)
}

/// Rotate a decoded buffer to its upright display orientation.
///
/// Consumes the pre-rotation buffer; `Normal` is a no-op.
fn apply_orientation(image: DynamicImage, orientation: OrientationTag) -> DynamicImage {
    match orientation {
        OrientationTag::Normal => image,
        OrientationTag::Rotate90 => image.rotate90(),
        OrientationTag::Rotate180 => image.rotate180(),
        OrientationTag::Rotate270 => image.rotate270(),
    }
}
