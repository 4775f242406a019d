//! Core data types for the shutter acquisition and decode pipeline.

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where an acquired image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Freshly captured by the device camera.
    Camera,
    /// Picked from existing content.
    Gallery,
}

/// An opaque, URI-like reference to image content.
///
/// A locator on its own says nothing about where the bytes live; it must be
/// resolved through the media index before decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The handle produced when an acquisition completes.
///
/// Created at the moment a capture or pick finishes and consumed once by
/// locator resolution; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub kind: SourceKind,
    pub locator: Locator,
}

/// The destination locator of the most recently launched camera capture.
///
/// Some camera implementations return an empty result payload on success, so
/// the session remembers the destination itself and resolves the capture
/// branch through this value, never through the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCapture {
    pub code: CorrelationCode,
    pub locator: Locator,
}

/// A concrete, readable byte-source derived from an [`ImageReference`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

/// Value attached to an asynchronous acquisition request and echoed in its
/// result, identifying which request a result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationCode(pub u32);

impl CorrelationCode {
    /// Results carrying this code finish a camera capture.
    pub const CAPTURE: Self = Self(1000);
    /// Results carrying this code finish a gallery pick.
    pub const PICK: Self = Self(1001);
}

/// Embedded orientation metadata: the rotation needed to display an image
/// upright as captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrientationTag {
    #[default]
    Normal,
    /// 90 degrees clockwise.
    Rotate90,
    Rotate180,
    /// 270 degrees clockwise (90 counter-clockwise).
    Rotate270,
}

impl OrientationTag {
    /// Map an EXIF orientation value (1-8) to a tag.
    ///
    /// Only the three rotation values are honored; flip/transpose variants
    /// (2, 4, 5, 7) and out-of-range values fall back to `Normal`.
    pub fn from_exif(value: u32) -> Self {
        match value {
            3 => Self::Rotate180,
            6 => Self::Rotate90,
            8 => Self::Rotate270,
            _ => Self::Normal,
        }
    }

    /// Clockwise display rotation in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Rotate90 => 90,
            Self::Rotate180 => 180,
            Self::Rotate270 => 270,
        }
    }

    /// Whether applying this rotation swaps width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Rotate90 | Self::Rotate270)
    }
}

/// A GPS position extracted from image metadata, in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Latitude within [-90, 90] and longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude.abs() <= 90.0
            && self.longitude.abs() <= 180.0
    }
}

/// The display-ready output of a bounded decode.
///
/// Owned exclusively by the caller that requested it; nothing is cached or
/// shared across decode calls.
pub struct DecodedImage {
    /// Pixel buffer, already rotated to match the capture orientation.
    pub image: DynamicImage,
    /// Final width after subsampling and rotation.
    pub width: u32,
    /// Final height after subsampling and rotation.
    pub height: u32,
    /// The power-of-two subsampling factor the decode used.
    pub sample_factor: u32,
    /// The orientation tag that was applied (or `Normal`).
    pub orientation: OrientationTag,
}

impl fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("sample_factor", &self.sample_factor)
            .field("orientation", &self.orientation)
            .finish_non_exhaustive()
    }
}
