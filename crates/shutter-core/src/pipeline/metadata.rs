//! EXIF orientation and GPS extraction from image byte-sources.
//!
//! Every operation here is intentionally lenient: a corrupt or metadata-free
//! image must still decode and display, just without orientation correction
//! or a location. Failures are absorbed into defaults, never propagated.

use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::types::{GeoCoordinate, OrientationTag};

/// Reads embedded orientation and geolocation tags from image files.
pub struct MetadataReader;

impl MetadataReader {
    /// Read the orientation tag for the image at `path`.
    ///
    /// Returns [`OrientationTag::Normal`] when the file is unreadable, has
    /// no EXIF container, or carries an absent/malformed orientation value.
    pub fn read_orientation(path: &Path) -> OrientationTag {
        let Some(exif) = Self::open(path) else {
            return OrientationTag::Normal;
        };

        let value = exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(v) => v.first().map(|&x| x as u32),
                Value::Long(v) => v.first().copied(),
                _ => None,
            });

        match value {
            Some(v) => OrientationTag::from_exif(v),
            None => OrientationTag::Normal,
        }
    }

    /// Read the GPS position for the image at `path`.
    ///
    /// Returns `None` when the file is unreadable, has no EXIF container,
    /// or when either coordinate is absent or out of range.
    pub fn read_location(path: &Path) -> Option<GeoCoordinate> {
        let exif = Self::open(path)?;

        let latitude = Self::gps_coord(&exif, Tag::GPSLatitude, Tag::GPSLatitudeRef)?;
        let longitude = Self::gps_coord(&exif, Tag::GPSLongitude, Tag::GPSLongitudeRef)?;

        let coordinate = GeoCoordinate {
            latitude,
            longitude,
        };
        if coordinate.is_valid() {
            Some(coordinate)
        } else {
            tracing::debug!("Discarding out-of-range GPS position in {:?}", path);
            None
        }
    }

    /// Open the byte-source and parse its EXIF container, if any.
    fn open(path: &Path) -> Option<exif::Exif> {
        let file = File::open(path).ok()?;
        let mut reader = BufReader::new(file);
        match Reader::new().read_from_container(&mut reader) {
            Ok(exif) => Some(exif),
            Err(e) => {
                tracing::trace!("No EXIF data in {:?}: {}", path, e);
                None
            }
        }
    }

    /// Get one GPS coordinate, converting degrees/minutes/seconds to signed
    /// decimal degrees.
    fn gps_coord(exif: &exif::Exif, coord_tag: Tag, ref_tag: Tag) -> Option<f64> {
        let coord = exif.get_field(coord_tag, In::PRIMARY)?;
        let reference = exif.get_field(ref_tag, In::PRIMARY)?;

        let degrees = Self::dms_to_decimal(&coord.value)?;
        let ref_str = reference.display_value().to_string();

        // N/E are positive, S/W negative
        let sign = if ref_str.contains('S') || ref_str.contains('W') {
            -1.0
        } else {
            1.0
        };

        Some(sign * degrees)
    }

    /// Convert EXIF degree/minute/second rationals to decimal degrees.
    fn dms_to_decimal(value: &Value) -> Option<f64> {
        match value {
            Value::Rational(rationals) if rationals.len() >= 3 => {
                if rationals.iter().take(3).any(|r| r.denom == 0) {
                    return None;
                }
                let degrees = rationals[0].to_f64();
                let minutes = rationals[1].to_f64();
                let seconds = rationals[2].to_f64();
                Some(degrees + minutes / 60.0 + seconds / 3600.0)
            }
            _ => None,
        }
    }
}
