//! Test fixtures built at runtime: JPEG files with a hand-assembled EXIF
//! APP1 segment, so no binary fixtures need to live in the repository.
#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;

/// One GPS coordinate in degree/minute/second form, as EXIF stores it.
#[derive(Clone, Copy)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds_num: u32,
    pub seconds_den: u32,
    /// 'N', 'S', 'E' or 'W'
    pub hemisphere: char,
}

impl Dms {
    /// The signed decimal value this DMS triple denotes.
    pub fn to_decimal(self) -> f64 {
        let seconds = self.seconds_num as f64 / self.seconds_den as f64;
        let unsigned = self.degrees as f64 + self.minutes as f64 / 60.0 + seconds / 3600.0;
        if self.hemisphere == 'S' || self.hemisphere == 'W' {
            -unsigned
        } else {
            unsigned
        }
    }
}

/// A small RGB test image with distinct quadrant colors, so rotations are
/// observable in pixel content.
pub fn quadrant_image(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let right = x >= width / 2;
        let bottom = y >= height / 2;
        *pixel = match (right, bottom) {
            (false, false) => Rgb([255, 0, 0]),
            (true, false) => Rgb([0, 255, 0]),
            (false, true) => Rgb([0, 0, 255]),
            (true, true) => Rgb([255, 255, 0]),
        };
    }
    DynamicImage::ImageRgb8(img)
}

/// Write `image` as a JPEG at `path`, optionally splicing in an EXIF APP1
/// segment with the given orientation value and/or GPS position.
pub fn write_jpeg(
    image: &DynamicImage,
    path: &Path,
    orientation: Option<u16>,
    gps: Option<(Dms, Dms)>,
) {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .unwrap();

    if orientation.is_some() || gps.is_some() {
        let app1 = app1_segment(orientation, gps);
        // Splice right after the two-byte SOI marker
        bytes.splice(2..2, app1);
    }

    std::fs::write(path, bytes).unwrap();
}

/// Assemble an APP1 marker segment holding a little-endian TIFF structure
/// with IFD0 (orientation, GPS pointer) and an optional GPS IFD.
fn app1_segment(orientation: Option<u16>, gps: Option<(Dms, Dms)>) -> Vec<u8> {
    let tiff = tiff_body(orientation, gps);

    let mut payload = Vec::new();
    payload.extend_from_slice(b"Exif\0\0");
    payload.extend_from_slice(&tiff);

    let mut segment = vec![0xFF, 0xE1];
    segment.extend_from_slice(&((payload.len() as u16 + 2).to_be_bytes()));
    segment.extend_from_slice(&payload);
    segment
}

fn tiff_body(orientation: Option<u16>, gps: Option<(Dms, Dms)>) -> Vec<u8> {
    const TYPE_ASCII: u16 = 2;
    const TYPE_SHORT: u16 = 3;
    const TYPE_LONG: u16 = 4;
    const TYPE_RATIONAL: u16 = 5;

    let ifd0_entries = orientation.is_some() as usize + gps.is_some() as usize;
    let ifd0_size = 2 + ifd0_entries * 12 + 4;
    let gps_ifd_offset = (8 + ifd0_size) as u32;
    // GPS IFD: latitude ref, latitude, longitude ref, longitude
    let gps_ifd_size = 2 + 4 * 12 + 4;
    let rational_offset = gps_ifd_offset + gps_ifd_size as u32;

    let mut body = Vec::new();
    // TIFF header: little-endian, magic 42, IFD0 at offset 8
    body.extend_from_slice(b"II");
    body.extend_from_slice(&42u16.to_le_bytes());
    body.extend_from_slice(&8u32.to_le_bytes());

    let entry = |body: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: [u8; 4]| {
        body.extend_from_slice(&tag.to_le_bytes());
        body.extend_from_slice(&kind.to_le_bytes());
        body.extend_from_slice(&count.to_le_bytes());
        body.extend_from_slice(&value);
    };

    // IFD0
    body.extend_from_slice(&(ifd0_entries as u16).to_le_bytes());
    if let Some(value) = orientation {
        let [a, b] = value.to_le_bytes();
        entry(&mut body, 0x0112, TYPE_SHORT, 1, [a, b, 0, 0]);
    }
    if gps.is_some() {
        entry(
            &mut body,
            0x8825,
            TYPE_LONG,
            1,
            gps_ifd_offset.to_le_bytes(),
        );
    }
    body.extend_from_slice(&0u32.to_le_bytes()); // no next IFD

    if let Some((latitude, longitude)) = gps {
        let ascii_ref = |hemisphere: char| [hemisphere as u8, 0, 0, 0];

        body.extend_from_slice(&4u16.to_le_bytes());
        entry(&mut body, 0x0001, TYPE_ASCII, 2, ascii_ref(latitude.hemisphere));
        entry(
            &mut body,
            0x0002,
            TYPE_RATIONAL,
            3,
            rational_offset.to_le_bytes(),
        );
        entry(&mut body, 0x0003, TYPE_ASCII, 2, ascii_ref(longitude.hemisphere));
        entry(
            &mut body,
            0x0004,
            TYPE_RATIONAL,
            3,
            (rational_offset + 24).to_le_bytes(),
        );
        body.extend_from_slice(&0u32.to_le_bytes()); // no next IFD

        for dms in [latitude, longitude] {
            for (num, den) in [
                (dms.degrees, 1),
                (dms.minutes, 1),
                (dms.seconds_num, dms.seconds_den),
            ] {
                body.extend_from_slice(&num.to_le_bytes());
                body.extend_from_slice(&den.to_le_bytes());
            }
        }
    }

    body
}
