//! Image loading and conversion helpers.
//!
//! Every path into the pipeline goes through [`dynamic_to_rgb`], so inference
//! always sees a 3-channel image regardless of the source color mode
//! (alpha, grayscale, or palette-indexed).

use crate::core::errors::ScanError;
use image::{DynamicImage, ImageFormat, RgbImage};
use std::path::Path;

/// Converts a DynamicImage in any color mode to an 8-bit RGB image.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Loads an image from a file path and converts it to RGB.
pub fn load_image(path: &Path) -> Result<RgbImage, ScanError> {
    let img = image::open(path).map_err(ScanError::ImageLoad)?;
    Ok(dynamic_to_rgb(img))
}

/// Decodes an uploaded image and converts it to RGB.
///
/// Only the formats the upload form accepts (JPEG, PNG) are decoded; anything
/// else is rejected before the decoder runs.
pub fn decode_upload(bytes: &[u8]) -> Result<RgbImage, ScanError> {
    let format = image::guess_format(bytes).map_err(ScanError::ImageLoad)?;
    match format {
        ImageFormat::Jpeg | ImageFormat::Png => {}
        other => {
            return Err(ScanError::invalid_input(format!(
                "unsupported image format {other:?}; upload a JPEG or PNG file"
            )));
        }
    }
    let img = image::load_from_memory_with_format(bytes, format).map_err(ScanError::ImageLoad)?;
    Ok(dynamic_to_rgb(img))
}

/// Returns the MIME type of an uploaded image, if it is one the form accepts.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Png => Some("image/png"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_png(img: DynamicImage) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn rgba_upload_decodes_to_three_channels() {
        let rgba = RgbaImage::from_pixel(4, 4, Rgba([10, 20, 30, 128]));
        let bytes = encode_png(DynamicImage::ImageRgba8(rgba));

        let rgb = decode_upload(&bytes).unwrap();
        assert_eq!(rgb.dimensions(), (4, 4));
        // alpha is dropped, color channels survive
        assert_eq!(rgb.get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn grayscale_upload_decodes_to_three_channels() {
        let gray = GrayImage::from_pixel(2, 2, Luma([77]));
        let bytes = encode_png(DynamicImage::ImageLuma8(gray));

        let rgb = decode_upload(&bytes).unwrap();
        assert_eq!(rgb.get_pixel(1, 1).0, [77, 77, 77]);
    }

    #[test]
    fn load_image_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        let rgb = RgbImage::from_pixel(3, 3, image::Rgb([5, 6, 7]));
        DynamicImage::ImageRgb8(rgb)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (3, 3));
        assert_eq!(loaded.get_pixel(0, 0).0, [5, 6, 7]);
    }

    #[test]
    fn non_image_bytes_are_rejected() {
        assert!(decode_upload(b"definitely not an image").is_err());
    }

    #[test]
    fn unsupported_format_is_rejected() {
        let rgb = RgbImage::from_pixel(2, 2, image::Rgb([1, 2, 3]));
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(rgb)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Bmp)
            .unwrap();
        let err = decode_upload(&buf).unwrap_err();
        assert!(err.to_string().contains("unsupported image format"));
    }

    #[test]
    fn sniff_mime_recognizes_accepted_formats() {
        let rgb = RgbImage::from_pixel(1, 1, image::Rgb([0, 0, 0]));
        let png = encode_png(DynamicImage::ImageRgb8(rgb.clone()));
        assert_eq!(sniff_mime(&png), Some("image/png"));

        let mut jpeg = Vec::new();
        DynamicImage::ImageRgb8(rgb)
            .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
            .unwrap();
        assert_eq!(sniff_mime(&jpeg), Some("image/jpeg"));

        assert_eq!(sniff_mime(b"junk"), None);
    }
}
