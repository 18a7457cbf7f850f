//! Center cropping for classifier preprocessing.

use crate::processors::resize::resize_exact;
use image::{imageops, RgbImage};

/// Crops the center `width x height` region of an image.
///
/// An image smaller than the crop window in either dimension is resized to
/// the window instead, so the output always has the requested dimensions.
pub fn center_crop(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    let (img_width, img_height) = img.dimensions();
    if img_width < width || img_height < height {
        return resize_exact(img, width, height);
    }

    let left = (img_width - width) / 2;
    let top = (img_height - height) / 2;
    imageops::crop_imm(img, left, top, width, height).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn crops_the_centered_window() {
        let mut img = RgbImage::new(6, 6);
        img.put_pixel(2, 2, Rgb([255, 0, 0]));
        let cropped = center_crop(&img, 2, 2);
        assert_eq!(cropped.dimensions(), (2, 2));
        // (2,2) of the source is (0,0) of a 2x2 center crop of a 6x6 image
        assert_eq!(cropped.get_pixel(0, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn output_always_matches_requested_dims() {
        let img = RgbImage::new(10, 3);
        assert_eq!(center_crop(&img, 4, 4).dimensions(), (4, 4));
        let small = RgbImage::new(2, 2);
        assert_eq!(center_crop(&small, 4, 4).dimensions(), (4, 4));
    }
}
