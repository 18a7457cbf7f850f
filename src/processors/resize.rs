//! Resize stages for classifier preprocessing.

use image::{imageops, RgbImage};

/// Resizes an image to exact dimensions with the Lanczos3 filter.
pub fn resize_exact(img: &RgbImage, width: u32, height: u32) -> RgbImage {
    imageops::resize(img, width, height, imageops::FilterType::Lanczos3)
}

/// Computes the dimensions after resizing so the shorter edge equals `target`.
///
/// The longer edge is scaled proportionally and rounded to the nearest pixel,
/// never below 1.
pub fn shortest_edge_dims(width: u32, height: u32, target: u32) -> (u32, u32) {
    if width <= height {
        let scaled = (height as f64 * target as f64 / width as f64).round() as u32;
        (target, scaled.max(1))
    } else {
        let scaled = (width as f64 * target as f64 / height as f64).round() as u32;
        (scaled.max(1), target)
    }
}

/// Resizes an image so its shorter edge equals `target`, preserving aspect ratio.
pub fn resize_shortest_edge(img: &RgbImage, target: u32) -> RgbImage {
    let (width, height) = img.dimensions();
    if width.min(height) == target {
        return img.clone();
    }
    let (new_width, new_height) = shortest_edge_dims(width, height, target);
    resize_exact(img, new_width, new_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_edge_scales_the_long_side() {
        assert_eq!(shortest_edge_dims(100, 200, 256), (256, 512));
        assert_eq!(shortest_edge_dims(200, 100, 256), (512, 256));
        assert_eq!(shortest_edge_dims(224, 224, 256), (256, 256));
    }

    #[test]
    fn shortest_edge_rounds_to_nearest() {
        // 300x200 -> short edge 256: 300 * 256 / 200 = 384
        assert_eq!(shortest_edge_dims(300, 200, 256), (384, 256));
        // 333x500 -> short edge 224: 500 * 224 / 333 = 336.33 -> 336
        assert_eq!(shortest_edge_dims(333, 500, 224), (224, 336));
    }

    #[test]
    fn resize_shortest_edge_produces_expected_dims() {
        let img = RgbImage::new(100, 50);
        let resized = resize_shortest_edge(&img, 25);
        assert_eq!(resized.dimensions(), (50, 25));
    }

    #[test]
    fn resize_is_skipped_when_already_at_target() {
        let img = RgbImage::new(256, 400);
        let resized = resize_shortest_edge(&img, 256);
        assert_eq!(resized.dimensions(), (256, 400));
    }
}
