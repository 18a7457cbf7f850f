//! Utility functions for images.

pub mod image;

pub use image::{decode_upload, dynamic_to_rgb, load_image, sniff_mime};
