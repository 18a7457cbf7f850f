//! Image normalization for classifier input.
//!
//! Rescale and per-channel mean/std normalization are folded into a single
//! multiply-add per pixel: `alpha = scale / std`, `beta = -mean / std`.

use crate::core::errors::ScanError;
use crate::core::{PreprocessorConfig, Tensor4D};
use crate::processors::types::ChannelOrder;
use image::RgbImage;

/// Normalizes images into the tensor layout the model expects.
#[derive(Debug)]
pub struct NormalizeImage {
    /// Scaling factors for each channel (alpha = scale / std)
    pub alpha: Vec<f32>,
    /// Offset values for each channel (beta = -mean / std)
    pub beta: Vec<f32>,
    /// Channel ordering (CHW or HWC)
    pub order: ChannelOrder,
}

impl NormalizeImage {
    /// Creates a new NormalizeImage instance with the specified parameters.
    ///
    /// # Arguments
    ///
    /// * `scale` - Optional scaling factor (defaults to 1.0/255.0)
    /// * `mean` - Optional mean values for each channel (defaults to ImageNet mean)
    /// * `std` - Optional standard deviation values (defaults to ImageNet std)
    /// * `order` - Optional channel ordering (defaults to CHW)
    ///
    /// # Errors
    ///
    /// Returns an error if scale is not positive, mean or std don't have
    /// exactly 3 elements, or any standard deviation is not positive.
    pub fn new(
        scale: Option<f32>,
        mean: Option<Vec<f32>>,
        std: Option<Vec<f32>>,
        order: Option<ChannelOrder>,
    ) -> Result<Self, ScanError> {
        let scale = scale.unwrap_or(1.0 / 255.0);
        let mean = mean.unwrap_or_else(|| crate::core::DEFAULT_IMAGE_MEAN.to_vec());
        let std = std.unwrap_or_else(|| crate::core::DEFAULT_IMAGE_STD.to_vec());
        let order = order.unwrap_or(ChannelOrder::CHW);

        if scale <= 0.0 {
            return Err(ScanError::ConfigError {
                message: "Scale must be greater than 0".to_string(),
            });
        }
        if mean.len() != 3 {
            return Err(ScanError::ConfigError {
                message: "Mean must have exactly 3 elements for RGB".to_string(),
            });
        }
        if std.len() != 3 {
            return Err(ScanError::ConfigError {
                message: "Std must have exactly 3 elements for RGB".to_string(),
            });
        }
        for (i, &s) in std.iter().enumerate() {
            if s <= 0.0 {
                return Err(ScanError::ConfigError {
                    message: format!(
                        "Standard deviation at index {i} must be greater than 0, got {s}"
                    ),
                });
            }
        }

        let alpha: Vec<f32> = std.iter().map(|s| scale / s).collect();
        let beta: Vec<f32> = mean.iter().zip(&std).map(|(m, s)| -m / s).collect();

        Ok(Self { alpha, beta, order })
    }

    /// Builds the normalizer described by a preprocessing configuration.
    ///
    /// A disabled rescale step maps to scale 1.0; a disabled normalize step
    /// maps to zero mean and unit std.
    pub fn from_preprocessor_config(config: &PreprocessorConfig) -> Result<Self, ScanError> {
        let scale = if config.do_rescale {
            config.rescale_factor
        } else {
            1.0
        };
        let (mean, std) = if config.do_normalize {
            (config.image_mean.clone(), config.image_std.clone())
        } else {
            (vec![0.0; 3], vec![1.0; 3])
        };
        Self::new(Some(scale), Some(mean), Some(std), Some(ChannelOrder::CHW))
    }

    /// Normalizes a single RGB image into a batch-of-one 4D tensor.
    pub fn normalize_to(&self, img: &RgbImage) -> Result<Tensor4D, ScanError> {
        let (width, height) = img.dimensions();
        let channels = 3u32;

        match self.order {
            ChannelOrder::CHW => {
                let mut result = vec![0.0f32; (channels * height * width) as usize];

                for c in 0..channels {
                    for y in 0..height {
                        for x in 0..width {
                            let pixel = img.get_pixel(x, y);
                            let channel_value = pixel[c as usize] as f32;
                            let dst_idx = (c * height * width + y * width + x) as usize;

                            result[dst_idx] =
                                channel_value * self.alpha[c as usize] + self.beta[c as usize];
                        }
                    }
                }

                Ok(ndarray::Array4::from_shape_vec(
                    (1, channels as usize, height as usize, width as usize),
                    result,
                )?)
            }
            ChannelOrder::HWC => {
                let mut result = vec![0.0f32; (height * width * channels) as usize];

                for y in 0..height {
                    for x in 0..width {
                        let pixel = img.get_pixel(x, y);
                        for c in 0..channels {
                            let channel_value = pixel[c as usize] as f32;
                            let dst_idx = (y * width * channels + x * channels + c) as usize;

                            result[dst_idx] =
                                channel_value * self.alpha[c as usize] + self.beta[c as usize];
                        }
                    }
                }

                Ok(ndarray::Array4::from_shape_vec(
                    (1, height as usize, width as usize, channels as usize),
                    result,
                )?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_image(w: u32, h: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(w, h, image::Rgb(rgb))
    }

    #[test]
    fn folds_scale_mean_std_into_multiply_add() {
        // scale 1/255, mean 0.5, std 0.5: a 255 pixel maps to (1.0 - 0.5) / 0.5 = 1.0
        let normalize = NormalizeImage::new(
            Some(1.0 / 255.0),
            Some(vec![0.5, 0.5, 0.5]),
            Some(vec![0.5, 0.5, 0.5]),
            None,
        )
        .unwrap();
        let tensor = normalize
            .normalize_to(&solid_image(2, 2, [255, 0, 255]))
            .unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 2, 2]);
        assert!((tensor[[0, 0, 0, 0]] - 1.0).abs() < 1e-6);
        assert!((tensor[[0, 1, 0, 0]] + 1.0).abs() < 1e-6);
        assert!((tensor[[0, 2, 1, 1]] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn hwc_layout_orders_channels_last() {
        let normalize = NormalizeImage::new(
            Some(1.0),
            Some(vec![0.0, 0.0, 0.0]),
            Some(vec![1.0, 1.0, 1.0]),
            Some(ChannelOrder::HWC),
        )
        .unwrap();
        let tensor = normalize
            .normalize_to(&solid_image(1, 1, [10, 20, 30]))
            .unwrap();
        assert_eq!(tensor.shape(), &[1, 1, 1, 3]);
        assert_eq!(tensor[[0, 0, 0, 0]], 10.0);
        assert_eq!(tensor[[0, 0, 0, 1]], 20.0);
        assert_eq!(tensor[[0, 0, 0, 2]], 30.0);
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(NormalizeImage::new(Some(0.0), None, None, None).is_err());
        assert!(NormalizeImage::new(None, Some(vec![0.5]), None, None).is_err());
        assert!(
            NormalizeImage::new(None, None, Some(vec![0.0, 1.0, 1.0]), None).is_err()
        );
    }

    #[test]
    fn preprocessor_config_disabled_steps() {
        let mut config = PreprocessorConfig::default();
        config.do_rescale = false;
        config.do_normalize = false;
        let normalize = NormalizeImage::from_preprocessor_config(&config).unwrap();
        let tensor = normalize
            .normalize_to(&solid_image(1, 1, [100, 100, 100]))
            .unwrap();
        // identity transform: raw channel value passes through
        assert_eq!(tensor[[0, 0, 0, 0]], 100.0);
    }
}
