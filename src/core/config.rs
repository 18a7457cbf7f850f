//! Configuration types for the classification pipeline.
//!
//! The model directory contains a `preprocessor_config.json` alongside the
//! ONNX artifact, in the conventional image-processor schema. It is parsed
//! once at startup and drives the preprocessing pipeline. When the file is
//! absent the conventional defaults are used (shortest-edge 256, center crop
//! 224x224, rescale 1/255, ImageNet mean/std).

use crate::core::constants::{
    DEFAULT_CLASSIFICATION_INPUT_SHAPE, DEFAULT_IMAGE_MEAN, DEFAULT_IMAGE_STD,
    DEFAULT_RESCALE_FACTOR, DEFAULT_SHORTEST_EDGE,
};
use crate::core::errors::ScanError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Target size for the resize step.
///
/// The conventional schema writes either `{"shortest_edge": N}` or
/// `{"height": H, "width": W}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    /// Resize so the shorter image edge matches the given length,
    /// preserving aspect ratio.
    ShortestEdge { shortest_edge: u32 },
    /// Resize to the exact given dimensions.
    Exact { height: u32, width: u32 },
}

/// Output size of the center-crop step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropSize {
    pub height: u32,
    pub width: u32,
}

/// Parsed `preprocessor_config.json`.
///
/// Unknown fields (e.g. `image_processor_type`, `resample`) are ignored so
/// that configs written by other ecosystems parse cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessorConfig {
    #[serde(default = "default_true")]
    pub do_resize: bool,
    #[serde(default = "default_size")]
    pub size: SizeSpec,
    #[serde(default = "default_true")]
    pub do_center_crop: bool,
    #[serde(default = "default_crop_size")]
    pub crop_size: CropSize,
    #[serde(default = "default_true")]
    pub do_rescale: bool,
    #[serde(default = "default_rescale_factor")]
    pub rescale_factor: f32,
    #[serde(default = "default_true")]
    pub do_normalize: bool,
    #[serde(default = "default_image_mean")]
    pub image_mean: Vec<f32>,
    #[serde(default = "default_image_std")]
    pub image_std: Vec<f32>,
}

fn default_true() -> bool {
    true
}

fn default_size() -> SizeSpec {
    SizeSpec::ShortestEdge {
        shortest_edge: DEFAULT_SHORTEST_EDGE,
    }
}

fn default_crop_size() -> CropSize {
    CropSize {
        height: DEFAULT_CLASSIFICATION_INPUT_SHAPE.1,
        width: DEFAULT_CLASSIFICATION_INPUT_SHAPE.0,
    }
}

fn default_rescale_factor() -> f32 {
    DEFAULT_RESCALE_FACTOR
}

fn default_image_mean() -> Vec<f32> {
    DEFAULT_IMAGE_MEAN.to_vec()
}

fn default_image_std() -> Vec<f32> {
    DEFAULT_IMAGE_STD.to_vec()
}

impl Default for PreprocessorConfig {
    fn default() -> Self {
        Self {
            do_resize: true,
            size: default_size(),
            do_center_crop: true,
            crop_size: default_crop_size(),
            do_rescale: true,
            rescale_factor: default_rescale_factor(),
            do_normalize: true,
            image_mean: default_image_mean(),
            image_std: default_image_std(),
        }
    }
}

impl PreprocessorConfig {
    /// Loads the configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ScanError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScanError::model_load_error(
                path,
                "failed to read preprocessing configuration",
                Some("verify the model directory contains preprocessor_config.json"),
                Some(e),
            )
        })?;
        let config: PreprocessorConfig = serde_json::from_str(&content).map_err(|e| {
            ScanError::model_load_error(
                path,
                "failed to parse preprocessing configuration",
                None,
                Some(e),
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from a file if it exists, otherwise the defaults.
    pub fn from_file_or_default(path: &Path) -> Result<Self, ScanError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// The final spatial size of the preprocessed tensor (width, height).
    pub fn output_shape(&self) -> (u32, u32) {
        if self.do_center_crop {
            (self.crop_size.width, self.crop_size.height)
        } else {
            match self.size {
                SizeSpec::ShortestEdge { shortest_edge } => (shortest_edge, shortest_edge),
                SizeSpec::Exact { height, width } => (width, height),
            }
        }
    }

    /// Checks that all parameters are valid and within acceptable ranges.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.image_mean.len() != 3 {
            return Err(ScanError::config_error(
                "image_mean must have exactly 3 elements for RGB",
            ));
        }
        if self.image_std.len() != 3 {
            return Err(ScanError::config_error(
                "image_std must have exactly 3 elements for RGB",
            ));
        }
        for (i, &s) in self.image_std.iter().enumerate() {
            if s <= 0.0 {
                return Err(ScanError::config_error(format!(
                    "image_std[{i}] must be greater than 0, got {s}"
                )));
            }
        }
        if self.do_rescale && self.rescale_factor <= 0.0 {
            return Err(ScanError::config_error(
                "rescale_factor must be greater than 0",
            ));
        }
        let (w, h) = self.output_shape();
        if w == 0 || h == 0 {
            return Err(ScanError::config_error(
                "preprocessing output dimensions must be non-zero",
            ));
        }
        match self.size {
            SizeSpec::ShortestEdge { shortest_edge } if shortest_edge == 0 => {
                return Err(ScanError::config_error("shortest_edge must be non-zero"));
            }
            SizeSpec::Exact { height, width } if height == 0 || width == 0 => {
                return Err(ScanError::config_error("resize dimensions must be non-zero"));
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_conventional_config() {
        let json = r#"{
            "crop_size": {"height": 224, "width": 224},
            "do_center_crop": true,
            "do_normalize": true,
            "do_rescale": true,
            "do_resize": true,
            "image_mean": [0.485, 0.456, 0.406],
            "image_processor_type": "BitImageProcessor",
            "image_std": [0.229, 0.224, 0.225],
            "resample": 3,
            "rescale_factor": 0.00392156862745098,
            "size": {"shortest_edge": 256}
        }"#;
        let config: PreprocessorConfig = serde_json::from_str(json).unwrap();
        assert!(config.do_center_crop);
        assert_eq!(
            config.size,
            SizeSpec::ShortestEdge { shortest_edge: 256 }
        );
        assert_eq!(config.output_shape(), (224, 224));
        config.validate().unwrap();
    }

    #[test]
    fn parses_exact_size() {
        let json = r#"{"size": {"height": 384, "width": 384}, "do_center_crop": false}"#;
        let config: PreprocessorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.output_shape(), (384, 384));
    }

    #[test]
    fn defaults_when_file_missing() {
        let config =
            PreprocessorConfig::from_file_or_default(Path::new("/nonexistent/prep.json")).unwrap();
        assert_eq!(config.output_shape(), (224, 224));
        assert_eq!(config.image_mean, DEFAULT_IMAGE_MEAN.to_vec());
    }

    #[test]
    fn from_file_reads_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"size": {{"shortest_edge": 300}}}}"#).unwrap();
        let config = PreprocessorConfig::from_file(file.path()).unwrap();
        assert_eq!(
            config.size,
            SizeSpec::ShortestEdge { shortest_edge: 300 }
        );
        // unspecified fields fall back to the defaults
        assert_eq!(config.crop_size.height, 224);
    }

    #[test]
    fn rejects_bad_std() {
        let json = r#"{"image_std": [0.0, 0.2, 0.2]}"#;
        let config: PreprocessorConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_wrong_channel_count() {
        let json = r#"{"image_mean": [0.5]}"#;
        let config: PreprocessorConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }
}
