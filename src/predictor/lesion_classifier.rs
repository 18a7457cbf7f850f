//! Skin-Lesion Classifier
//!
//! This module provides functionality for classifying skin-lesion images into
//! one of the disease categories the pretrained model was trained on.
//!
//! The classifier loads an ONNX model and its companion preprocessing
//! configuration from a model directory, preprocesses an RGB image into the
//! tensor layout the model expects, and selects the arg-max class from the
//! model's per-class scores.

use crate::core::{
    constants::{MODEL_FILE_NAME, NUM_CLASSES, PREPROCESSOR_CONFIG_FILE_NAME},
    OrtInfer, PreprocessorConfig, ScanError, SizeSpec, Tensor4D,
};
use crate::knowledge;
use crate::processors::{center_crop, resize_exact, resize_shortest_edge, NormalizeImage, Topk};
use image::RgbImage;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Configuration for the lesion classifier.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct LesionClassifierConfig {
    /// Name used for the model in logs and errors.
    pub model_name: Option<String>,
    /// Number of ONNX sessions to pool for concurrent predictions.
    pub session_pool_size: Option<usize>,
    /// Number of top predictions to keep internally.
    pub topk: Option<usize>,
    /// Preprocessing configuration; loaded from the model directory when absent.
    pub preprocessor: Option<PreprocessorConfig>,
}

impl LesionClassifierConfig {
    /// Checks that all configuration parameters are valid.
    pub fn validate(&self) -> Result<(), ScanError> {
        if let Some(topk) = self.topk {
            if topk == 0 {
                return Err(ScanError::config_error("topk must be greater than 0"));
            }
        }
        if let Some(pool) = self.session_pool_size {
            if pool == 0 {
                return Err(ScanError::config_error(
                    "session_pool_size must be greater than 0",
                ));
            }
        }
        if let Some(ref preprocessor) = self.preprocessor {
            preprocessor.validate()?;
        }
        Ok(())
    }
}

/// Result of classifying a single image.
#[derive(Debug, Clone)]
pub struct LesionClassification {
    /// The arg-max class index.
    pub class_id: usize,
    /// The disease label for the predicted class.
    pub label: Arc<str>,
    /// The raw score of the predicted class.
    pub score: f32,
}

/// Skin-lesion classifier backed by a pretrained ONNX model.
#[derive(Debug)]
pub struct LesionClassifier {
    topk: usize,
    model_name: String,
    preprocessor: PreprocessorConfig,
    normalize: NormalizeImage,
    infer: OrtInfer,
    post_op: Topk,
}

impl LesionClassifier {
    /// Creates a classifier from a configuration and the ONNX model path.
    pub fn new(config: LesionClassifierConfig, model_path: &Path) -> Result<Self, ScanError> {
        config.validate()?;

        let preprocessor = config.preprocessor.unwrap_or_default();
        let model_name = config
            .model_name
            .unwrap_or_else(|| "lesion_classifier".to_string());
        let pool_size = config.session_pool_size.unwrap_or(1);
        let topk = config.topk.unwrap_or(1);

        let normalize = NormalizeImage::from_preprocessor_config(&preprocessor)?;
        let infer = OrtInfer::with_pool_size(model_path, pool_size)?;

        if let Some(shape) = infer.primary_input_shape() {
            let (want_w, want_h) = preprocessor.output_shape();
            // NCHW with dynamic batch: [-1, 3, H, W]
            if shape.len() == 4 {
                let (h, w) = (shape[2], shape[3]);
                if h > 0 && w > 0 && (h as u32 != want_h || w as u32 != want_w) {
                    warn!(
                        "model expects {}x{} input but preprocessing produces {}x{}",
                        w, h, want_w, want_h
                    );
                }
            }
        }

        Ok(Self {
            topk,
            model_name,
            preprocessor,
            normalize,
            infer,
            post_op: Topk::from_class_names(&knowledge::class_labels()),
        })
    }

    /// Creates a classifier from a model directory.
    ///
    /// The directory must contain the ONNX artifact (`model.onnx`); the
    /// preprocessing configuration (`preprocessor_config.json`) is optional
    /// and falls back to the conventional defaults.
    pub fn from_dir(model_dir: &Path) -> Result<Self, ScanError> {
        LesionClassifierBuilder::new().build(model_dir)
    }

    /// The name used for this model in logs and errors.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Preprocesses an RGB image into the NCHW tensor the model expects.
    fn preprocess(&self, image: &RgbImage) -> Result<Tensor4D, ScanError> {
        let resized = if self.preprocessor.do_resize {
            Some(match self.preprocessor.size {
                SizeSpec::ShortestEdge { shortest_edge } => {
                    resize_shortest_edge(image, shortest_edge)
                }
                SizeSpec::Exact { height, width } => resize_exact(image, width, height),
            })
        } else {
            None
        };
        let current = resized.as_ref().unwrap_or(image);

        let cropped = if self.preprocessor.do_center_crop {
            let crop = self.preprocessor.crop_size;
            Some(center_crop(current, crop.width, crop.height))
        } else {
            None
        };
        let current = cropped.as_ref().unwrap_or(current);

        self.normalize.normalize_to(current)
    }

    /// Classifies a single RGB image.
    ///
    /// Runs one forward pass and returns the arg-max class with its label.
    pub fn classify(&self, image: &RgbImage) -> Result<LesionClassification, ScanError> {
        let input = self.preprocess(image)?;
        let scores = self.infer.infer_2d(&input)?;

        if scores.nrows() == 0 {
            return Err(ScanError::invalid_input(
                "model returned an empty score matrix",
            ));
        }
        let row: Vec<f32> = scores.row(0).to_vec();
        if row.len() != NUM_CLASSES {
            warn!(
                "model produced {} classes, knowledge base has {}",
                row.len(),
                NUM_CLASSES
            );
        }

        let topk_result = self
            .post_op
            .process_single(&row, self.topk)
            .map_err(|e| ScanError::ConfigError { message: e })?;

        let class_id = topk_result
            .indexes
            .first()
            .and_then(|ids| ids.first())
            .copied()
            .ok_or_else(|| ScanError::invalid_input("classifier produced no predictions"))?;
        let score = topk_result
            .scores
            .first()
            .and_then(|scores| scores.first())
            .copied()
            .unwrap_or(f32::NEG_INFINITY);
        let label: Arc<str> = topk_result
            .class_names
            .as_ref()
            .and_then(|names| names.first())
            .and_then(|names| names.first())
            .map(|name| Arc::from(name.as_str()))
            .unwrap_or_else(|| Arc::from(class_id.to_string().as_str()));

        info!(
            "predicted class {} ({}) with score {:.3}",
            class_id, label, score
        );

        Ok(LesionClassification {
            class_id,
            label,
            score,
        })
    }
}

/// Builder for the lesion classifier.
pub struct LesionClassifierBuilder {
    config: LesionClassifierConfig,
}

impl LesionClassifierBuilder {
    /// Creates a builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: LesionClassifierConfig::default(),
        }
    }

    /// Sets the model name used in logs and errors.
    pub fn model_name(mut self, model_name: impl Into<String>) -> Self {
        self.config.model_name = Some(model_name.into());
        self
    }

    /// Sets the session pool size for concurrent predictions.
    pub fn session_pool_size(mut self, size: usize) -> Self {
        self.config.session_pool_size = Some(size);
        self
    }

    /// Sets the number of top predictions kept internally.
    pub fn topk(mut self, topk: usize) -> Self {
        self.config.topk = Some(topk);
        self
    }

    /// Overrides the preprocessing configuration.
    pub fn preprocessor(mut self, preprocessor: PreprocessorConfig) -> Self {
        self.config.preprocessor = Some(preprocessor);
        self
    }

    /// Builds the classifier from a model directory.
    pub fn build(mut self, model_dir: &Path) -> Result<LesionClassifier, ScanError> {
        let model_path = model_dir.join(MODEL_FILE_NAME);
        if !model_path.exists() {
            return Err(ScanError::model_load_error(
                &model_path,
                "model file not found",
                Some("the model directory must contain model.onnx"),
                None::<std::io::Error>,
            ));
        }

        if self.config.preprocessor.is_none() {
            let config_path = model_dir.join(PREPROCESSOR_CONFIG_FILE_NAME);
            self.config.preprocessor = Some(PreprocessorConfig::from_file_or_default(&config_path)?);
        }

        LesionClassifier::new(self.config, &model_path)
    }
}

impl Default for LesionClassifierBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_topk() {
        let config = LesionClassifierConfig {
            topk: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_rejects_zero_pool() {
        let config = LesionClassifierConfig {
            session_pool_size: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn builder_reports_missing_model_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LesionClassifierBuilder::new().build(dir.path()).unwrap_err();
        assert!(err.to_string().contains("model file not found"));
    }
}
