//! Helper constructors for [`ScanError`].
//!
//! These keep call sites short while still attaching the context a failure
//! needs to be diagnosed: which model, which operation, which tensor shape.

use super::types::{ScanError, SimpleError};
use std::path::Path;

impl ScanError {
    /// Creates a configuration error with the given message.
    pub fn config_error(message: impl Into<String>) -> Self {
        ScanError::ConfigError {
            message: message.into(),
        }
    }

    /// Creates an invalid-input error with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ScanError::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a model-load error for a file that could not be opened or parsed.
    pub fn model_load_error(
        path: &Path,
        context: &str,
        suggestion: Option<&str>,
        source: Option<impl std::error::Error + Send + Sync + 'static>,
    ) -> Self {
        ScanError::ModelLoad {
            path: path.to_path_buf(),
            context: context.to_string(),
            suggestion: suggestion.map(|s| s.to_string()),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Creates a model-inference error with full tensor context.
    pub fn model_inference_error(
        model_name: &str,
        operation: &str,
        input_shape: &[usize],
        context: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ScanError::ModelInference {
            model_name: model_name.to_string(),
            operation: operation.to_string(),
            input_shape: input_shape.to_vec(),
            context: context.to_string(),
            source: Box::new(source),
        }
    }

    /// Creates a model-inference error when no tensor was involved yet.
    pub fn inference_error(
        model_name: &str,
        context: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::model_inference_error(model_name, "inference", &[], context, source)
    }

    /// Creates a model-inference error backed by a plain message.
    pub fn inference_message(model_name: &str, operation: &str, message: &str) -> Self {
        Self::model_inference_error(
            model_name,
            operation,
            &[],
            message,
            SimpleError::new(message),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_carries_message() {
        let err = ScanError::config_error("missing model path");
        assert!(err.to_string().contains("missing model path"));
    }

    #[test]
    fn model_load_error_displays_path() {
        let err = ScanError::model_load_error(
            Path::new("/models/model.onnx"),
            "failed to create ONNX session",
            Some("verify the model file exists"),
            None::<std::io::Error>,
        );
        let text = err.to_string();
        assert!(text.contains("/models/model.onnx"));
        assert!(text.contains("failed to create ONNX session"));
    }

    #[test]
    fn inference_error_names_the_model() {
        let err = ScanError::inference_error(
            "lesion_classifier",
            "forward pass failed",
            SimpleError::new("boom"),
        );
        assert!(err.to_string().contains("lesion_classifier"));
    }
}
