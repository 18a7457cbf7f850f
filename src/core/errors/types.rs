//! Error type definitions for the classification pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// A minimal error carrying only a message.
///
/// Used as the source error when a failure has no underlying error value,
/// e.g. a poisoned session lock.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SimpleError {
    message: String,
}

impl SimpleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The error type used throughout the classification pipeline.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Configuration is missing or inconsistent.
    #[error("configuration error: {message}")]
    ConfigError { message: String },

    /// An input value failed validation.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// An image could not be loaded or decoded.
    #[error("image load failed: {0}")]
    ImageLoad(#[from] image::ImageError),

    /// A tensor could not be created or reshaped.
    #[error("tensor shape error: {0}")]
    Tensor(#[from] ndarray::ShapeError),

    /// ONNX Runtime reported an error outside of a model call.
    #[error("ONNX Runtime error: {0}")]
    Session(#[from] ort::Error),

    /// The model artifact could not be loaded from disk.
    #[error("failed to load model from '{}': {context}", .path.display())]
    ModelLoad {
        path: PathBuf,
        context: String,
        suggestion: Option<String>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A forward pass or tensor exchange with the model failed.
    #[error("model '{model_name}' {operation} failed (input shape {input_shape:?}): {context}")]
    ModelInference {
        model_name: String,
        operation: String,
        input_shape: Vec<usize>,
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
