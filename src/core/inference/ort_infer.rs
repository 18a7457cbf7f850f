//! Core ONNX Runtime inference engine with a small session pool.

use crate::core::errors::{ScanError, SimpleError};
use crate::core::{Tensor2D, Tensor4D};
use ndarray::ArrayView2;
use ort::logging::LogLevel;
use ort::session::Session;
use ort::value::{TensorRef, ValueType};
use std::path::Path;
use std::sync::Mutex;

/// ONNX Runtime inference engine for the lesion classifier.
///
/// Sessions are pooled behind mutexes and handed out round-robin so that
/// concurrent page renders do not serialize on a single session. Input and
/// output tensor names are discovered from the model when not specified.
pub struct OrtInfer {
    sessions: Vec<Mutex<Session>>,
    next_idx: std::sync::atomic::AtomicUsize,
    input_name: String,
    output_name: Option<String>,
    model_path: std::path::PathBuf,
    model_name: String,
}

impl std::fmt::Debug for OrtInfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrtInfer")
            .field("sessions", &self.sessions.len())
            .field("input_name", &self.input_name)
            .field("output_name", &self.output_name)
            .field("model_path", &self.model_path)
            .field("model_name", &self.model_name)
            .finish()
    }
}

impl OrtInfer {
    /// Creates an inference engine with a single session and discovered tensor names.
    pub fn new(model_path: impl AsRef<Path>) -> Result<Self, ScanError> {
        Self::with_pool_size(model_path, 1)
    }

    /// Creates an inference engine with a session pool of the given size.
    ///
    /// The pool size is clamped to at least 1.
    pub fn with_pool_size(model_path: impl AsRef<Path>, pool_size: usize) -> Result<Self, ScanError> {
        let path = model_path.as_ref();
        let pool_size = pool_size.max(1);

        let mut sessions = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            let session = Session::builder()?
                .with_log_level(LogLevel::Error)?
                .commit_from_file(path)
                .map_err(|e| {
                    ScanError::model_load_error(
                        path,
                        "failed to create ONNX session",
                        Some("verify model path and compatibility with the ONNX Runtime build"),
                        Some(e),
                    )
                })?;
            sessions.push(Mutex::new(session));
        }

        let model_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown_model")
            .to_string();

        let input_name = {
            let session = sessions[0].lock().map_err(|_| ScanError::InvalidInput {
                message: "Failed to acquire session lock".to_string(),
            })?;
            session
                .inputs
                .first()
                .map(|i| i.name.clone())
                .ok_or_else(|| ScanError::InvalidInput {
                    message: "No inputs available in session - model may be invalid or corrupted"
                        .to_string(),
                })?
        };

        Ok(OrtInfer {
            sessions,
            next_idx: std::sync::atomic::AtomicUsize::new(0),
            input_name,
            output_name: None,
            model_path: path.to_path_buf(),
            model_name,
        })
    }

    /// Returns the model path associated with this inference engine.
    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Returns the model name associated with this inference engine.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Attempts to retrieve the primary input tensor shape from the first session.
    ///
    /// Returns a vector of dimensions if available. Dynamic dimensions (e.g., -1)
    /// are returned as-is.
    pub fn primary_input_shape(&self) -> Option<Vec<i64>> {
        let session_mutex = self.sessions.first()?;
        let session_guard = session_mutex.lock().ok()?;
        let input = session_guard.inputs.first()?;
        match &input.input_type {
            ValueType::Tensor { shape, .. } => Some(shape.iter().copied().collect()),
            _ => None,
        }
    }

    /// Returns the configured or discovered output tensor name.
    fn get_output_name(&self) -> Result<String, ScanError> {
        if let Some(ref name) = self.output_name {
            Ok(name.clone())
        } else {
            let session = self.sessions[0]
                .lock()
                .map_err(|_| ScanError::InvalidInput {
                    message: "Failed to acquire session lock".to_string(),
                })?;
            if let Some(output) = session.outputs.first() {
                Ok(output.name.clone())
            } else {
                Err(ScanError::InvalidInput {
                    message: "No outputs available in session - model may be invalid or corrupted"
                        .to_string(),
                })
            }
        }
    }

    /// Runs a forward pass and returns the per-class score matrix.
    ///
    /// The input is an NCHW f32 batch; the output has shape
    /// `[batch_size, num_classes]`.
    pub fn infer_2d(&self, x: &Tensor4D) -> Result<Tensor2D, ScanError> {
        let batch_size = x.shape()[0];
        let input_shape = x.shape().to_vec();

        let output_name = self.get_output_name().map_err(|e| {
            ScanError::inference_error(
                &self.model_name,
                &format!(
                    "Failed to get output name for model at '{}'",
                    self.model_path.display()
                ),
                e,
            )
        })?;

        let input_tensor = TensorRef::from_array_view(x.view()).map_err(|e| {
            ScanError::model_inference_error(
                &self.model_name,
                "tensor_conversion",
                &input_shape,
                &format!("Failed to convert input tensor with shape {input_shape:?}"),
                e,
            )
        })?;

        let inputs = ort::inputs![self.input_name.as_str() => input_tensor];

        let idx = self
            .next_idx
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed)
            % self.sessions.len();
        let mut session_guard = self.sessions[idx].lock().map_err(|_| {
            ScanError::inference_error(
                &self.model_name,
                &format!(
                    "Failed to acquire session lock for session {}/{}",
                    idx,
                    self.sessions.len()
                ),
                SimpleError::new("Session lock acquisition failed"),
            )
        })?;

        let outputs = session_guard.run(inputs).map_err(|e| {
            ScanError::model_inference_error(
                &self.model_name,
                "forward_pass",
                &input_shape,
                &format!(
                    "ONNX Runtime inference failed with input '{}' -> output '{}'",
                    self.input_name, output_name
                ),
                e,
            )
        })?;

        let output = outputs[output_name.as_str()]
            .try_extract_tensor::<f32>()
            .map_err(|e| {
                ScanError::model_inference_error(
                    &self.model_name,
                    "output_extraction",
                    &input_shape,
                    &format!("Failed to extract output tensor '{output_name}' as f32"),
                    e,
                )
            })?;
        let (output_shape, output_data) = output;

        if output_shape.len() != 2 {
            return Err(ScanError::model_inference_error(
                &self.model_name,
                "output_validation",
                &input_shape,
                &format!(
                    "expected 2D output tensor, got {}D with shape {:?}",
                    output_shape.len(),
                    output_shape
                ),
                SimpleError::new("Invalid output tensor dimensions"),
            ));
        }

        let num_classes = output_shape[1] as usize;
        let expected_len = batch_size * num_classes;
        if output_data.len() != expected_len {
            return Err(ScanError::model_inference_error(
                &self.model_name,
                "output_data_validation",
                &input_shape,
                &format!(
                    "output data size mismatch: expected {expected_len}, got {} (output shape {output_shape:?})",
                    output_data.len()
                ),
                SimpleError::new("Output tensor data size mismatch"),
            ));
        }

        let array_view = ArrayView2::from_shape((batch_size, num_classes), output_data)
            .map_err(ScanError::Tensor)?;
        Ok(array_view.to_owned())
    }
}
