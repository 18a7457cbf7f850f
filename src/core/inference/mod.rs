//! ONNX Runtime integration.
//!
//! [`OrtInfer`] wraps one or more ONNX Runtime sessions behind a small
//! round-robin pool and exposes the single call shape a classifier needs:
//! a 4D image batch in, a 2D logits matrix out.

mod ort_infer;

pub use ort_infer::OrtInfer;
