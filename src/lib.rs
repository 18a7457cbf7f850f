//! # derma-scan
//!
//! A skin-lesion classification web tool backed by a pretrained ONNX model.
//! An uploaded image is normalized to RGB, preprocessed per the model's
//! companion configuration, and classified in a single forward pass; the
//! predicted disease label keys a static knowledge base of advisory
//! descriptions and recommended laboratory tests.
//!
//! ## Modules
//!
//! * [`core`] - Error handling, configuration, and ONNX Runtime integration
//! * [`knowledge`] - The canonical disease table and its lookup views
//! * [`predictor`] - The lesion classifier built on the inference engine
//! * [`processors`] - Image preprocessing stages and top-k post-processing
//! * [`server`] - The axum web front end (form in, rendered page out)
//! * [`utils`] - Image loading and conversion helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use derma_scan::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let classifier = LesionClassifier::from_dir(Path::new("dinov2_skin_disease_model"))?;
//! let image = load_image(Path::new("lesion.jpg"))?;
//! let prediction = classifier.classify(&image)?;
//! println!(
//!     "{}: {}",
//!     prediction.label,
//!     derma_scan::knowledge::description_for(&prediction.label)
//! );
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod knowledge;
pub mod predictor;
pub mod processors;
pub mod server;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use derma_scan::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{ScanError, ScanResult};
    pub use crate::knowledge::{description_for, lab_tests_for, DiseaseEntry};
    pub use crate::predictor::{LesionClassification, LesionClassifier, LesionClassifierBuilder};
    pub use crate::server::{router, AppState};
    pub use crate::utils::load_image;
}
