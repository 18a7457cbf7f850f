//! Predictors built on top of the inference engine.

pub mod lesion_classifier;

pub use lesion_classifier::{
    LesionClassification, LesionClassifier, LesionClassifierBuilder, LesionClassifierConfig,
};
