//! Web front end for the classifier.
//!
//! One page, one form: `GET /` renders the upload form, `POST /` runs the
//! uploaded image through the classifier and renders the prediction with its
//! advisory text. `GET /health` is a liveness probe.

pub mod handlers;
pub mod page;

use crate::core::constants::MAX_UPLOAD_BYTES;
use crate::predictor::LesionClassifier;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state: the classifier loaded once at startup.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<LesionClassifier>,
}

impl AppState {
    pub fn new(classifier: LesionClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::classify))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
