//! Request handlers for the upload form.

use super::{page, AppState};
use crate::knowledge;
use crate::utils::{decode_upload, sniff_mime};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::body::Bytes;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use tracing::{error, warn};

/// Renders the upload form.
pub async fn index() -> Html<String> {
    Html(page::render_index())
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

fn error_page(status: StatusCode, message: &str) -> Response {
    (status, Html(page::render_error(message))).into_response()
}

/// Handles an uploaded image: decode, classify, and render the result page.
pub async fn classify(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut upload: Option<Bytes> = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() == Some("image") {
                    match field.bytes().await {
                        Ok(bytes) => {
                            upload = Some(bytes);
                            break;
                        }
                        Err(e) => {
                            return error_page(
                                StatusCode::BAD_REQUEST,
                                &format!("failed to read the uploaded file: {e}"),
                            );
                        }
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return error_page(
                    StatusCode::BAD_REQUEST,
                    &format!("invalid upload request: {e}"),
                );
            }
        }
    }

    let Some(bytes) = upload.filter(|bytes| !bytes.is_empty()) else {
        return error_page(StatusCode::BAD_REQUEST, "No image file was uploaded.");
    };

    let Some(mime) = sniff_mime(&bytes) else {
        return error_page(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "The uploaded file is not a JPEG or PNG image.",
        );
    };

    // one blocking forward pass per upload, off the async executor
    let classifier = state.classifier.clone();
    let upload_bytes = bytes.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let image = decode_upload(&upload_bytes)?;
        classifier.classify(&image)
    })
    .await;

    let classification = match outcome {
        Ok(Ok(classification)) => classification,
        Ok(Err(e)) => {
            warn!("classification failed: {e}");
            return error_page(
                StatusCode::UNPROCESSABLE_ENTITY,
                &format!("The image could not be classified: {e}"),
            );
        }
        Err(e) => {
            error!("classification task failed: {e}");
            return error_page(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Classification failed unexpectedly.",
            );
        }
    };

    let description = knowledge::description_for(&classification.label);
    let lab_tests = knowledge::lab_tests_for(&classification.label);
    let image_data_uri = format!("data:{mime};base64,{}", BASE64.encode(&bytes));

    Html(page::render_result(
        &image_data_uri,
        &classification.label,
        description,
        lab_tests,
    ))
    .into_response()
}
