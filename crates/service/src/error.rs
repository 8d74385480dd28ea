//! Errors returned at the transport boundary.
//!
//! These are raised before the evaluator runs; once a request reaches the
//! evaluator it always produces a reply.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Reason a request was rejected before evaluation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Body was not a valid `RiskEvaluationRequest` (not JSON, not an
    /// object, wrongly typed fields, wrong content type).
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::MalformedRequest(rejection.body_text())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "rejecting evaluation request");
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
