//! JSON error-body helpers shared by handlers.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// Body shape shared by all failure responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// 400 with a `{"detail": ...}` body.
pub fn bad_request(detail: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
}

/// 500 with a `{"detail": ...}` body.
pub fn internal_error(detail: impl Into<String>) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            detail: detail.into(),
        }),
    )
}
