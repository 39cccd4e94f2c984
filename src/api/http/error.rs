// src/api/http/error.rs
// Maps calculation failures onto the JSON error body clients expect

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::debug;

use crate::calculator::CalcError;

/// Error response for the REST API: HTTP status plus the
/// `{success, error, code}` body.
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub code: &'static str,
    pub status_code: StatusCode,
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        // Every calculator-level failure is a 400; only the axum extractors
        // produce other statuses.
        Self {
            message: err.to_string(),
            code: err.code(),
            status_code: StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!("calculation rejected: {} ({})", self.message, self.code);
        let body = json!({
            "success": false,
            "error": self.message,
            "code": self.code,
        });
        (self.status_code, Json(body)).into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
