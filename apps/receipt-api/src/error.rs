//! # API Error Type
//!
//! Maps store errors and request rejections to HTTP responses.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  JsonRejection (bad JSON, missing field) ─────────► 400 BadRequest      │
//! │                                                                         │
//! │  StoreError::Validation (bad total/price/date) ───► 400 BadRequest      │
//! │                                                                         │
//! │  StoreError::NotFound ────────────────────────────► 400 BadRequest      │
//! │                                                                         │
//! │  Body: { "error": "<message, verbatim>" }                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_store::StoreError;
use serde::Serialize;

/// JSON error body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API error returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed request, unknown receipt id, or a stored receipt that
    /// fails to parse (400).
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::BadRequest(err.to_string()),
            StoreError::Validation(e) => ApiError::BadRequest(e.to_string()),
        }
    }
}

/// Converts JSON extractor rejections (syntax, missing fields, wrong
/// content type, oversized body) to API errors.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "Request failed");
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use receipt_core::ValidationError;

    use super::*;

    #[test]
    fn test_not_found_maps_to_400() {
        let err = ApiError::from(StoreError::not_found("abc"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Receipt not found");
    }

    #[test]
    fn test_validation_maps_to_400_verbatim() {
        let err = ApiError::from(StoreError::from(ValidationError::invalid_amount(
            "total", "1.2.3",
        )));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "total is not a valid amount: '1.2.3'");
    }
}
