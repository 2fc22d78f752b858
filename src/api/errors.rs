//! # HTTP API Errors
//!
//! Maps store and query errors onto HTTP status codes with a JSON error
//! body. Every error here is per-request; none is fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::query::QueryError;
use crate::store::StoreError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Store-level failure (validation, not-found, duplicate key)
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Query engine rejection (unsupported operator)
    #[error("{0}")]
    Query(#[from] QueryError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::DuplicateKey(_)) => StatusCode::CONFLICT,
            ApiError::Store(StoreError::MissingIdentity) => StatusCode::BAD_REQUEST,
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Store(StoreError::NotFound("EXP1".to_string())).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Store(StoreError::MissingIdentity).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Store(StoreError::DuplicateKey("EXP1".to_string())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Query(QueryError::UnsupportedOperator("regex".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_body_carries_message_and_code() {
        let err = ApiError::Store(StoreError::NotFound("EXP7".to_string()));
        let body = ErrorResponse::from(err);
        assert_eq!(body.code, 404);
        assert!(body.error.contains("EXP7"));
    }
}
