//! # REST API Errors
//!
//! Maps service outcomes onto HTTP statuses and bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::service::ServiceError;
use crate::validation::ValidationError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Invalid query parameter
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Invalid request body
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Write request failed validation
    #[error("{0}")]
    Validation(ValidationError),

    /// Resource not found
    #[error("Resource not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unclassified failure; details are logged, not returned
    #[error("Internal error")]
    Internal,
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RestError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::Validation(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            RestError::NotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            RestError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for RestError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => RestError::Validation(e),
            ServiceError::NotFound(_) => RestError::NotFound,
            ServiceError::Store(_) => RestError::Internal,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Not found carries no body.
        if let RestError::NotFound = self {
            return status.into_response();
        }
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::InvalidQueryParam("min_price".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(RestError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RestError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_is_the_body() {
        let body = ErrorResponse::from(RestError::Validation(ValidationError::AddressRequired));
        assert_eq!(body.error, "address is required");
        assert_eq!(body.code, 400);
    }

    #[test]
    fn test_store_errors_are_opaque() {
        let err = RestError::from(ServiceError::Store(StoreError::LockPoisoned));
        assert!(matches!(err, RestError::Internal));
        assert_eq!(err.to_string(), "Internal error");
    }

    #[test]
    fn test_not_found_has_empty_body() {
        let response = RestError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().get("content-type").is_none());
    }
}
