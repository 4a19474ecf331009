//! Error types for the Receipt API.
//!
//! Every failure leaves the server as the same JSON shape:
//!
//! ```text
//! { "error": { "code": "INVALID_RETAILER",
//!              "message": "Please provide a retailer name of at least 1 character" } }
//! ```

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::ValidationError;
use receipt_store::StoreError;
use serde::Serialize;

/// Receipt API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(ValidationError),

    #[error("Receipt not found")]
    ReceiptNotFound { id: String },

    #[error("Route not found")]
    RouteNotFound,

    #[error("Request body must be valid JSON")]
    MalformedBody(String),

    #[error("Request body is too large")]
    PayloadTooLarge,

    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::ReceiptNotFound { .. } | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(err) => err.code(),
            ApiError::ReceiptNotFound { .. } | ApiError::RouteNotFound => "NOT_FOUND",
            ApiError::MalformedBody(_) => "MALFORMED_BODY",
            ApiError::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Code and message of an error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        ErrorResponse {
            error: ErrorDetail {
                code: err.code(),
                message: err.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref detail) = self {
            tracing::error!(detail = %detail, "Internal error");
        }

        (self.status_code(), Json(ErrorResponse::from(&self))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::ReceiptNotFound { id },
            StoreError::Validation(err) => ApiError::Validation(err),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        let status = rejection.status();
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else if status.is_server_error() {
            ApiError::Internal(rejection.body_text())
        } else {
            ApiError::MalformedBody(rejection.body_text())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedBody(err.to_string())
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
