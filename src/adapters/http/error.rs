//! Error body shared by every endpoint.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ErrorCode;

/// `{code, message}` body returned with every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    /// Storage and other unexpected failures. Details stay in the logs.
    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError, "An internal error occurred")
    }

    /// Pairs the body with a status code.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Unreadable or incomplete request bodies answer 400 instead of axum's 422.
pub fn body_rejection(rejection: JsonRejection) -> Response {
    ErrorResponse::new(ErrorCode::ValidationFailed, rejection.body_text())
        .into_response_with(StatusCode::BAD_REQUEST)
}
