pub mod codes;
pub mod handlers;

pub use codes::ErrorCode;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application error type that can be converted to HTTP responses.
///
/// Every variant renders as a status code plus a single-line
/// `text/plain; charset=utf-8` body. The [`ErrorCode`] is only written to the
/// log, never to the client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidJson(_) | AppError::BadRequest(_) | AppError::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::InvalidJson(_) => ErrorCode::InvalidJson,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::InvalidId(_) => ErrorCode::InvalidId,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let message = match self {
            AppError::InvalidJson(e) => {
                tracing::warn!(error_code = code.code(), "JSON body rejected: {}", e);
                code.default_message().to_string()
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                msg
            }
            AppError::InvalidId(msg) => {
                tracing::info!(error_code = code.code(), "Invalid identifier: {}", msg);
                msg
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                msg
            }
            AppError::MethodNotAllowed => {
                tracing::info!(error_code = code.code(), "Method not allowed");
                code.default_message().to_string()
            }
        };

        error_response(status, message)
    }
}

/// Plain-text error response with `X-Content-Type-Options: nosniff`.
pub fn error_response(status: StatusCode, message: String) -> Response {
    (
        status,
        [(header::X_CONTENT_TYPE_OPTIONS, "nosniff")],
        message,
    )
        .into_response()
}
