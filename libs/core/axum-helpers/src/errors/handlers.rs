use axum::response::{IntoResponse, Response};

use super::{AppError, ErrorCode};

/// Fallback for paths no route matches.
pub async fn not_found() -> Response {
    AppError::NotFound(ErrorCode::NotFound.default_message().to_string()).into_response()
}

/// Fallback for a known route hit with a method it does not serve.
///
/// Attach with `MethodRouter::fallback` so the 405 carries a body.
pub async fn method_not_allowed() -> Response {
    AppError::MethodNotAllowed.into_response()
}
