//! Error codes attached to every error log line.
//!
//! Each code has a SCREAMING_SNAKE_CASE identifier, an integer for
//! dashboards/alerts, and the default message written to the response body.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! assert_eq!(ErrorCode::NotFound.as_str(), "NOT_FOUND");
//! assert_eq!(ErrorCode::NotFound.code(), 1004);
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request was rejected before reaching a handler's business logic
    BadRequest,

    /// Path identifier could not be parsed
    InvalidId,

    /// Request body is not valid JSON of the expected shape
    InvalidJson,

    /// Requested resource was not found
    NotFound,

    /// Route exists but does not accept the request method
    MethodNotAllowed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidJson => "INVALID_JSON",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }

    /// Integer code used in structured logs (1000-1999: client errors).
    pub fn code(&self) -> i32 {
        match self {
            Self::BadRequest => 1001,
            Self::InvalidId => 1002,
            Self::InvalidJson => 1003,
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1005,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::InvalidId => "Invalid ID",
            Self::InvalidJson => "Bad request",
            Self::NotFound => "Not found",
            Self::MethodNotAllowed => "Method not allowed",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::InvalidJson.as_str(), "INVALID_JSON");
        assert_eq!(ErrorCode::MethodNotAllowed.as_str(), "METHOD_NOT_ALLOWED");
    }

    #[test]
    fn test_error_code_integer_codes() {
        assert_eq!(ErrorCode::BadRequest.code(), 1001);
        assert_eq!(ErrorCode::NotFound.code(), 1004);
        assert_eq!(ErrorCode::MethodNotAllowed.code(), 1005);
    }

    #[test]
    fn test_error_code_messages() {
        assert_eq!(ErrorCode::InvalidJson.default_message(), "Bad request");
        assert_eq!(
            ErrorCode::MethodNotAllowed.default_message(),
            "Method not allowed"
        );
    }

    #[test]
    fn test_error_code_display_matches_serde() {
        let code = ErrorCode::InvalidId;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, format!("\"{}\"", code));
    }
}
