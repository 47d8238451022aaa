//! Type-safe error codes for API responses.
//!
//! Each code has a client-facing identifier (e.g. "NOT_FOUND"), an integer
//! for logs and metrics (e.g. 1004) and a default message.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::MethodNotAllowed;
//! assert_eq!(code.as_str(), "METHOD_NOT_ALLOWED");
//! assert_eq!(code.code(), 1012);
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Requested resource or route was not found
    NotFound,

    /// HTTP method is not supported by the route
    MethodNotAllowed,
}

impl ErrorCode {
    /// Identifier for programmatic handling by clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }

    /// Integer code used in structured logs (1000-1999: client errors)
    pub fn code(&self) -> i32 {
        match self {
            Self::NotFound => 1004,
            Self::MethodNotAllowed => 1012,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::NotFound => "Resource not found",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this resource",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
