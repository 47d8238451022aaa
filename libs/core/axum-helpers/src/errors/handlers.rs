use axum::response::{IntoResponse, Response};

use super::{AppError, ErrorCode};

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    AppError::NotFound(ErrorCode::NotFound.default_message().to_string()).into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    AppError::MethodNotAllowed.into_response()
}
