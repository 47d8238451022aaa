use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use strum::{Display, IntoStaticStr};
use thiserror::Error;
use validator::ValidationErrors;

const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("{0}")]
    Validation(String),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid sequence position: {0}")]
    InvalidSequence(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProductError::Validation(_) => StatusCode::BAD_REQUEST,
            ProductError::NotFound(_) => StatusCode::NOT_FOUND,
            ProductError::Database(_)
            | ProductError::InvalidSequence(_)
            | ProductError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Attach the operation whose response envelope this error is rendered in.
    pub fn during(self, operation: ProductOperation) -> OperationError {
        OperationError {
            operation,
            error: self,
        }
    }
}

impl From<mongodb::error::Error> for ProductError {
    fn from(err: mongodb::error::Error) -> Self {
        ProductError::Database(err.to_string())
    }
}

impl From<ValidationErrors> for ProductError {
    fn from(err: ValidationErrors) -> Self {
        ProductError::Validation(err.to_string())
    }
}

/// The HTTP operations on products. Each has its own response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ProductOperation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl ProductOperation {
    fn not_found_message(self) -> &'static str {
        match self {
            ProductOperation::List => "product not found",
            ProductOperation::Delete => "Product not found.",
            ProductOperation::Create | ProductOperation::Get | ProductOperation::Update => {
                "Product not found"
            }
        }
    }

    fn failure_body(self, error: &ProductError) -> Value {
        match self {
            ProductOperation::Create => {
                let mut message = error.to_string();
                if message.is_empty() {
                    message = GENERIC_FAILURE.to_string();
                }
                json!({ "success": false, "message": message })
            }
            ProductOperation::Get => json!({ "error": "Error retrieving product" }),
            ProductOperation::List | ProductOperation::Update | ProductOperation::Delete => {
                json!({ "message": GENERIC_FAILURE, "error": error.to_string() })
            }
        }
    }
}

/// A [`ProductError`] bound to the operation it interrupted.
///
/// | error | body |
/// |---|---|
/// | `Validation` | `{"error": <message>}` |
/// | `NotFound` | `{"message": <per-operation text>}` |
/// | anything else | per-operation 500 body |
#[derive(Debug)]
pub struct OperationError {
    pub operation: ProductOperation,
    pub error: ProductError,
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        let Self { operation, error } = self;
        let status = error.status_code();

        let body = match &error {
            ProductError::Validation(message) => {
                tracing::info!(%operation, error = %message, "Rejected invalid product payload");
                json!({ "error": message })
            }
            ProductError::NotFound(what) => {
                tracing::info!(%operation, item = %what, "Product not found");
                json!({ "message": operation.not_found_message() })
            }
            _ => {
                tracing::error!(%operation, error = %error, "Product operation failed");
                operation.failure_body(&error)
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(error: ProductError, operation: ProductOperation) -> (StatusCode, Value) {
        let response = error.during(operation).into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_envelope() {
        let (status, body) = render(
            ProductError::Validation("name: too short".to_string()),
            ProductOperation::Create,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "name: too short" }));
    }

    #[tokio::test]
    async fn test_not_found_messages_per_operation() {
        let cases = [
            (ProductOperation::List, "product not found"),
            (ProductOperation::Get, "Product not found"),
            (ProductOperation::Update, "Product not found"),
            (ProductOperation::Delete, "Product not found."),
        ];

        for (operation, message) in cases {
            let (status, body) =
                render(ProductError::NotFound("ITM-09".to_string()), operation).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, json!({ "message": message }), "{operation}");
        }
    }

    #[tokio::test]
    async fn test_create_failure_envelope() {
        let (status, body) = render(
            ProductError::Database("connection reset".to_string()),
            ProductOperation::Create,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Database error: connection reset");
    }

    #[tokio::test]
    async fn test_create_failure_defaults_empty_message() {
        let (_, body) = render(ProductError::Validation(String::new()), ProductOperation::Create)
            .await;
        // Validation keeps its own envelope even when empty
        assert_eq!(body, json!({ "error": "" }));

        let body = ProductOperation::Create.failure_body(&ProductError::Validation(String::new()));
        assert_eq!(body["message"], GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn test_get_failure_hides_cause() {
        let (status, body) = render(
            ProductError::Database("socket closed".to_string()),
            ProductOperation::Get,
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Error retrieving product" }));
    }

    #[tokio::test]
    async fn test_generic_failure_envelope() {
        for operation in [
            ProductOperation::List,
            ProductOperation::Update,
            ProductOperation::Delete,
        ] {
            let (status, body) = render(ProductError::InvalidSequence(0), operation).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body["message"], GENERIC_FAILURE);
            assert_eq!(body["error"], "Invalid sequence position: 0");
        }
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(ProductOperation::Create.to_string(), "create");
        let name: &'static str = ProductOperation::Delete.into();
        assert_eq!(name, "delete");
    }
}
