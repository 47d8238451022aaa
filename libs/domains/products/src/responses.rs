//! Success bodies of the products API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Product;

/// `POST /products`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductCreated {
    #[schema(example = "Product data inserted")]
    pub message: String,
    pub data: Product,
}

/// `GET /products`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductList {
    #[schema(example = "success")]
    pub message: String,
    pub product: Vec<Product>,
}

/// `GET /products/{item_id}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductFound {
    pub product: Product,
}

/// `PUT|PATCH /products/{item_id}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductUpdated {
    #[schema(example = "Product updated successfully")]
    pub message: String,
    pub product: Product,
}

/// Message-only body: delete confirmations and 404s
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

/// 400 body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationFailure {
    pub error: String,
}

/// 500 body of `POST /products`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateFailure {
    pub success: bool,
    #[schema(example = "Something went wrong")]
    pub message: String,
}

/// 500 body of list, update and delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OperationFailure {
    #[schema(example = "Something went wrong")]
    pub message: String,
    pub error: String,
}

/// 500 body of `GET /products/{item_id}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RetrievalFailure {
    #[schema(example = "Error retrieving product")]
    pub error: String,
}
