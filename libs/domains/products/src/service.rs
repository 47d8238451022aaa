//! Product Service - orchestration between HTTP handlers and the repository

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::item_id::ItemId;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product operations: validation, identifier assignment and persistence.
///
/// Each call performs at most one write. Nothing is retried and nothing is
/// rolled back.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate, assign the next `itemId` and insert.
    ///
    /// The id comes from the current document count plus one. Two concurrent
    /// creates can compute the same id; the storage layer decides which wins.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;

        let position = self.repository.count_all().await? + 1;
        let item_id = ItemId::from_sequence(position)?;

        let product = self.repository.insert(Product::new(input, item_id)).await?;
        tracing::info!(item_id = %product.item_id, "Product created");
        Ok(product)
    }

    /// All enabled products, oldest first. An empty result is `NotFound`.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        let products = self.repository.list_enabled().await?;
        if products.is_empty() {
            return Err(ProductError::NotFound("enabled products".to_string()));
        }
        Ok(products)
    }

    /// Fetch by display id, including disabled products
    #[instrument(skip(self))]
    pub async fn get_product(&self, item_id: &str) -> ProductResult<Product> {
        self.repository
            .find_by_item_id(item_id)
            .await?
            .ok_or_else(|| ProductError::NotFound(item_id.to_string()))
    }

    /// Validate, then set only the present fields in a single write.
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, item_id: &str, input: UpdateProduct) -> ProductResult<Product> {
        input.validate()?;

        let product = self
            .repository
            .update_by_item_id(item_id, input)
            .await?
            .ok_or_else(|| ProductError::NotFound(item_id.to_string()))?;

        tracing::info!(item_id = %product.item_id, "Product updated");
        Ok(product)
    }

    /// Soft delete: flips `disabled`, the document stays retrievable.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, item_id: &str) -> ProductResult<Product> {
        let product = self
            .repository
            .disable_by_item_id(item_id)
            .await?
            .ok_or_else(|| ProductError::NotFound(item_id.to_string()))?;

        tracing::info!(item_id = %product.item_id, "Product disabled");
        Ok(product)
    }
}
