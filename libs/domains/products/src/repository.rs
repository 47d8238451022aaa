use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, UpdateProduct};

/// Data access for products.
///
/// Lookups and writes go through the display `itemId`. Writes touch only the
/// fields they change, so an update never resets `disabled`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Count every stored product, disabled ones included
    async fn count_all(&self) -> ProductResult<u64>;

    /// Products with `disabled == "false"`, oldest first
    async fn list_enabled(&self) -> ProductResult<Vec<Product>>;

    /// Find a product by display id, regardless of `disabled`
    async fn find_by_item_id(&self, item_id: &str) -> ProductResult<Option<Product>>;

    /// Insert a new product
    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Atomically set the fields present in `update` and return the updated product
    async fn update_by_item_id(
        &self,
        item_id: &str,
        update: UpdateProduct,
    ) -> ProductResult<Option<Product>>;

    /// Atomically set `disabled` to `"true"` and return the updated product
    async fn disable_by_item_id(&self, item_id: &str) -> ProductResult<Option<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Keeps insertion order, which is also creation order. Rejects a second
/// product with the same `itemId`, like the unique index in MongoDB.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn count_all(&self) -> ProductResult<u64> {
        Ok(self.products.read().await.len() as u64)
    }

    async fn list_enabled(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().filter(|p| !p.disabled).cloned().collect())
    }

    async fn find_by_item_id(&self, item_id: &str) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.item_id == item_id).cloned())
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if products.iter().any(|p| p.item_id == product.item_id) {
            return Err(ProductError::Database(format!(
                "duplicate key: itemId {}",
                product.item_id
            )));
        }

        products.push(product.clone());
        tracing::info!(item_id = %product.item_id, "Inserted product");
        Ok(product)
    }

    async fn update_by_item_id(
        &self,
        item_id: &str,
        update: UpdateProduct,
    ) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let updated = products
            .iter_mut()
            .find(|p| p.item_id == item_id)
            .map(|p| {
                p.apply_update(update);
                p.clone()
            });

        if updated.is_some() {
            tracing::info!(item_id, "Updated product");
        }
        Ok(updated)
    }

    async fn disable_by_item_id(&self, item_id: &str) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;

        let updated = products
            .iter_mut()
            .find(|p| p.item_id == item_id)
            .map(|p| {
                p.disabled = true;
                p.clone()
            });

        if updated.is_some() {
            tracing::info!(item_id, "Disabled product");
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_id::ItemId;
    use crate::models::CreateProduct;

    fn product(position: u64, name: &str) -> Product {
        let input = CreateProduct {
            name: name.to_string(),
            description: String::new(),
            price: 10.0,
            category: "tools".to_string(),
            stock: 1,
            brand: None,
            image_url: None,
        };
        Product::new(input, ItemId::from_sequence(position).unwrap())
    }

    #[tokio::test]
    async fn test_list_enabled_keeps_creation_order_and_skips_disabled() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product(1, "Hammer")).await.unwrap();
        repo.insert(product(2, "Saw")).await.unwrap();
        repo.insert(product(3, "Drill")).await.unwrap();

        repo.disable_by_item_id("ITM-02").await.unwrap();

        let names: Vec<_> = repo
            .list_enabled()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Hammer", "Drill"]);
        assert_eq!(repo.count_all().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_disabled_product_is_still_found() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product(1, "Hammer")).await.unwrap();

        let disabled = repo.disable_by_item_id("ITM-01").await.unwrap().unwrap();
        assert!(disabled.disabled);

        let found = repo.find_by_item_id("ITM-01").await.unwrap().unwrap();
        assert!(found.disabled);
    }

    #[tokio::test]
    async fn test_disable_unknown_returns_none() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.disable_by_item_id("ITM-77").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_item_id_is_rejected() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product(1, "Hammer")).await.unwrap();

        let err = repo.insert(product(1, "Saw")).await.unwrap_err();
        assert!(matches!(err, ProductError::Database(_)));
        assert_eq!(repo.count_all().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_sets_present_fields_only() {
        let repo = InMemoryProductRepository::new();
        let stored = repo.insert(product(1, "Hammer")).await.unwrap();

        let update = UpdateProduct {
            price: Some(12.5),
            ..Default::default()
        };
        let updated = repo.update_by_item_id("ITM-01", update).await.unwrap().unwrap();

        assert_eq!(updated.price, 12.5);
        assert_eq!(updated.name, "Hammer");
        assert_eq!(updated.id, stored.id);
        assert_eq!(repo.find_by_item_id("ITM-01").await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_keeps_disabled_flag() {
        let repo = InMemoryProductRepository::new();
        repo.insert(product(1, "Hammer")).await.unwrap();
        repo.disable_by_item_id("ITM-01").await.unwrap();

        let update = UpdateProduct {
            name: Some("Claw Hammer".to_string()),
            ..Default::default()
        };
        let updated = repo.update_by_item_id("ITM-01", update).await.unwrap().unwrap();

        assert!(updated.disabled);
        assert!(repo.list_enabled().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_returns_none() {
        let repo = InMemoryProductRepository::new();
        let update = UpdateProduct::default();
        assert!(repo.update_by_item_id("ITM-05", update).await.unwrap().is_none());
    }
}
