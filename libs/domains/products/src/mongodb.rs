//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Product, UpdateProduct};
use crate::repository::ProductRepository;

pub const DEFAULT_COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Create the indexes the repository relies on.
    ///
    /// - `idx_item_id_unique`: one product per display id
    /// - `idx_disabled_created`: listing enabled products oldest first
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "itemId": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_item_id_unique".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "disabled": 1, "createdAt": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_disabled_created".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!(collection = %self.collection.name(), "Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    fn by_item_id(item_id: &str) -> Document {
        doc! { "itemId": item_id }
    }
}

/// `$set` body with only the fields present in `update`, keyed as stored.
fn set_fields(update: &UpdateProduct) -> Document {
    let mut set = Document::new();
    if let Some(name) = &update.name {
        set.insert("name", name.as_str());
    }
    if let Some(description) = &update.description {
        set.insert("description", description.as_str());
    }
    if let Some(price) = update.price {
        set.insert("price", price);
    }
    if let Some(category) = &update.category {
        set.insert("category", category.as_str());
    }
    if let Some(stock) = update.stock {
        set.insert("stock", stock);
    }
    if let Some(brand) = &update.brand {
        set.insert("brand", brand.as_str());
    }
    if let Some(image_url) = &update.image_url {
        set.insert("imageUrl", image_url.as_str());
    }
    set
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn count_all(&self) -> ProductResult<u64> {
        Ok(self.collection.count_documents(doc! {}).await?)
    }

    #[instrument(skip(self))]
    async fn list_enabled(&self) -> ProductResult<Vec<Product>> {
        let cursor = self
            .collection
            .find(doc! { "disabled": "false" })
            .sort(doc! { "createdAt": 1, "_id": 1 })
            .await?;

        let products: Vec<Product> = cursor.try_collect().await?;
        tracing::debug!(count = products.len(), "Listed enabled products");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn find_by_item_id(&self, item_id: &str) -> ProductResult<Option<Product>> {
        Ok(self.collection.find_one(Self::by_item_id(item_id)).await?)
    }

    #[instrument(skip(self, product), fields(item_id = %product.item_id))]
    async fn insert(&self, product: Product) -> ProductResult<Product> {
        self.collection.insert_one(&product).await?;

        tracing::info!(product_id = %product.id, "Product inserted");
        Ok(product)
    }

    #[instrument(skip(self, update))]
    async fn update_by_item_id(
        &self,
        item_id: &str,
        update: UpdateProduct,
    ) -> ProductResult<Option<Product>> {
        let set = set_fields(&update);
        // MongoDB rejects an empty $set
        if set.is_empty() {
            return self.find_by_item_id(item_id).await;
        }

        let product = self
            .collection
            .find_one_and_update(Self::by_item_id(item_id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;

        if product.is_some() {
            tracing::info!("Product updated");
        }
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn disable_by_item_id(&self, item_id: &str) -> ProductResult<Option<Product>> {
        let product = self
            .collection
            .find_one_and_update(
                Self::by_item_id(item_id),
                doc! { "$set": { "disabled": "true" } },
            )
            .return_document(ReturnDocument::After)
            .await?;

        if product.is_some() {
            tracing::info!("Product disabled");
        }
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_fields_holds_only_present_fields() {
        let update = UpdateProduct {
            price: Some(50.0),
            stock: Some(3),
            image_url: Some("https://cdn.example.com/lamp.png".to_string()),
            ..Default::default()
        };

        assert_eq!(
            set_fields(&update),
            doc! {
                "price": 50.0,
                "stock": 3_i64,
                "imageUrl": "https://cdn.example.com/lamp.png",
            }
        );
    }

    #[test]
    fn test_set_fields_never_touches_disabled_or_item_id() {
        let update = UpdateProduct {
            name: Some("Desk Lamp".to_string()),
            ..Default::default()
        };
        let set = set_fields(&update);

        assert!(!set.contains_key("disabled"));
        assert!(!set.contains_key("itemId"));
        assert!(set_fields(&UpdateProduct::default()).is_empty());
    }
}
