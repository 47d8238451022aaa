use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::item_id::ItemId;
use crate::serde_helpers::{disabled_flag, timestamp_millis, uuid_string};

/// Product entity as stored in the `products` collection and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Storage identifier (stored as `_id`)
    #[serde(rename = "_id", alias = "id", with = "uuid_string")]
    #[schema(value_type = String, format = Uuid)]
    pub id: Uuid,
    /// Display identifier, assigned once at creation
    pub item_id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Soft-delete flag, `"true"` or `"false"` on the wire
    #[serde(with = "disabled_flag")]
    #[schema(value_type = String, example = "false")]
    pub disabled: bool,
    #[serde(with = "timestamp_millis")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub stock: i64,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
}

/// Partial payload for updating a product.
///
/// Absent (or `null`) fields are left untouched. There is no `itemId`
/// field, so the display identifier cannot be changed through an update.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[validate(range(min = 0))]
    pub stock: Option<i64>,
    #[validate(length(max = 100))]
    pub brand: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
}

impl Product {
    /// Build a new, enabled product from a validated payload
    pub fn new(input: CreateProduct, item_id: ItemId) -> Self {
        Self {
            id: Uuid::now_v7(),
            item_id,
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            stock: input.stock,
            brand: input.brand,
            image_url: input.image_url,
            disabled: false,
            // Stored with millisecond precision; truncate so the returned value matches.
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Shallow merge: each present field overwrites the stored one.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(brand) = update.brand {
            self.brand = Some(brand);
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
    }
}
