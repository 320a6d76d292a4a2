//! Product Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Product document
///
/// `category_id` is a plain `table:key` string so that a dangling or
/// malformed reference still loads; resolution happens at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub category_id: String,
    pub price: f64,
    pub unit_type: String,
    pub stock: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<Product> for shared::models::Product {
    fn from(p: Product) -> Self {
        Self {
            id: serde_helpers::id_to_string(&p.id),
            name: p.name,
            category_id: p.category_id,
            price: p.price,
            unit_type: p.unit_type,
            stock: p.stock,
            image: p.image,
            description: p.description,
        }
    }
}

impl From<shared::models::ProductCreate> for Product {
    fn from(p: shared::models::ProductCreate) -> Self {
        Self {
            id: None,
            name: p.name,
            category_id: p.category_id,
            price: p.price,
            unit_type: p.unit_type,
            stock: p.stock,
            image: p.image,
            description: p.description,
        }
    }
}
