//! Order Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::models::OrderItem;
use surrealdb::RecordId;

/// Order document
///
/// Items are embedded snapshots; they never reference the live product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: String,
    #[serde(default)]
    pub customer_note: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: String,
    /// Unix milliseconds (UTC)
    pub created_at: i64,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_hidden: bool,
}

impl From<Order> for shared::models::Order {
    fn from(o: Order) -> Self {
        Self {
            id: serde_helpers::id_to_string(&o.id),
            customer_name: o.customer_name,
            customer_phone: o.customer_phone,
            delivery_address: o.delivery_address,
            customer_note: o.customer_note,
            items: o.items,
            total_amount: o.total_amount,
            status: o.status,
            created_at: serde_helpers::millis_to_datetime(o.created_at),
            is_hidden: o.is_hidden,
        }
    }
}
