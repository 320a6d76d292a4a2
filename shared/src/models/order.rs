//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known order status strings
///
/// The status field stays an open string; these are the values the
/// server itself writes or matches on.
pub mod order_status {
    pub const PENDING: &str = "Pending";
    pub const PREPARING: &str = "Preparing";
    pub const DELIVERED: &str = "Delivered";
    pub const CANCELLED: &str = "Cancelled";
}

/// Line item snapshot, captured when the order is placed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub product_image: Option<String>,
    pub quantity: f64,
    /// Unit price at order time
    pub price: f64,
    pub unit_type: String,
}

/// Place order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: String,
    #[serde(default)]
    pub customer_note: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub delivery_address: String,
    #[serde(default)]
    pub customer_note: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_hidden: bool,
}

/// Status change payload (`PATCH /admin/orders/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}
