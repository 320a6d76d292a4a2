//! Admin dashboard statistics

use serde::{Deserialize, Serialize};

/// Summary figures for the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Sum of `total_amount` over delivered orders
    pub total_revenue: f64,
    /// Every order, hidden ones included
    pub total_orders: u64,
    pub pending_orders: u64,
    pub total_products: u64,
}
