//! Order API Handlers

use axum::{Json, extract::State};
use shared::models::{Order, OrderCreate};

use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/orders - place an order
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    let order = state.order_placement().place_order(payload).await?;
    Ok(Json(order))
}

/// GET /api/orders - visible orders, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = state.admin().list_orders().await?;
    Ok(Json(orders))
}
