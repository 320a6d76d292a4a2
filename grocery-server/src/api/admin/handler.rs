//! Admin API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{
    AdminLoginRequest, AdminLoginResponse, OrderStatusUpdate, ProductCreate, ProductView,
    StatsResponse,
};
use shared::response::{SeedResponse, SuccessResponse};

use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/admin/login
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<AdminLoginRequest>,
) -> AppResult<Json<AdminLoginResponse>> {
    let response = state.admin().admin_login(payload).await?;
    Ok(Json(response))
}

/// POST /api/admin/products
pub async fn create_product(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<ProductView>> {
    let product = state.admin().create_product(payload).await?;
    Ok(Json(product))
}

/// PUT /api/admin/products/{id}
pub async fn update_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<ProductView>> {
    let product = state.admin().update_product(&id, payload).await?;
    Ok(Json(product))
}

/// DELETE /api/admin/products/{id}
pub async fn delete_product(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.admin().delete_product(&id).await?;
    Ok(Json(SuccessResponse::ok("Deleted")))
}

/// PATCH /api/admin/orders/{id}
pub async fn update_order_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<SuccessResponse>> {
    state.admin().set_order_status(&id, &payload.status).await?;
    Ok(Json(SuccessResponse::ok("Updated")))
}

/// DELETE /api/admin/orders/{id} - soft delete
pub async fn hide_order(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    state.admin().hide_order(&id).await?;
    Ok(Json(SuccessResponse::ok("Hidden")))
}

/// GET /api/admin/stats
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<StatsResponse>> {
    let stats = state.admin().get_stats().await?;
    Ok(Json(stats))
}

/// POST /api/seed
pub async fn seed(State(state): State<ServerState>) -> AppResult<Json<SeedResponse>> {
    let response = state.seed().seed().await?;
    Ok(Json(response))
}
