//! Product API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::models::{ProductQuery, ProductView};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/products?category_id=&search=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ProductQuery>,
) -> AppResult<Json<Vec<ProductView>>> {
    let products = state.catalog().list_products(query).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ProductView>> {
    let product = state.catalog().get_product(&id).await?;
    Ok(Json(product))
}
