//! Category API Handlers

use axum::{Json, extract::State};
use shared::models::{Category, CategoryCreate};

use crate::core::ServerState;
use crate::utils::AppResult;

/// GET /api/categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.catalog().list_categories().await?;
    Ok(Json(categories))
}

/// POST /api/admin/categories
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    let category = state.catalog().create_category(payload).await?;
    Ok(Json(category))
}
