//! Customer account Handlers

use axum::{Json, extract::State};
use shared::models::{LoginRequest, LoginResponse, RegisterRequest, ResendCodeRequest, VerifyRequest};
use shared::response::MessageResponse;

use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/register
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<Json<MessageResponse>> {
    Ok(Json(state.auth().register(payload).await?))
}

/// POST /api/verify
pub async fn verify(
    State(state): State<ServerState>,
    Json(payload): Json<VerifyRequest>,
) -> AppResult<Json<MessageResponse>> {
    Ok(Json(state.auth().verify(payload).await?))
}

/// POST /api/resend-code
pub async fn resend_code(
    State(state): State<ServerState>,
    Json(payload): Json<ResendCodeRequest>,
) -> AppResult<Json<MessageResponse>> {
    Ok(Json(state.auth().resend_code(payload).await?))
}

/// POST /api/login
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    Ok(Json(state.auth().login(payload).await?))
}
