//! Health check
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/health | GET | Liveness probe |

use axum::{Json, Router, routing::get};
use shared::response::HealthResponse;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
