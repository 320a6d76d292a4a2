//! Category API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/categories", get(handler::list))
        .route("/api/admin/categories", post(handler::create))
}
