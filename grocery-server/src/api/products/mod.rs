//! Product API (public catalog)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/products", get(handler::list))
        .route("/api/products/{id}", get(handler::get_by_id))
}
