//! Customer account API

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/register", post(handler::register))
        .route("/api/verify", post(handler::verify))
        .route("/api/resend-code", post(handler::resend_code))
        .route("/api/login", post(handler::login))
}
