//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`categories`] - category listing and creation
//! - [`products`] - catalog browsing
//! - [`orders`] - checkout and order listing
//! - [`admin`] - product CRUD, order moderation, stats, login, seeding
//! - [`auth`] - customer registration, verification and login
//!
//! Every route lives under `/api`.

pub mod admin;
pub mod auth;
pub mod categories;
pub mod health;
pub mod orders;
pub mod products;

use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub use shared::error::{AppError, AppResult};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(admin::router())
        .merge(auth::router())
}

/// Build the fully configured application
///
/// Used by both the HTTP server and in-process tests.
pub fn build_app(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    build_router()
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        // Request tracing, outermost
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
