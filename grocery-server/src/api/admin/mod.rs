//! Admin API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/admin/login | POST | Admin credential check |
//! | /api/admin/products | POST | Create product |
//! | /api/admin/products/{id} | PUT | Replace product |
//! | /api/admin/products/{id} | DELETE | Delete product |
//! | /api/admin/orders/{id} | PATCH | Set order status |
//! | /api/admin/orders/{id} | DELETE | Hide order |
//! | /api/admin/stats | GET | Dashboard figures |
//! | /api/seed | POST | Load the demo catalog |

mod handler;

use axum::{
    Router,
    routing::{get, patch, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/login", post(handler::login))
        .route("/api/admin/products", post(handler::create_product))
        .route(
            "/api/admin/products/{id}",
            put(handler::update_product).delete(handler::delete_product),
        )
        .route(
            "/api/admin/orders/{id}",
            patch(handler::update_order_status).delete(handler::hide_order),
        )
        .route("/api/admin/stats", get(handler::stats))
        .route("/api/seed", post(handler::seed))
}
