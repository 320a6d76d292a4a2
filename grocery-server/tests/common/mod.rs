//! Shared helpers for the HTTP-level tests
//!
//! Each test gets its own in-memory database and drives the full router
//! in-process with `oneshot`.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use grocery_server::db::DbService;
use grocery_server::services::RecordingMailer;
use grocery_server::{Config, OrderPlacementMode, ServerState, api};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    pub async fn new(mode: OrderPlacementMode) -> Self {
        grocery_server::init_logger();
        let config = Config::in_memory().with_placement_mode(mode);
        let db = DbService::memory().await.expect("in-memory database").db;
        let mailer = Arc::new(RecordingMailer::new());
        let state = ServerState::new(config, db, mailer.clone());
        Self {
            router: api::build_app(state.clone()),
            state,
            mailer,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send(self.router.clone(), method, uri, body).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    /// Create a category and return its id
    pub async fn category(&self, name: &str) -> String {
        let (status, body) = self
            .post("/api/admin/categories", json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_str().expect("category id").to_string()
    }

    /// Create a product and return its id
    pub async fn product(&self, name: &str, category_id: &str, price: f64, stock: f64) -> String {
        let (status, body) = self
            .post(
                "/api/admin/products",
                json!({
                    "name": name,
                    "category_id": category_id,
                    "price": price,
                    "unit_type": "KG",
                    "stock": stock,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["id"].as_str().expect("product id").to_string()
    }

    pub async fn stock_of(&self, product_id: &str) -> f64 {
        let (status, body) = self.get(&format!("/api/products/{product_id}")).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["stock"].as_f64().expect("stock")
    }

    pub async fn stats(&self) -> Value {
        let (status, body) = self.get("/api/admin/stats").await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body
    }

    /// Wait for the spawned mail task to deliver a code
    pub async fn code_for(&self, email: &str) -> String {
        for _ in 0..200 {
            if let Some(code) = self.mailer.last_code_for(email) {
                return code;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("no verification code sent to {email}");
    }
}

pub async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = router.oneshot(request).await.expect("infallible router");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("response body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

/// Order payload for a single line
pub fn order_for(product_id: &str, name: &str, quantity: f64, price: f64) -> Value {
    json!({
        "customer_name": "Ayşe Yılmaz",
        "customer_phone": "05551234567",
        "delivery_address": "Moda Cad. 12, Kadıköy",
        "customer_note": null,
        "items": [{
            "product_id": product_id,
            "product_name": name,
            "product_image": null,
            "quantity": quantity,
            "price": price,
            "unit_type": "KG",
        }],
        "total_amount": quantity * price,
    })
}
