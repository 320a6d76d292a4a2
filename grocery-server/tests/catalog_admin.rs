//! Catalog browsing and admin operations over HTTP

mod common;

use common::{TestApp, order_for};
use grocery_server::OrderPlacementMode;
use http::StatusCode;
use serde_json::json;

async fn app() -> TestApp {
    TestApp::new(OrderPlacementMode::Transactional).await
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app().await;
    let (status, body) = app.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn create_then_get_round_trip() {
    let app = app().await;
    let sebze = app.category("Sebzeler").await;

    let (status, created) = app
        .post(
            "/api/admin/products",
            json!({
                "name": "Patates",
                "category_id": sebze,
                "price": 15.0,
                "unit_type": "KG",
                "stock": 200,
                "description": "Kızartmalık sarı patates",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{created}");
    assert_eq!(created["category_name"], "Sebzeler");

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = app.get(&format!("/api/products/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["description"], "Kızartmalık sarı patates");
}

#[tokio::test]
async fn get_product_invalid_and_missing() {
    let app = app().await;
    let (status, body) = app.get("/api/products/not-an-id").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 9);

    let (status, _) = app.get("/api/products/order:abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app.get("/api/products/product:doesnotexist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn search_and_category_filters() {
    let app = app().await;
    let sebze = app.category("Sebzeler").await;
    let meyve = app.category("Meyveler").await;
    app.product("Domates", &sebze, 25.0, 100.0).await;
    app.product("Patates", &sebze, 15.0, 200.0).await;
    app.product("Elma", &meyve, 30.0, 50.0).await;
    app.product("Su", "", 5.0, 10.0).await;

    let (_, all) = app.get("/api/products").await;
    assert_eq!(all.as_array().unwrap().len(), 4);

    let (_, found) = app.get("/api/products?search=DOM").await;
    let found = found.as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Domates");

    let (_, found) = app.get(&format!("/api/products?category_id={sebze}")).await;
    let mut names: Vec<_> = found
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    assert_eq!(names, ["Domates", "Patates"]);

    let (_, found) = app
        .get(&format!("/api/products?category_id={meyve}&search=ates"))
        .await;
    assert!(found.as_array().unwrap().is_empty());

    let (_, found) = app.get("/api/products?search=su").await;
    assert_eq!(found[0]["category_name"], "General");

    let (_, categories) = app.get("/api/categories").await;
    assert_eq!(categories.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn update_and_delete_products() {
    let app = app().await;
    let id = app.product("Marul", "", 10.0, 70.0).await;

    let (status, updated) = app
        .request(
            "PUT",
            &format!("/api/admin/products/{id}"),
            Some(json!({ "name": "Kıvırcık", "price": 12.0, "unit_type": "ADET", "stock": 65 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["name"], "Kıvırcık");
    assert_eq!(app.stock_of(&id).await, 65.0);

    let (status, _) = app
        .request(
            "PUT",
            "/api/admin/products/product:ghost",
            Some(json!({ "name": "X", "price": 1.0, "unit_type": "KG", "stock": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .request(
            "POST",
            "/api/admin/products",
            Some(json!({ "name": "X", "price": 1.0, "unit_type": "KG", "stock": -1 })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app.request("DELETE", &format!("/api/admin/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "Deleted" }));

    let (status, _) = app.request("DELETE", &format!("/api/admin/products/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn hidden_orders_leave_listing_but_count_in_stats() {
    let app = app().await;
    let elma = app.product("Elma", "", 30.0, 50.0).await;

    let (_, first) = app.post("/api/orders", order_for(&elma, "Elma", 1.0, 30.0)).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let (_, second) = app.post("/api/orders", order_for(&elma, "Elma", 2.0, 30.0)).await;

    let (_, listed) = app.get("/api/orders").await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["id"], second["id"]);

    let first_id = first["id"].as_str().unwrap();
    let (status, body) = app
        .request("DELETE", &format!("/api/admin/orders/{first_id}"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hidden");

    let (_, listed) = app.get("/api/orders").await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], second["id"]);
    assert_eq!(app.stats().await["total_orders"], 2);

    let (status, _) = app.request("DELETE", "/api/admin/orders/order:ghost", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn revenue_follows_delivered_status() {
    let app = app().await;
    let muz = app.product("Muz", "", 55.0, 120.0).await;

    let (_, a) = app.post("/api/orders", order_for(&muz, "Muz", 1.5, 55.0)).await;
    let (_, b) = app.post("/api/orders", order_for(&muz, "Muz", 2.0, 55.0)).await;
    let a_id = a["id"].as_str().unwrap();
    let b_id = b["id"].as_str().unwrap();

    let stats = app.stats().await;
    assert_eq!(stats["total_revenue"], 0.0);
    assert_eq!(stats["pending_orders"], 2);
    assert_eq!(stats["total_products"], 1);

    for id in [a_id, b_id] {
        let (status, body) = app
            .request(
                "PATCH",
                &format!("/api/admin/orders/{id}"),
                Some(json!({ "status": "Delivered" })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Updated");
    }
    let stats = app.stats().await;
    assert_eq!(stats["total_revenue"], 192.5);
    assert_eq!(stats["pending_orders"], 0);

    // hidden delivered orders still count as revenue
    app.request("DELETE", &format!("/api/admin/orders/{b_id}"), None).await;
    assert_eq!(app.stats().await["total_revenue"], 192.5);

    app.request(
        "PATCH",
        &format!("/api/admin/orders/{a_id}"),
        Some(json!({ "status": "Preparing" })),
    )
    .await;
    assert_eq!(app.stats().await["total_revenue"], 110.0);

    let (status, body) = app
        .request(
            "PATCH",
            &format!("/api/admin/orders/{a_id}"),
            Some(json!({ "status": "" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4005);
}

#[tokio::test]
async fn seed_and_admin_login() {
    let app = app().await;
    let (status, seeded) = app.post("/api/seed", json!({})).await;
    assert_eq!(status, StatusCode::OK, "{seeded}");
    assert_eq!(seeded["admin"], "admin");

    app.post("/api/seed", json!({})).await;
    let (_, products) = app.get("/api/products").await;
    assert_eq!(products.as_array().unwrap().len(), 13);
    let (_, categories) = app.get("/api/categories").await;
    assert_eq!(categories.as_array().unwrap().len(), 3);

    let (_, domates) = app.get("/api/products?search=domates").await;
    assert_eq!(domates[0]["category_name"], "Sebzeler");
    assert_eq!(domates[0]["stock"], 100.0);

    let (status, body) = app
        .post("/api/admin/login", json!({ "username": "admin", "password": "admin123" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["username"], "admin");

    let (wrong_status, wrong) = app
        .post("/api/admin/login", json!({ "username": "admin", "password": "nope" }))
        .await;
    let (unknown_status, unknown) = app
        .post("/api/admin/login", json!({ "username": "root", "password": "admin123" }))
        .await;
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong["message"], unknown["message"]);
}
