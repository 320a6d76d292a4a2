//! Admin Operations
//!
//! Product CRUD, order moderation, dashboard stats and admin login.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    AdminLoginRequest, AdminLoginResponse, Order, ProductCreate, ProductView, StatsResponse,
    order_status,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::CatalogService;
use crate::db::models;
use crate::db::repository::{AdminRepository, OrderRepository, ProductRepository};
use crate::money;
use crate::utils::password::{verify_missing_account, verify_password};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_non_negative,
    validate_optional_text, validate_required_text,
};

/// Upper bound for one order listing
pub const ORDER_PAGE_SIZE: usize = 1000;

#[derive(Clone)]
pub struct AdminService {
    products: ProductRepository,
    orders: OrderRepository,
    admins: AdminRepository,
    catalog: CatalogService,
}

impl AdminService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            products: ProductRepository::new(db.clone()),
            orders: OrderRepository::new(db.clone()),
            admins: AdminRepository::new(db.clone()),
            catalog: CatalogService::new(db),
        }
    }

    // ==================== Products ====================

    pub async fn create_product(&self, payload: ProductCreate) -> AppResult<ProductView> {
        validate_product(&payload)?;
        let created = self.products.create(payload.into()).await?;
        tracing::info!(name = %created.name, "Product created");
        Ok(self.catalog.view(created).await)
    }

    /// Replace every field of a product
    pub async fn update_product(&self, id: &str, payload: ProductCreate) -> AppResult<ProductView> {
        validate_product(&payload)?;
        let updated = self.products.replace(id, payload.into()).await?;
        tracing::info!(id = %id, "Product updated");
        Ok(self.catalog.view(updated).await)
    }

    pub async fn delete_product(&self, id: &str) -> AppResult<()> {
        if !self.products.delete(id).await? {
            return Err(AppError::with_message(
                ErrorCode::ProductNotFound,
                format!("Product {id} not found"),
            ));
        }
        tracing::info!(id = %id, "Product deleted");
        Ok(())
    }

    // ==================== Orders ====================

    /// Visible orders, newest first
    pub async fn list_orders(&self) -> AppResult<Vec<Order>> {
        let orders = self.orders.find_visible(ORDER_PAGE_SIZE).await?;
        Ok(orders.into_iter().map(Into::into).collect())
    }

    /// Soft delete; the document and its stats contribution remain
    pub async fn hide_order(&self, id: &str) -> AppResult<()> {
        self.orders.hide(id).await?;
        tracing::info!(id = %id, "Order hidden");
        Ok(())
    }

    /// Overwrite the status; any non-empty string is accepted
    pub async fn set_order_status(&self, id: &str, status: &str) -> AppResult<()> {
        let status = status.trim();
        if status.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::InvalidOrderStatus,
                "status must not be empty",
            ));
        }
        validate_required_text(status, "status", MAX_SHORT_TEXT_LEN)?;
        self.orders.set_status(id, status.to_string()).await?;
        tracing::info!(id = %id, status = %status, "Order status updated");
        Ok(())
    }

    // ==================== Stats ====================

    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let (delivered, total_orders, pending_orders, total_products) = futures::try_join!(
            self.orders.amounts_by_status(order_status::DELIVERED),
            self.orders.count_all(),
            self.orders.count_by_status(order_status::PENDING),
            self.products.count(),
        )?;
        Ok(StatsResponse {
            total_revenue: money::sum_amounts(&delivered),
            total_orders,
            pending_orders,
            total_products,
        })
    }

    // ==================== Login ====================

    /// Unknown user and wrong password fail identically
    pub async fn admin_login(&self, request: AdminLoginRequest) -> AppResult<AdminLoginResponse> {
        let admin: Option<models::Admin> = self.admins.find_by_username(request.username.trim()).await?;
        let Some(admin) = admin else {
            verify_missing_account(&request.password);
            tracing::warn!(username = %request.username, "Admin login failed");
            return Err(AppError::invalid_credentials());
        };
        if !verify_password(&request.password, &admin.password_hash) {
            tracing::warn!(username = %admin.username, "Admin login failed");
            return Err(AppError::invalid_credentials());
        }

        tracing::info!(username = %admin.username, "Admin logged in");
        Ok(AdminLoginResponse {
            success: true,
            message: "Login successful".to_string(),
            username: admin.username,
        })
    }
}

fn validate_product(payload: &ProductCreate) -> Result<(), AppError> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.unit_type, "unit_type", MAX_SHORT_TEXT_LEN)?;
    validate_non_negative(payload.price, "price")?;
    validate_non_negative(payload.stock, "stock")?;
    if payload.category_id.len() > MAX_SHORT_TEXT_LEN {
        return Err(AppError::validation("category_id is too long"));
    }
    validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::utils::password::hash_password;

    fn payload(name: &str, stock: f64) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            category_id: String::new(),
            price: 25.0,
            unit_type: "KG".to_string(),
            stock,
            image: None,
            description: None,
        }
    }

    async fn service() -> (AdminService, Surreal<Db>) {
        let db = DbService::memory().await.unwrap().db;
        (AdminService::new(db.clone()), db)
    }

    #[tokio::test]
    async fn negative_stock_and_price_are_rejected() {
        let (admin, _) = service().await;
        let err = admin.create_product(payload("Domates", -1.0)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let mut bad = payload("Domates", 1.0);
        bad.price = f64::NAN;
        assert!(admin.create_product(bad).await.is_err());
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let (admin, _) = service().await;
        let created = admin.create_product(payload("Domates", 10.0)).await.unwrap();

        let mut changed = payload("Cherry Domates", 4.5);
        changed.description = Some("Küçük".into());
        let updated = admin
            .update_product(&created.product.id, changed)
            .await
            .unwrap();
        assert_eq!(updated.product.id, created.product.id);
        assert_eq!(updated.product.name, "Cherry Domates");
        assert_eq!(updated.product.stock, 4.5);
        assert_eq!(updated.category_name, shared::models::CATEGORY_NAME_GENERAL);
    }

    #[tokio::test]
    async fn delete_then_delete_again_is_not_found() {
        let (admin, _) = service().await;
        let created = admin.create_product(payload("Roka", 5.0)).await.unwrap();
        admin.delete_product(&created.product.id).await.unwrap();
        let err = admin.delete_product(&created.product.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);

        let err = admin.delete_product("roka").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidId);
    }

    #[tokio::test]
    async fn empty_status_is_rejected() {
        let (admin, _) = service().await;
        let err = admin.set_order_status("order:x", " ").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidOrderStatus);
    }

    #[tokio::test]
    async fn stats_on_empty_store_are_zero() {
        let (admin, _) = service().await;
        let stats = admin.get_stats().await.unwrap();
        assert_eq!(
            stats,
            StatsResponse {
                total_revenue: 0.0,
                total_orders: 0,
                pending_orders: 0,
                total_products: 0,
            }
        );
    }

    #[tokio::test]
    async fn admin_login_failures_look_the_same() {
        let (admin, db) = service().await;
        AdminRepository::new(db)
            .create("admin".into(), hash_password("admin123").unwrap())
            .await
            .unwrap();

        let ok = admin
            .admin_login(AdminLoginRequest {
                username: "admin".into(),
                password: "admin123".into(),
            })
            .await
            .unwrap();
        assert!(ok.success);
        assert_eq!(ok.username, "admin");

        let wrong_password = admin
            .admin_login(AdminLoginRequest {
                username: "admin".into(),
                password: "nope".into(),
            })
            .await
            .unwrap_err();
        let unknown_user = admin
            .admin_login(AdminLoginRequest {
                username: "ghost".into(),
                password: "admin123".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(wrong_password.code, ErrorCode::InvalidCredentials);
        assert_eq!(wrong_password.code, unknown_user.code);
        assert_eq!(wrong_password.message, unknown_user.message);
    }
}
