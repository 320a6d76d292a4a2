//! Order Placement
//!
//! Turns a checkout payload into a persisted order while keeping every
//! product's stock non-negative.
//!
//! # Phases
//!
//! 1. Input validation (shape, lengths, ids, optional total check)
//! 2. Stock validation, items in input order; nothing is written on failure
//! 3. Commit, per [`OrderPlacementMode`]:
//!    - `Transactional`: conditional decrements and the order insert share one
//!      store transaction; any miss rolls everything back
//!    - `Saga`: order insert, then per-item conditional decrements; a miss
//!      restores applied decrements and cancels + hides the order
//!
//! A conditional decrement only applies when `stock >= quantity` at write
//! time, so concurrent placements cannot overdraw a product.

use chrono::Utc;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderCreate, order_status};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use crate::core::OrderPlacementMode;
use crate::db::models;
use crate::db::repository::{
    OrderRepository, ProductRepository, RepoError, StockReservation, parse_record_id,
};
use crate::money;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
    validate_non_negative, validate_optional_text, validate_required_text,
};

#[derive(Clone)]
pub struct OrderPlacementService {
    orders: OrderRepository,
    products: ProductRepository,
    mode: OrderPlacementMode,
    verify_total: bool,
}

impl OrderPlacementService {
    pub fn new(db: Surreal<Db>, mode: OrderPlacementMode, verify_total: bool) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            products: ProductRepository::new(db),
            mode,
            verify_total,
        }
    }

    pub fn mode(&self) -> OrderPlacementMode {
        self.mode
    }

    /// Validate, reserve stock and persist a new `Pending` order
    pub async fn place_order(&self, payload: OrderCreate) -> AppResult<Order> {
        let reservations = self.validate_input(&payload)?;
        self.validate_stock(&payload, &reservations).await?;

        let id = OrderRepository::next_id();
        let order = models::Order {
            id: None,
            customer_name: payload.customer_name,
            customer_phone: payload.customer_phone,
            delivery_address: payload.delivery_address,
            customer_note: payload.customer_note,
            items: payload.items,
            total_amount: payload.total_amount,
            status: order_status::PENDING.to_string(),
            created_at: Utc::now().timestamp_millis(),
            is_hidden: false,
        };

        let created = match self.mode {
            OrderPlacementMode::Transactional => {
                self.commit_transactional(id, order, &reservations).await?
            }
            OrderPlacementMode::Saga => self.commit_saga(id, order, &reservations).await?,
        };

        tracing::info!(
            order_id = %created.id.as_ref().map(|i| i.to_string()).unwrap_or_default(),
            items = reservations.len(),
            total = created.total_amount,
            mode = ?self.mode,
            "Order placed"
        );
        Ok(created.into())
    }

    /// Shape checks; returns one reservation per line, in input order
    ///
    /// Reserved quantities are the validated line quantities, so the stored
    /// snapshot and the stock decrement always agree.
    fn validate_input(&self, payload: &OrderCreate) -> AppResult<Vec<StockReservation>> {
        if payload.items.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::OrderEmpty,
                "Order must contain at least one item",
            ));
        }
        validate_required_text(&payload.customer_name, "customer_name", MAX_NAME_LEN)?;
        validate_required_text(&payload.customer_phone, "customer_phone", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&payload.delivery_address, "delivery_address", MAX_ADDRESS_LEN)?;
        validate_optional_text(&payload.customer_note, "customer_note", MAX_NOTE_LEN)?;
        validate_non_negative(payload.total_amount, "total_amount")?;

        let mut reservations = Vec::with_capacity(payload.items.len());
        for item in &payload.items {
            if money::checked_quantity(item.quantity).is_none() {
                return Err(AppError::validation(format!(
                    "quantity must be positive with at most {} decimal places, got {} for {}",
                    money::QUANTITY_DECIMAL_PLACES,
                    item.quantity,
                    item.product_name
                )));
            }
            validate_non_negative(item.price, "price")?;
            validate_required_text(&item.product_name, "product_name", MAX_NAME_LEN)?;
            validate_required_text(&item.unit_type, "unit_type", MAX_SHORT_TEXT_LEN)?;
            validate_optional_text(&item.product_image, "product_image", MAX_URL_LEN)?;
            reservations.push(StockReservation {
                product: parse_record_id("product", &item.product_id)?,
                quantity: item.quantity,
            });
        }

        if self.verify_total {
            let computed = money::order_total(&payload.items)
                .ok_or_else(|| AppError::validation("items total is out of range"))?;
            let client_total = money::try_to_decimal(payload.total_amount)
                .ok_or_else(|| AppError::validation("total_amount is out of range"))?;
            if !money::totals_match(client_total, computed) {
                return Err(AppError::with_message(
                    ErrorCode::OrderTotalMismatch,
                    format!(
                        "total_amount {} does not match items total {}",
                        payload.total_amount,
                        money::to_f64(computed)
                    ),
                ));
            }
        }

        Ok(reservations)
    }

    /// Every line must exist and be covered by current stock
    async fn validate_stock(
        &self,
        payload: &OrderCreate,
        reservations: &[StockReservation],
    ) -> AppResult<()> {
        for (item, reservation) in payload.items.iter().zip(reservations) {
            let product = self.products.find_by_record(&reservation.product).await?;
            check_line(&item.product_name, reservation.quantity, product)?;
        }
        Ok(())
    }

    async fn commit_transactional(
        &self,
        id: RecordId,
        order: models::Order,
        reservations: &[StockReservation],
    ) -> AppResult<models::Order> {
        match self
            .orders
            .create_with_stock_reservation(id, order.clone(), reservations)
            .await
        {
            Ok(created) => Ok(created),
            Err(RepoError::StockConflict(index)) => {
                Err(self.conflict_error(&order, reservations, index).await)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn commit_saga(
        &self,
        id: RecordId,
        order: models::Order,
        reservations: &[StockReservation],
    ) -> AppResult<models::Order> {
        let created = self.orders.create(id.clone(), order.clone()).await?;

        for (index, reservation) in reservations.iter().enumerate() {
            let failure = match self
                .products
                .decrement_stock_if_available(&reservation.product, reservation.quantity)
                .await
            {
                Ok(true) => continue,
                Ok(false) => self.conflict_error(&order, reservations, index).await,
                Err(e) => e.into(),
            };

            self.compensate(&id, &reservations[..index]).await;
            return Err(failure);
        }

        Ok(created)
    }

    /// Undo a partially applied saga
    ///
    /// Failures here leave stock or the order inconsistent; they are logged
    /// with the order id for manual repair.
    async fn compensate(&self, order_id: &RecordId, applied: &[StockReservation]) {
        for reservation in applied.iter().rev() {
            if let Err(e) = self
                .products
                .restore_stock(&reservation.product, reservation.quantity)
                .await
            {
                tracing::error!(
                    order_id = %order_id,
                    product_id = %reservation.product,
                    quantity = reservation.quantity,
                    error = %e,
                    "Failed to restore stock during order compensation"
                );
            }
        }

        if let Err(e) = self
            .orders
            .mark_cancelled_hidden(order_id, order_status::CANCELLED)
            .await
        {
            tracing::error!(
                order_id = %order_id,
                error = %e,
                "Failed to cancel order during compensation"
            );
        } else {
            tracing::warn!(order_id = %order_id, "Order cancelled after stock conflict");
        }
    }

    /// Re-read the conflicting product and describe why the line failed
    async fn conflict_error(
        &self,
        order: &models::Order,
        reservations: &[StockReservation],
        index: usize,
    ) -> AppError {
        let (Some(item), Some(reservation)) = (order.items.get(index), reservations.get(index))
        else {
            return AppError::insufficient_stock("Insufficient stock");
        };
        match self.products.find_by_record(&reservation.product).await {
            Ok(product) => match check_line(&item.product_name, reservation.quantity, product) {
                Err(e) => e,
                Ok(()) => AppError::insufficient_stock(format!("{}: stock changed", item.product_name)),
            },
            Err(e) => e.into(),
        }
    }
}

/// NotFound for a missing product, InsufficientStock when stock does not cover `quantity`
fn check_line(product_name: &str, quantity: f64, product: Option<models::Product>) -> AppResult<()> {
    let Some(product) = product else {
        return Err(AppError::with_message(
            ErrorCode::ProductNotFound,
            format!("{product_name} not found"),
        ));
    };
    if !money::covers(product.stock, quantity) {
        return Err(AppError::insufficient_stock(format!(
            "{product_name}: remaining {} {}",
            money::format_quantity(product.stock),
            product.unit_type
        )));
    }
    Ok(())
}
