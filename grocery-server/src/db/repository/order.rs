//! Order Repository
//!
//! Orders are never physically deleted; the admin surface hides them.

use std::fmt::Write as _;

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::Order;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const ORDER_TABLE: &str = "order";

/// Error marker thrown from inside the placement transaction
const STOCK_CONFLICT_MARKER: &str = "stock_conflict:";

/// One stock decrement inside a placement transaction
#[derive(Debug, Clone)]
pub struct StockReservation {
    pub product: RecordId,
    pub quantity: f64,
}

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Fresh order id, generated before insertion
    pub fn next_id() -> RecordId {
        RecordId::from_table_key(ORDER_TABLE, uuid::Uuid::new_v4().simple().to_string())
    }

    /// Insert an order under a known id
    pub async fn create(&self, id: RecordId, order: Order) -> RepoResult<Order> {
        let order = Order { id: None, ..order };
        let created: Option<Order> = self.base.db().create(id).content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Decrement every line's stock and insert the order, all or nothing
    ///
    /// A line whose product no longer covers its quantity aborts the whole
    /// transaction with [`RepoError::StockConflict`] carrying the line index.
    pub async fn create_with_stock_reservation(
        &self,
        id: RecordId,
        order: Order,
        reservations: &[StockReservation],
    ) -> RepoResult<Order> {
        let mut sql = String::from("BEGIN TRANSACTION;\n");
        for i in 0..reservations.len() {
            let _ = writeln!(
                sql,
                "LET $res{i} = (UPDATE $product{i} SET stock = math::fixed(stock - $qty{i}, 3) WHERE stock >= $qty{i} RETURN AFTER);\n\
                 IF array::len($res{i}) = 0 {{ THROW \"{STOCK_CONFLICT_MARKER}{i}\" }};"
            );
        }
        sql.push_str("CREATE $order_id CONTENT $order_doc;\nCOMMIT TRANSACTION;");

        let order = Order { id: None, ..order };
        let mut query = self
            .base
            .db()
            .query(sql)
            .bind(("order_id", id.clone()))
            .bind(("order_doc", order));
        for (i, reservation) in reservations.iter().enumerate() {
            query = query
                .bind((format!("product{i}"), reservation.product.clone()))
                .bind((format!("qty{i}"), reservation.quantity));
        }

        let mut response = query.await?;
        let errors = response.take_errors();
        if !errors.is_empty() {
            let messages: Vec<String> = errors.values().map(|e| e.to_string()).collect();
            if let Some(index) = messages.iter().find_map(|m| conflict_index(m)) {
                return Err(RepoError::StockConflict(index));
            }
            return Err(RepoError::Database(messages.join("; ")));
        }

        let created: Option<Order> = self.base.db().select(id).await?;
        created.ok_or_else(|| RepoError::Database("Order missing after commit".to_string()))
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let thing = parse_record_id(ORDER_TABLE, id)?;
        let order: Option<Order> = self.base.db().select(thing).await?;
        Ok(order)
    }

    /// Orders not hidden, newest first
    pub async fn find_visible(&self, limit: usize) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM order WHERE is_hidden != true ORDER BY created_at DESC LIMIT $limit")
            .bind(("limit", limit))
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Soft delete
    pub async fn hide(&self, id: &str) -> RepoResult<()> {
        let thing = self.existing(id).await?;
        self.base
            .db()
            .query("UPDATE $thing SET is_hidden = true")
            .bind(("thing", thing))
            .await?
            .check()?;
        Ok(())
    }

    /// Overwrite the status string
    pub async fn set_status(&self, id: &str, status: String) -> RepoResult<()> {
        let thing = self.existing(id).await?;
        self.base
            .db()
            .query("UPDATE $thing SET status = $status")
            .bind(("thing", thing))
            .bind(("status", status))
            .await?
            .check()?;
        Ok(())
    }

    /// Compensation for a failed placement: cancel and hide in one write
    pub async fn mark_cancelled_hidden(&self, thing: &RecordId, status: &str) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET status = $status, is_hidden = true")
            .bind(("thing", thing.clone()))
            .bind(("status", status.to_string()))
            .await?
            .check()?;
        Ok(())
    }

    /// All orders, hidden included
    pub async fn count_all(&self) -> RepoResult<u64> {
        self.base.count(ORDER_TABLE, None, Vec::new()).await
    }

    pub async fn count_by_status(&self, status: &str) -> RepoResult<u64> {
        self.base
            .count(
                ORDER_TABLE,
                Some("status = $status"),
                vec![("status", status.to_string())],
            )
            .await
    }

    /// `total_amount` of every order in `status`
    pub async fn amounts_by_status(&self, status: &str) -> RepoResult<Vec<f64>> {
        let amounts: Vec<f64> = self
            .base
            .db()
            .query("SELECT VALUE total_amount FROM order WHERE status = $status")
            .bind(("status", status.to_string()))
            .await?
            .take(0)?;
        Ok(amounts)
    }

    async fn existing(&self, id: &str) -> RepoResult<RecordId> {
        let thing = parse_record_id(ORDER_TABLE, id)?;
        let found: Option<Order> = self.base.db().select(thing.clone()).await?;
        if found.is_none() {
            return Err(RepoError::NotFound(format!("Order {} not found", id)));
        }
        Ok(thing)
    }
}

/// Line index encoded in a thrown conflict marker
fn conflict_index(message: &str) -> Option<usize> {
    let start = message.find(STOCK_CONFLICT_MARKER)? + STOCK_CONFLICT_MARKER.len();
    let digits: String = message[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
