//! Repository Module
//!
//! One repository per table, each built from the shared `Surreal<Db>` handle.

pub mod admin;
pub mod category;
pub mod customer;
pub mod order;
pub mod product;

// Re-exports
pub use admin::AdminRepository;
pub use category::CategoryRepository;
pub use customer::CustomerRepository;
pub use order::{OrderRepository, StockReservation};
pub use product::{ProductFilter, ProductRepository};

use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// A conditional stock decrement matched nothing; carries the line index
    #[error("Stock conflict on line {0}")]
    StockConflict(usize),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let message = err.to_string();
        if message.contains("already contains") {
            RepoError::Duplicate(message)
        } else {
            RepoError::Database(message)
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::Database(msg) => AppError::database(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::InvalidId(id) => AppError::invalid_id(id),
            RepoError::StockConflict(index) => {
                AppError::insufficient_stock(format!("Stock changed for line {}", index + 1))
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: every ID is "table:key"
// =============================================================================
//
//   - parse:      parse_record_id("product", "product:abc")?
//   - create:     RecordId::from_table_key("order", key)
//   - to string:  id.to_string()
//   - CRUD:       db.select(id) / db.delete(id) take the RecordId directly

/// Parse a `table:key` string and check that it names `table`
pub fn parse_record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    let thing: RecordId = id
        .parse()
        .map_err(|_| RepoError::InvalidId(id.to_string()))?;
    if thing.table() != table {
        return Err(RepoError::InvalidId(id.to_string()));
    }
    Ok(thing)
}

/// Row shape for `SELECT count() ... GROUP ALL`
#[derive(Debug, Deserialize)]
struct CountRow {
    count: u64,
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Count rows of a table, optionally filtered by a WHERE clause
    ///
    /// `filter` is a trusted SurrealQL fragment; values go through `bindings`.
    pub async fn count(
        &self,
        table: &str,
        filter: Option<&str>,
        bindings: Vec<(&'static str, String)>,
    ) -> RepoResult<u64> {
        let sql = match filter {
            Some(filter) => format!("SELECT count() AS count FROM {table} WHERE {filter} GROUP ALL"),
            None => format!("SELECT count() AS count FROM {table} GROUP ALL"),
        };
        let mut query = self.db.query(sql);
        for binding in bindings {
            query = query.bind(binding);
        }
        let rows: Vec<CountRow> = query.await?.take(0)?;
        Ok(rows.first().map(|r| r.count).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_record_id_checks_table() {
        let id = parse_record_id("product", "product:domates").unwrap();
        assert_eq!(id.table(), "product");

        assert!(matches!(
            parse_record_id("product", "order:domates"),
            Err(RepoError::InvalidId(_))
        ));
        assert!(matches!(
            parse_record_id("product", "garbage"),
            Err(RepoError::InvalidId(_))
        ));
        assert!(matches!(
            parse_record_id("product", ""),
            Err(RepoError::InvalidId(_))
        ));
    }

    #[test]
    fn repo_errors_map_to_app_errors() {
        let err: AppError = RepoError::InvalidId("x".into()).into();
        assert_eq!(err.code, ErrorCode::InvalidId);

        let err: AppError = RepoError::Duplicate("email".into()).into();
        assert_eq!(err.code, ErrorCode::AlreadyExists);

        let err: AppError = RepoError::Database("boom".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);

        let err: AppError = RepoError::StockConflict(0).into();
        assert_eq!(err.code, ErrorCode::InsufficientStock);
    }
}
