//! Database Module
//!
//! Embedded SurrealDB: on-disk RocksDB for deployments, in-memory for tests.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::core::ServerError;

const NAMESPACE: &str = "grocery";
const DATABASE: &str = "storefront";

/// Tables and indexes; every statement is idempotent
///
/// `order` carries no index on `created_at`: the embedded engine drops rows
/// when an indexed WHERE is combined with `ORDER BY .. DESC LIMIT`.
const SCHEMA: &str = r#"
    DEFINE TABLE IF NOT EXISTS category SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS product SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS product_category ON TABLE product FIELDS category_id;
    DEFINE TABLE IF NOT EXISTS order SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS customer SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS customer_email ON TABLE customer FIELDS email UNIQUE;
    DEFINE TABLE IF NOT EXISTS admin SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS admin_username ON TABLE admin FIELDS username UNIQUE;
"#;

/// Database service - owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) an on-disk database
    pub async fn new(db_path: &str) -> Result<Self, ServerError> {
        let db = Surreal::new::<RocksDb>(db_path).await?;
        tracing::info!(path = %db_path, "Database opened (RocksDB)");
        Self::prepare(db).await
    }

    /// Open an in-memory database
    pub async fn memory() -> Result<Self, ServerError> {
        let db = Surreal::new::<Mem>(()).await?;
        tracing::debug!("Database opened (in-memory)");
        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, ServerError> {
        db.use_ns(NAMESPACE).use_db(DATABASE).await?;
        db.query(SCHEMA).await?.check()?;
        Ok(Self { db })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_database_accepts_schema_twice() {
        let service = DbService::memory().await.unwrap();
        service.db.query(SCHEMA).await.unwrap().check().unwrap();
    }

    #[tokio::test]
    async fn rocksdb_database_opens_in_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grocery.db");
        let service = DbService::new(&path.to_string_lossy()).await.unwrap();
        let mut response = service.db.query("RETURN 1").await.unwrap();
        let one: Option<i64> = response.take(0).unwrap();
        assert_eq!(one, Some(1));
    }
}
