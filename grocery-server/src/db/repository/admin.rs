//! Admin Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Admin;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const ADMIN_TABLE: &str = "admin";

#[derive(Clone)]
pub struct AdminRepository {
    base: BaseRepository,
}

impl AdminRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Admin>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM admin WHERE username = $username LIMIT 1")
            .bind(("username", username.to_string()))
            .await?;
        let admins: Vec<Admin> = result.take(0)?;
        Ok(admins.into_iter().next())
    }

    pub async fn create(&self, username: String, password_hash: String) -> RepoResult<Admin> {
        let admin = Admin {
            id: None,
            username,
            password_hash,
        };
        let created: Option<Admin> = self
            .base
            .db()
            .create(ADMIN_TABLE)
            .content(admin)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create admin".to_string()))
    }

    pub async fn count(&self) -> RepoResult<u64> {
        self.base.count(ADMIN_TABLE, None, Vec::new()).await
    }
}
