//! Category Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::Category;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const CATEGORY_TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find categories, at most `limit`
    pub async fn find_all(&self, limit: usize) -> RepoResult<Vec<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category LIMIT $limit")
            .bind(("limit", limit))
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Find category by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Category>> {
        let thing = parse_record_id(CATEGORY_TABLE, id)?;
        let category: Option<Category> = self.base.db().select(thing).await?;
        Ok(category)
    }

    /// Find category by exact name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM category WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let categories: Vec<Category> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    /// Create a new category
    pub async fn create(&self, name: String, image: Option<String>) -> RepoResult<Category> {
        let category = Category {
            id: None,
            name,
            image,
        };
        let created: Option<Category> = self
            .base
            .db()
            .create(CATEGORY_TABLE)
            .content(category)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    pub async fn count(&self) -> RepoResult<u64> {
        self.base.count(CATEGORY_TABLE, None, Vec::new()).await
    }
}
