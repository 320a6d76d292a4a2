//! Product Repository

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::Product;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const PRODUCT_TABLE: &str = "product";

/// Optional listing filters; `None` means unfiltered
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Exact `category_id` match
    pub category_id: Option<String>,
    /// Case-insensitive substring of `name`
    pub search: Option<String>,
}

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find products matching `filter`, at most `limit`
    pub async fn find_filtered(&self, filter: ProductFilter, limit: usize) -> RepoResult<Vec<Product>> {
        let mut conditions = Vec::new();
        if filter.category_id.is_some() {
            conditions.push("category_id = $category_id");
        }
        if filter.search.is_some() {
            conditions.push("string::contains(string::lowercase(name), $search)");
        }

        let sql = if conditions.is_empty() {
            "SELECT * FROM product LIMIT $limit".to_string()
        } else {
            format!(
                "SELECT * FROM product WHERE {} LIMIT $limit",
                conditions.join(" AND ")
            )
        };

        let mut query = self.base.db().query(sql).bind(("limit", limit));
        if let Some(category_id) = filter.category_id {
            query = query.bind(("category_id", category_id));
        }
        if let Some(search) = filter.search {
            query = query.bind(("search", search.to_lowercase()));
        }

        let products: Vec<Product> = query.await?.take(0)?;
        Ok(products)
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let thing = parse_record_id(PRODUCT_TABLE, id)?;
        self.find_by_record(&thing).await
    }

    pub async fn find_by_record(&self, thing: &RecordId) -> RepoResult<Option<Product>> {
        let product: Option<Product> = self.base.db().select(thing.clone()).await?;
        Ok(product)
    }

    /// Create a new product
    pub async fn create(&self, product: Product) -> RepoResult<Product> {
        let product = Product { id: None, ..product };
        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Replace every field of an existing product
    pub async fn replace(&self, id: &str, data: Product) -> RepoResult<Product> {
        let thing = parse_record_id(PRODUCT_TABLE, id)?;
        if self.find_by_record(&thing).await?.is_none() {
            return Err(RepoError::NotFound(format!("Product {} not found", id)));
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name,
                    category_id = $category_id,
                    price = $price,
                    unit_type = $unit_type,
                    stock = $stock,
                    image = $image,
                    description = $description
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("name", data.name))
            .bind(("category_id", data.category_id))
            .bind(("price", data.price))
            .bind(("unit_type", data.unit_type))
            .bind(("stock", data.stock))
            .bind(("image", data.image))
            .bind(("description", data.description))
            .await?;

        result
            .take::<Vec<Product>>(0)?
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete a product
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing = parse_record_id(PRODUCT_TABLE, id)?;
        let deleted: Option<Product> = self.base.db().delete(thing).await?;
        Ok(deleted.is_some())
    }

    pub async fn count(&self) -> RepoResult<u64> {
        self.base.count(PRODUCT_TABLE, None, Vec::new()).await
    }

    /// Decrement stock only if it covers `quantity`
    ///
    /// Returns `false` when the product is missing or short; nothing is written then.
    pub async fn decrement_stock_if_available(
        &self,
        thing: &RecordId,
        quantity: f64,
    ) -> RepoResult<bool> {
        let updated: Vec<Product> = self
            .base
            .db()
            .query(
                "UPDATE $thing SET stock = math::fixed(stock - $qty, 3) WHERE stock >= $qty RETURN AFTER",
            )
            .bind(("thing", thing.clone()))
            .bind(("qty", quantity))
            .await?
            .take(0)?;
        Ok(!updated.is_empty())
    }

    /// Give back a previously applied decrement
    pub async fn restore_stock(&self, thing: &RecordId, quantity: f64) -> RepoResult<()> {
        let updated: Vec<Product> = self
            .base
            .db()
            .query("UPDATE $thing SET stock = math::fixed(stock + $qty, 3) RETURN AFTER")
            .bind(("thing", thing.clone()))
            .bind(("qty", quantity))
            .await?
            .take(0)?;
        if updated.is_empty() {
            return Err(RepoError::NotFound(format!("Product {} not found", thing)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn product(name: &str, category_id: &str, stock: f64) -> Product {
        Product {
            id: None,
            name: name.to_string(),
            category_id: category_id.to_string(),
            price: 10.0,
            unit_type: "KG".to_string(),
            stock,
            image: None,
            description: None,
        }
    }

    async fn repo() -> ProductRepository {
        let db = DbService::memory().await.unwrap().db;
        ProductRepository::new(db)
    }

    #[tokio::test]
    async fn conditional_decrement_never_goes_negative() {
        let repo = repo().await;
        let created = repo.create(product("Domates", "", 3.0)).await.unwrap();
        let id = created.id.unwrap();

        assert!(repo.decrement_stock_if_available(&id, 2.5).await.unwrap());
        assert!(!repo.decrement_stock_if_available(&id, 1.0).await.unwrap());

        let after = repo.find_by_record(&id).await.unwrap().unwrap();
        assert_eq!(after.stock, 0.5);
    }

    #[tokio::test]
    async fn restore_adds_back() {
        let repo = repo().await;
        let id = repo.create(product("Elma", "", 1.0)).await.unwrap().id.unwrap();
        assert!(repo.decrement_stock_if_available(&id, 0.1).await.unwrap());
        repo.restore_stock(&id, 0.1).await.unwrap();
        let after = repo.find_by_record(&id).await.unwrap().unwrap();
        assert_eq!(after.stock, 1.0);
    }

    #[tokio::test]
    async fn decrement_on_missing_product_is_false() {
        let repo = repo().await;
        let ghost = RecordId::from_table_key("product", "ghost");
        assert!(!repo.decrement_stock_if_available(&ghost, 1.0).await.unwrap());
        assert!(repo.find_by_record(&ghost).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn filters_by_category_and_search() {
        let repo = repo().await;
        repo.create(product("Domates", "category:sebze", 1.0)).await.unwrap();
        repo.create(product("Cherry DOMATES", "category:salata", 1.0)).await.unwrap();
        repo.create(product("Elma", "category:meyve", 1.0)).await.unwrap();

        let found = repo
            .find_filtered(
                ProductFilter {
                    search: Some("domates".into()),
                    ..Default::default()
                },
                1000,
            )
            .await
            .unwrap();
        assert_eq!(found.len(), 2);

        let found = repo
            .find_filtered(
                ProductFilter {
                    category_id: Some("category:sebze".into()),
                    search: Some("DOM".into()),
                },
                1000,
            )
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Domates");

        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn replace_missing_is_not_found() {
        let repo = repo().await;
        let err = repo
            .replace("product:nope", product("X", "", 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
