//! Catalog Service
//!
//! Read side of categories and products. Every product leaving this service
//! carries a resolved `category_name`.

use std::collections::HashMap;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    CATEGORY_NAME_GENERAL, CATEGORY_NAME_UNKNOWN, Category, CategoryCreate, ProductQuery,
    ProductView,
};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models;
use crate::db::repository::{
    CategoryRepository, ProductFilter, ProductRepository, RepoError, parse_record_id,
};
use crate::utils::validation::{MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text};

/// Upper bound for one category listing
pub const CATEGORY_PAGE_SIZE: usize = 100;
/// Upper bound for one product listing
pub const PRODUCT_PAGE_SIZE: usize = 1000;

#[derive(Clone)]
pub struct CatalogService {
    categories: CategoryRepository,
    products: ProductRepository,
}

impl CatalogService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            categories: CategoryRepository::new(db.clone()),
            products: ProductRepository::new(db),
        }
    }

    pub async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let categories = self.categories.find_all(CATEGORY_PAGE_SIZE).await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn create_category(&self, payload: CategoryCreate) -> AppResult<Category> {
        validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&payload.image, "image", MAX_URL_LEN)?;

        let created = self
            .categories
            .create(payload.name.trim().to_string(), payload.image)
            .await?;
        tracing::info!(name = %created.name, "Category created");
        Ok(created.into())
    }

    /// List products, filtered by exact category and/or name substring
    ///
    /// Empty filter strings are ignored.
    pub async fn list_products(&self, query: ProductQuery) -> AppResult<Vec<ProductView>> {
        let filter = ProductFilter {
            category_id: query.category_id.filter(|c| !c.is_empty()),
            search: query.search.filter(|s| !s.is_empty()),
        };
        let products = self.products.find_filtered(filter, PRODUCT_PAGE_SIZE).await?;

        let mut names = HashMap::new();
        let mut views = Vec::with_capacity(products.len());
        for product in products {
            views.push(self.view_cached(product, &mut names).await);
        }
        Ok(views)
    }

    pub async fn get_product(&self, id: &str) -> AppResult<ProductView> {
        let product = self.products.find_by_id(id).await?.ok_or_else(|| {
            AppError::with_message(ErrorCode::ProductNotFound, format!("Product {id} not found"))
        })?;
        Ok(self.view(product).await)
    }

    /// Attach the category display name to a single product
    pub async fn view(&self, product: models::Product) -> ProductView {
        let mut names = HashMap::new();
        self.view_cached(product, &mut names).await
    }

    async fn view_cached(
        &self,
        product: models::Product,
        names: &mut HashMap<String, String>,
    ) -> ProductView {
        let category_name = match names.get(&product.category_id) {
            Some(name) => name.clone(),
            None => {
                let name = self.category_name(&product.category_id).await;
                names.insert(product.category_id.clone(), name.clone());
                name
            }
        };
        ProductView {
            product: product.into(),
            category_name,
        }
    }

    /// Resolution never fails: missing or broken references get a placeholder
    async fn category_name(&self, category_id: &str) -> String {
        if category_id.is_empty() {
            return CATEGORY_NAME_GENERAL.to_string();
        }
        if parse_record_id("category", category_id).is_err() {
            return CATEGORY_NAME_UNKNOWN.to_string();
        }
        match self.categories.find_by_id(category_id).await {
            Ok(Some(category)) => category.name,
            Ok(None) => CATEGORY_NAME_UNKNOWN.to_string(),
            Err(RepoError::InvalidId(_)) => CATEGORY_NAME_UNKNOWN.to_string(),
            Err(e) => {
                tracing::warn!(category_id = %category_id, error = %e, "Category lookup failed");
                CATEGORY_NAME_UNKNOWN.to_string()
            }
        }
    }
}
