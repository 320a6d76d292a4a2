//! Demo catalog seeding
//!
//! Inserts three categories, thirteen products and the configured admin into
//! an empty store. Running it again changes nothing.

use shared::error::{AppError, AppResult};
use shared::response::SeedResponse;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{Product, serde_helpers};
use crate::db::repository::{AdminRepository, CategoryRepository, ProductRepository};
use crate::utils::password::hash_password;

struct SeedProduct {
    name: &'static str,
    price: f64,
    unit_type: &'static str,
    stock: f64,
    description: &'static str,
    image: &'static str,
}

struct SeedCategory {
    name: &'static str,
    image: &'static str,
    products: &'static [SeedProduct],
}

const fn p(
    name: &'static str,
    price: f64,
    unit_type: &'static str,
    stock: f64,
    description: &'static str,
    image: &'static str,
) -> SeedProduct {
    SeedProduct {
        name,
        price,
        unit_type,
        stock,
        description,
        image,
    }
}

const CATALOG: &[SeedCategory] = &[
    SeedCategory {
        name: "Sebzeler",
        image: "/static/sebze.jpeg",
        products: &[
            p("Domates", 25.0, "KG", 100.0, "Taze yerli salkım domates", "/static/domates.jpeg"),
            p("Patates", 15.0, "KG", 200.0, "Kızartmalık sarı patates", "/static/patates.jpeg"),
            p("Soğan", 12.0, "KG", 150.0, "Kuru yemeklik soğan", "/static/sogan.jpeg"),
            p("Biber", 28.0, "KG", 90.0, "Dolmalık çarliston biber", "/static/biber.jpeg"),
        ],
    },
    SeedCategory {
        name: "Meyveler",
        image: "/static/meyve.jpeg",
        products: &[
            p("Kivi", 45.0, "KG", 60.0, "Ekşi tatlı kivi", "/static/kivi.jpeg"),
            p("Elma", 30.0, "KG", 50.0, "Amasya elması", "/static/elma.jpeg"),
            p("Muz", 55.0, "KG", 120.0, "İthal muz", "/static/muz.jpeg"),
            p("Portakal", 22.0, "KG", 100.0, "Sulu Washington portakalı", "/static/portakal.jpeg"),
            p("Mandalina", 18.0, "KG", 110.0, "Çekirdeksiz mandalina", "/static/mandalina.jpeg"),
        ],
    },
    SeedCategory {
        name: "Salata Malzemeleri",
        image: "/static/salata.jpeg",
        products: &[
            p("Salatalık", 20.0, "KG", 80.0, "Çıtır Çengelköy salatalığı", "/static/salatalik.jpeg"),
            p("Marul", 10.0, "ADET", 70.0, "Kıvırcık marul", "/static/marul.jpeg"),
            p("Roka", 8.0, "DEMET", 50.0, "Taze günlük roka", "/static/roka.jpeg"),
            p("Maydanoz", 5.0, "DEMET", 50.0, "Mis kokulu maydanoz", "/static/maydanoz.jpeg"),
        ],
    },
];

#[derive(Clone)]
pub struct SeedService {
    categories: CategoryRepository,
    products: ProductRepository,
    admins: AdminRepository,
    admin_username: String,
    admin_password: String,
}

impl SeedService {
    pub fn new(db: Surreal<Db>, admin_username: String, admin_password: String) -> Self {
        Self {
            categories: CategoryRepository::new(db.clone()),
            products: ProductRepository::new(db.clone()),
            admins: AdminRepository::new(db),
            admin_username,
            admin_password,
        }
    }

    pub async fn seed(&self) -> AppResult<SeedResponse> {
        let catalog_empty =
            self.categories.count().await? == 0 && self.products.count().await? == 0;
        if catalog_empty {
            self.seed_catalog().await?;
        }

        if self.admins.find_by_username(&self.admin_username).await?.is_none() {
            let hash = hash_password(&self.admin_password)
                .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;
            self.admins.create(self.admin_username.clone(), hash).await?;
            tracing::info!(username = %self.admin_username, "Admin account created");
        }

        let message = if catalog_empty {
            "Demo catalog loaded"
        } else {
            "Catalog already present"
        };
        Ok(SeedResponse {
            success: true,
            message: message.to_string(),
            admin: self.admin_username.clone(),
        })
    }

    async fn seed_catalog(&self) -> AppResult<()> {
        let mut inserted = 0usize;
        for category in CATALOG {
            let created = self
                .categories
                .create(category.name.to_string(), Some(category.image.to_string()))
                .await?;
            let category_id = serde_helpers::id_to_string(&created.id);

            for item in category.products {
                self.products
                    .create(Product {
                        id: None,
                        name: item.name.to_string(),
                        category_id: category_id.clone(),
                        price: item.price,
                        unit_type: item.unit_type.to_string(),
                        stock: item.stock,
                        image: Some(item.image.to_string()),
                        description: Some(item.description.to_string()),
                    })
                    .await?;
                inserted += 1;
            }
        }
        tracing::info!(categories = CATALOG.len(), products = inserted, "Demo catalog seeded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::ProductFilter;

    #[tokio::test]
    async fn seeding_twice_is_idempotent() {
        let db = DbService::memory().await.unwrap().db;
        let seed = SeedService::new(db.clone(), "admin".into(), "admin123".into());

        let first = seed.seed().await.unwrap();
        assert!(first.success);
        assert_eq!(first.admin, "admin");
        let second = seed.seed().await.unwrap();
        assert_eq!(second.message, "Catalog already present");

        assert_eq!(CategoryRepository::new(db.clone()).count().await.unwrap(), 3);
        assert_eq!(ProductRepository::new(db.clone()).count().await.unwrap(), 13);
        assert_eq!(AdminRepository::new(db.clone()).count().await.unwrap(), 1);

        let tomatoes = ProductRepository::new(db)
            .find_filtered(
                ProductFilter {
                    search: Some("domates".into()),
                    ..Default::default()
                },
                10,
            )
            .await
            .unwrap();
        assert_eq!(tomatoes.len(), 1);
        assert_eq!(tomatoes[0].stock, 100.0);
        assert!(tomatoes[0].category_id.starts_with("category:"));
    }
}
