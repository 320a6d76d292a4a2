use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::{Config, DatabaseEngine, Result, ServerError};
use crate::db::DbService;
use crate::services::{
    AdminService, AuthService, CatalogService, LogMailer, Mailer, OrderPlacementService,
    SeedService, WebhookMailer,
};

/// Server state - shared handles for every request
///
/// Cloning is cheap: `Surreal<Db>` and the mailer are reference counted.
/// Services are thin wrappers over repositories and are built per request.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | Immutable configuration |
/// | db | Surreal<Db> | Embedded document store |
/// | mailer | Arc<dyn Mailer> | Verification mail transport |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub mailer: Arc<dyn Mailer>,
}

impl ServerState {
    /// Build state from already opened handles
    pub fn new(config: Config, db: Surreal<Db>, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, db, mailer }
    }

    /// Initialize server state
    ///
    /// 1. Work directory structure
    /// 2. Database (`work_dir/database/grocery.db` or in-memory)
    /// 3. Mail transport (webhook when configured, log otherwise)
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_service = match config.database_engine {
            DatabaseEngine::RocksDb => {
                let db_path = config.database_dir().join("grocery.db");
                DbService::new(&db_path.to_string_lossy()).await?
            }
            DatabaseEngine::Memory => DbService::memory().await?,
        };

        let mailer: Arc<dyn Mailer> = match &config.mail_webhook_url {
            Some(url) => Arc::new(
                WebhookMailer::new(url.clone(), config.mail_from.clone())
                    .map_err(|e| ServerError::Config(format!("mail webhook client: {e}")))?,
            ),
            None => Arc::new(LogMailer::new(config.mail_from.clone())),
        };

        Ok(Self::new(config.clone(), db_service.db, mailer))
    }

    pub fn catalog(&self) -> CatalogService {
        CatalogService::new(self.db.clone())
    }

    pub fn order_placement(&self) -> OrderPlacementService {
        OrderPlacementService::new(
            self.db.clone(),
            self.config.order_placement_mode,
            self.config.verify_order_total,
        )
    }

    pub fn admin(&self) -> AdminService {
        AdminService::new(self.db.clone())
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.db.clone(), self.mailer.clone())
    }

    pub fn seed(&self) -> SeedService {
        SeedService::new(
            self.db.clone(),
            self.config.admin_username.clone(),
            self.config.admin_password.clone(),
        )
    }
}
