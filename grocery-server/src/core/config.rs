use std::path::PathBuf;
use std::str::FromStr;

/// Storage engine for the embedded database
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseEngine {
    /// On-disk RocksDB under `WORK_DIR/database`
    RocksDb,
    /// In-memory store, lost on exit
    Memory,
}

impl FromStr for DatabaseEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rocksdb" => Ok(Self::RocksDb),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(format!("unknown database engine: {other}")),
        }
    }
}

/// How an order commits its stock reservations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPlacementMode {
    /// Stock decrements and the order insert run in one store transaction
    Transactional,
    /// Insert the order, then decrement item by item with compensation on failure
    Saga,
}

impl FromStr for OrderPlacementMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transactional" => Ok(Self::Transactional),
            "saga" => Ok(Self::Saga),
            other => Err(format!("unknown order placement mode: {other}")),
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Database and log directory |
/// | HTTP_PORT | 8000 | HTTP listen port |
/// | DATABASE_ENGINE | rocksdb | `rocksdb` or `memory` |
/// | ENVIRONMENT | development | development / staging / production |
/// | ORDER_PLACEMENT_MODE | transactional | `transactional` or `saga` |
/// | ORDER_VERIFY_TOTAL | true | Reject client totals that differ from the line items |
/// | MAIL_WEBHOOK_URL | - | POST verification mails here instead of logging them |
/// | MAIL_FROM | noreply@grocery.local | Sender address |
/// | ADMIN_USERNAME | admin | Admin created by the catalog seed |
/// | ADMIN_PASSWORD | admin123 | Password of the seeded admin |
/// | LOG_LEVEL | info | Default log level (RUST_LOG wins) |
/// | LOG_DIR | - | Enables daily rolling log files |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout |
///
/// # Example
///
/// ```ignore
/// DATABASE_ENGINE=memory HTTP_PORT=8080 cargo run -p grocery-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory for the database and logs
    pub work_dir: String,
    pub http_port: u16,
    pub database_engine: DatabaseEngine,
    /// development | staging | production
    pub environment: String,
    pub order_placement_mode: OrderPlacementMode,
    /// Recompute the order total server-side and reject mismatches
    pub verify_order_total: bool,
    pub mail_webhook_url: Option<String>,
    pub mail_from: String,
    pub admin_username: String,
    pub admin_password: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// Request timeout (milliseconds)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or(defaults.work_dir),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            database_engine: std::env::var("DATABASE_ENGINE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.database_engine),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            order_placement_mode: std::env::var("ORDER_PLACEMENT_MODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.order_placement_mode),
            verify_order_total: std::env::var("ORDER_VERIFY_TOTAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.verify_order_total),
            mail_webhook_url: std::env::var("MAIL_WEBHOOK_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            mail_from: std::env::var("MAIL_FROM").unwrap_or(defaults.mail_from),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.trim().is_empty()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
        }
    }

    /// Defaults with an in-memory database
    ///
    /// Used by tests and ephemeral runs
    pub fn in_memory() -> Self {
        Self {
            database_engine: DatabaseEngine::Memory,
            ..Self::default()
        }
    }

    /// Override the placement mode
    pub fn with_placement_mode(mut self, mode: OrderPlacementMode) -> Self {
        self.order_placement_mode = mode;
        self
    }

    /// Directory holding the RocksDB files
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Create the work directory tree if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        if self.database_engine == DatabaseEngine::RocksDb {
            std::fs::create_dir_all(self.database_dir())?;
        }
        if let Some(dir) = &self.log_dir {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "./data".into(),
            http_port: 8000,
            database_engine: DatabaseEngine::RocksDb,
            environment: "development".into(),
            order_placement_mode: OrderPlacementMode::Transactional,
            verify_order_total: true,
            mail_webhook_url: None,
            mail_from: "noreply@grocery.local".into(),
            admin_username: "admin".into(),
            admin_password: "admin123".into(),
            log_level: "info".into(),
            log_dir: None,
            request_timeout_ms: 30_000,
        }
    }
}
