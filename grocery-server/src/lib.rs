//! Grocery Server - storefront order backend
//!
//! # Overview
//!
//! - **Catalog** (`services::catalog`): categories and products with resolved category names
//! - **Order placement** (`services::order_placement`): stock reservation, transactional or saga
//! - **Admin** (`services::admin`): product CRUD, order moderation, revenue stats
//! - **Accounts** (`services::auth`): email-verified registration and login
//! - **HTTP API** (`api`): axum routers under `/api`
//!
//! # Module layout
//!
//! ```text
//! grocery-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── db/            # embedded SurrealDB, models, repositories
//! ├── services/      # business logic, mail transport
//! ├── api/           # HTTP routes and handlers
//! ├── money.rs       # decimal arithmetic for amounts and quantities
//! └── utils/         # logging, validation, password hashing
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod money;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, DatabaseEngine, OrderPlacementMode, Server, ServerError, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process before serving: work directories, then logging
pub fn setup_environment(config: &Config) -> Result<(), ServerError> {
    config.ensure_work_dir_structure()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ____                                
  / ___|_ __ ___   ___ ___ _ __ _   _ 
 | |  _| '__/ _ \ / __/ _ \ '__| | | |
 | |_| | | | (_) | (_|  __/ |  | |_| |
  \____|_|  \___/ \___\___|_|   \__, |
                                |___/ 
    "#
    );
}
