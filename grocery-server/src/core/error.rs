use thiserror::Error;

/// Startup and serving failures
///
/// Request-level failures use [`shared::error::AppError`]; this type only
/// covers what can stop the process.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<surrealdb::Error> for ServerError {
    fn from(err: surrealdb::Error) -> Self {
        ServerError::Database(err.to_string())
    }
}

/// Result alias for startup code
pub type Result<T> = std::result::Result<T, ServerError>;
