//! Utilities: error re-exports, logging, validation, credentials

pub mod logger;
pub mod password;
pub mod validation;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
