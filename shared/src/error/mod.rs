//! Unified error system for the storefront backend
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Envelope used for error bodies
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::insufficient_stock("Domates: remaining 1.5 KG")
//!     .with_detail("product_id", "product:domates");
//! assert_eq!(err.code, ErrorCode::InsufficientStock);
//!
//! let body = ApiResponse::from(&err);
//! assert_eq!(body.code, 4004);
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
