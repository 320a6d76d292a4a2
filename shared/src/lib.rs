//! Shared types for the grocery storefront
//!
//! Error types and request/response structures used by the server and
//! by anything that talks to its HTTP API.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
