//! Data models
//!
//! Shared between the server and its clients (via API).
//! All IDs are `String` in the `table:key` form.

pub mod category;
pub mod order;
pub mod product;
pub mod stats;
pub mod user;

// Re-exports
pub use category::*;
pub use order::*;
pub use product::*;
pub use stats::*;
pub use user::*;
