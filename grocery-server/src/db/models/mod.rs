//! Database Models
//!
//! Documents as stored in SurrealDB. IDs are native `RecordId`s here and
//! `table:key` strings in the API models (`shared::models`).

// Serde helpers
pub mod serde_helpers;

// Catalog
pub mod category;
pub mod product;

// Orders
pub mod order;

// Accounts
pub mod admin;
pub mod customer;

// Re-exports
pub use admin::Admin;
pub use category::Category;
pub use customer::Customer;
pub use order::Order;
pub use product::Product;
