//! Core module: configuration, shared state, server lifecycle
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared handles cloned into every request
//! - [`Server`] - HTTP server
//! - [`ServerError`] - startup errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, DatabaseEngine, OrderPlacementMode};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
