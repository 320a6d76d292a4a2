//! Per-endpoint acknowledgement bodies

use serde::{Deserialize, Serialize};

/// `{success, message}` acknowledgement for admin mutations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// `{message}` body returned by the account flows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `GET /api/health` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// `POST /api/seed` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub success: bool,
    pub message: String,
    /// Username of the seeded admin account
    pub admin: String,
}
