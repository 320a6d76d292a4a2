//! Customer account Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Customer account document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub surname: Option<String>,
    /// Lowercased, trimmed
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub password_hash: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_verified: bool,
    /// Argon2 hash of the pending verification code
    #[serde(default)]
    pub verification_code: Option<String>,
    /// Unix milliseconds (UTC)
    pub created_at: i64,
}

impl From<Customer> for shared::models::UserProfile {
    fn from(c: Customer) -> Self {
        Self {
            id: serde_helpers::id_to_string(&c.id),
            name: c.name,
            surname: c.surname,
            email: c.email,
            phone: c.phone,
            address: c.address,
            is_verified: c.is_verified,
            created_at: serde_helpers::millis_to_datetime(c.created_at),
        }
    }
}
