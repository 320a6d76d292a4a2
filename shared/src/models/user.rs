//! Customer and admin account payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    #[serde(default)]
    pub surname: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub password: String,
}

/// Email verification payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub email: String,
    pub code: String,
}

/// Verification code resend payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResendCodeRequest {
    pub email: String,
}

/// Customer login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Customer profile without credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub surname: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Customer login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserProfile,
}

/// Admin login payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// Admin login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub success: bool,
    pub message: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_profile_has_no_secret_fields() {
        let profile = UserProfile {
            id: "user:1".to_string(),
            name: "Ayse".to_string(),
            surname: None,
            email: "ayse@example.com".to_string(),
            phone: None,
            address: None,
            is_verified: true,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("verification_code").is_none());
    }
}
