//! Error codes
//!
//! Grouped by range; the leading digit names the [`ErrorCategory`](super::ErrorCategory):
//! - 0xxx: general
//! - 1xxx: accounts
//! - 4xxx: orders
//! - 6xxx: catalog
//! - 9xxx: system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code carried in every error body
///
/// Serialized as its `u16` value so clients can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    /// Identifier is not a well-formed `table:key` of the expected table
    InvalidId = 9,

    // ==================== 1xxx: Accounts ====================
    /// Wrong password, or unknown admin username
    InvalidCredentials = 1002,
    EmailNotVerified = 1003,
    /// Unknown email or wrong code on verification
    VerificationCodeInvalid = 1004,
    EmailAlreadyRegistered = 1005,
    UserNotFound = 1006,
    AlreadyVerified = 1007,
    PasswordTooShort = 1008,

    // ==================== 4xxx: Orders ====================
    OrderEmpty = 4002,
    /// Client total differs from the sum of the line items
    OrderTotalMismatch = 4003,
    InsufficientStock = 4004,
    /// Status string is empty
    InvalidOrderStatus = 4005,

    // ==================== 6xxx: Catalog ====================
    ProductNotFound = 6001,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Every code, in numeric order
    pub const ALL: [ErrorCode; 18] = [
        ErrorCode::ValidationFailed,
        ErrorCode::NotFound,
        ErrorCode::AlreadyExists,
        ErrorCode::InvalidId,
        ErrorCode::InvalidCredentials,
        ErrorCode::EmailNotVerified,
        ErrorCode::VerificationCodeInvalid,
        ErrorCode::EmailAlreadyRegistered,
        ErrorCode::UserNotFound,
        ErrorCode::AlreadyVerified,
        ErrorCode::PasswordTooShort,
        ErrorCode::OrderEmpty,
        ErrorCode::OrderTotalMismatch,
        ErrorCode::InsufficientStock,
        ErrorCode::InvalidOrderStatus,
        ErrorCode::ProductNotFound,
        ErrorCode::InternalError,
        ErrorCode::DatabaseError,
    ];

    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message, used when no specific one is given
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidId => "Invalid identifier",

            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::EmailNotVerified => "Email not verified",
            ErrorCode::VerificationCodeInvalid => "Verification code invalid",
            ErrorCode::EmailAlreadyRegistered => "Email already registered",
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::AlreadyVerified => "Account already verified",
            ErrorCode::PasswordTooShort => "Password too short",

            ErrorCode::OrderEmpty => "Order has no items",
            ErrorCode::OrderTotalMismatch => "Order total does not match its items",
            ErrorCode::InsufficientStock => "Insufficient stock",
            ErrorCode::InvalidOrderStatus => "Invalid order status",

            ErrorCode::ProductNotFound => "Product not found",

            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A `u16` that names no [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|c| c.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
