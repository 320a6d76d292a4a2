//! Error categories, derived from the code range

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Which part of the system an [`ErrorCode`] belongs to
///
/// Only [`ErrorCategory::System`] errors are logged when turned into a response;
/// the rest are expected client mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Account,
    Order,
    Catalog,
    System,
}

impl ErrorCategory {
    pub fn from_code(code: u16) -> Self {
        match code / 1000 {
            0 => Self::General,
            1 => Self::Account,
            4 => Self::Order,
            6 => Self::Catalog,
            _ => Self::System,
        }
    }
}

impl ErrorCode {
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_map_to_categories() {
        assert_eq!(ErrorCategory::from_code(9), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1005), ErrorCategory::Account);
        assert_eq!(ErrorCategory::from_code(4003), ErrorCategory::Order);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Catalog);
        assert_eq!(ErrorCategory::from_code(9002), ErrorCategory::System);
        // unassigned ranges fall through to system
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::System);
    }

    #[test]
    fn codes_know_their_category() {
        assert_eq!(ErrorCode::AlreadyVerified.category(), ErrorCategory::Account);
        assert_eq!(ErrorCode::OrderEmpty.category(), ErrorCategory::Order);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&ErrorCategory::Account).unwrap(), "\"account\"");
    }
}
