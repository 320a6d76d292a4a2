//! HTTP status for each error code

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    pub fn http_status(&self) -> StatusCode {
        use ErrorCode::*;
        match self {
            ValidationFailed | InvalidId | VerificationCodeInvalid | AlreadyVerified
            | PasswordTooShort | OrderEmpty | OrderTotalMismatch | InsufficientStock
            | InvalidOrderStatus => StatusCode::BAD_REQUEST,
            InvalidCredentials => StatusCode::UNAUTHORIZED,
            EmailNotVerified => StatusCode::FORBIDDEN,
            NotFound | UserNotFound | ProductNotFound => StatusCode::NOT_FOUND,
            AlreadyExists | EmailAlreadyRegistered => StatusCode::CONFLICT,
            InternalError | DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
