//! Password hashing and verification codes

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::Rng;
use std::sync::LazyLock;

/// Stand-in hash checked when the account does not exist
static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("missing-account").unwrap_or_default());

/// Hash a secret with a fresh salt (argon2id, default parameters)
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Check a secret against a stored PHC hash string
///
/// A malformed stored hash never verifies.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Run a full verification for an account that does not exist
///
/// Keeps the unknown-account path as slow as a wrong password.
pub fn verify_missing_account(password: &str) {
    let _ = verify_password(password, &DUMMY_HASH);
}

/// Six-digit numeric verification code
pub fn generate_code() -> String {
    let code: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
    code.to_string()
}
