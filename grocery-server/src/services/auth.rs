//! Customer accounts: registration, email verification, login
//!
//! Verification codes are stored hashed and are single use.

use std::sync::Arc;

use chrono::Utc;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    LoginRequest, LoginResponse, RegisterRequest, ResendCodeRequest, VerifyRequest,
};
use shared::response::MessageResponse;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::mailer::{Mailer, dispatch_verification_code};
use crate::db::models::Customer;
use crate::db::repository::{CustomerRepository, RepoError};
use crate::utils::password::{generate_code, hash_password, verify_password};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, normalize_email, validate_new_password,
    validate_optional_text, validate_required_text,
};

#[derive(Clone)]
pub struct AuthService {
    customers: CustomerRepository,
    mailer: Arc<dyn Mailer>,
}

impl AuthService {
    pub fn new(db: Surreal<Db>, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            customers: CustomerRepository::new(db),
            mailer,
        }
    }

    /// Create an unverified account and mail its verification code
    pub async fn register(&self, request: RegisterRequest) -> AppResult<MessageResponse> {
        validate_required_text(&request.name, "name", MAX_NAME_LEN)?;
        validate_optional_text(&request.surname, "surname", MAX_NAME_LEN)?;
        validate_optional_text(&request.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&request.address, "address", MAX_ADDRESS_LEN)?;
        let email = normalize_email(&request.email)?;
        validate_new_password(&request.password)?;

        if self.customers.find_by_email(&email).await?.is_some() {
            return Err(email_taken());
        }

        let code = generate_code();
        let customer = Customer {
            id: None,
            name: request.name.trim().to_string(),
            surname: request.surname,
            email: email.clone(),
            phone: request.phone,
            address: request.address,
            password_hash: hash_secret(&request.password)?,
            is_verified: false,
            verification_code: Some(hash_secret(&code)?),
            created_at: Utc::now().timestamp_millis(),
        };

        match self.customers.create(customer).await {
            Ok(_) => {}
            Err(RepoError::Duplicate(_)) => return Err(email_taken()),
            Err(e) => return Err(e.into()),
        }

        tracing::info!(email = %email, "Customer registered");
        dispatch_verification_code(self.mailer.clone(), email, code);
        Ok(MessageResponse::new(
            "Registration successful. Check your email for the verification code.",
        ))
    }

    /// Check a code and activate the account; the code is consumed
    pub async fn verify(&self, request: VerifyRequest) -> AppResult<MessageResponse> {
        let email = normalize_email(&request.email)?;
        let customer = self.customers.find_by_email(&email).await?;

        let verified = customer.as_ref().and_then(|c| {
            let hash = c.verification_code.as_deref()?;
            verify_password(request.code.trim(), hash).then_some(c)
        });
        let Some(customer) = verified else {
            tracing::warn!(email = %email, "Verification failed");
            return Err(AppError::with_message(
                ErrorCode::VerificationCodeInvalid,
                "Invalid verification code",
            ));
        };

        let Some(thing) = customer.id.as_ref() else {
            return Err(AppError::internal("Customer record has no id"));
        };
        self.customers.mark_verified(thing).await?;

        tracing::info!(email = %email, "Email verified");
        Ok(MessageResponse::new("Email verified"))
    }

    /// Issue a fresh code for an unverified account
    pub async fn resend_code(&self, request: ResendCodeRequest) -> AppResult<MessageResponse> {
        let email = normalize_email(&request.email)?;
        let customer = self
            .customers
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::with_message(ErrorCode::UserNotFound, "User not found"))?;
        if customer.is_verified {
            return Err(AppError::with_message(
                ErrorCode::AlreadyVerified,
                "Email is already verified",
            ));
        }
        let Some(thing) = customer.id.as_ref() else {
            return Err(AppError::internal("Customer record has no id"));
        };

        let code = generate_code();
        self.customers
            .set_verification_code(thing, hash_secret(&code)?)
            .await?;

        dispatch_verification_code(self.mailer.clone(), email, code);
        Ok(MessageResponse::new("Verification code sent"))
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let email = normalize_email(&request.email)?;
        let customer = self
            .customers
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::with_message(ErrorCode::UserNotFound, "User not found"))?;

        if !customer.is_verified {
            return Err(AppError::with_message(
                ErrorCode::EmailNotVerified,
                "Email is not verified",
            ));
        }
        if !verify_password(&request.password, &customer.password_hash) {
            tracing::warn!(email = %email, "Login failed");
            return Err(AppError::invalid_credentials());
        }

        tracing::info!(email = %email, "Customer logged in");
        Ok(LoginResponse {
            message: "Login successful".to_string(),
            user: customer.into(),
        })
    }
}

fn email_taken() -> AppError {
    AppError::with_message(ErrorCode::EmailAlreadyRegistered, "Email is already registered")
}

fn hash_secret(secret: &str) -> AppResult<String> {
    hash_password(secret).map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
}
