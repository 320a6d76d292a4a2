//! Customer Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Customer;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const CUSTOMER_TABLE: &str = "customer";

#[derive(Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find customer by normalized email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Customer>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM customer WHERE email = $email LIMIT 1")
            .bind(("email", email.to_string()))
            .await?;
        let customers: Vec<Customer> = result.take(0)?;
        Ok(customers.into_iter().next())
    }

    /// Create a new customer; a taken email yields `Duplicate`
    pub async fn create(&self, customer: Customer) -> RepoResult<Customer> {
        let customer = Customer {
            id: None,
            ..customer
        };
        let created: Option<Customer> = self
            .base
            .db()
            .create(CUSTOMER_TABLE)
            .content(customer)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create customer".to_string()))
    }

    /// Replace the pending verification code hash
    pub async fn set_verification_code(&self, thing: &RecordId, code_hash: String) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET verification_code = $code")
            .bind(("thing", thing.clone()))
            .bind(("code", code_hash))
            .await?
            .check()?;
        Ok(())
    }

    /// Mark verified and clear the pending code
    pub async fn mark_verified(&self, thing: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET is_verified = true, verification_code = NONE")
            .bind(("thing", thing.clone()))
            .await?
            .check()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn customer(email: &str) -> Customer {
        Customer {
            id: None,
            name: "Ayşe".to_string(),
            surname: None,
            email: email.to_string(),
            phone: None,
            address: None,
            password_hash: "hash".to_string(),
            is_verified: false,
            verification_code: Some("code-hash".to_string()),
            created_at: 0,
        }
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let repo = CustomerRepository::new(DbService::memory().await.unwrap().db);
        repo.create(customer("a@example.com")).await.unwrap();
        let err = repo.create(customer("a@example.com")).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn mark_verified_clears_code() {
        let repo = CustomerRepository::new(DbService::memory().await.unwrap().db);
        let created = repo.create(customer("b@example.com")).await.unwrap();
        repo.mark_verified(created.id.as_ref().unwrap()).await.unwrap();

        let found = repo.find_by_email("b@example.com").await.unwrap().unwrap();
        assert!(found.is_verified);
        assert!(found.verification_code.is_none());
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }
}
