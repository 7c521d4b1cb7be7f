//! Account service for signup and authentication

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::account::{
    normalize_email, validate_email, validate_password_hash, validate_username, Account,
    AccountRepository, NewAccount,
};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Registers and verifies accounts. Every call issues one repository operation.
#[derive(Debug)]
pub struct AccountService<R: AccountRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: AccountRepository, H: PasswordHasher> AccountService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Register a new account.
    ///
    /// The password must already be hashed; hashing happens where the raw
    /// password enters the system. The email is stored in normalized form.
    pub async fn signup(&self, mut new_account: NewAccount) -> Result<Account, DomainError> {
        new_account.email = normalize_email(&new_account.email);

        validate_username(&new_account.username)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&new_account.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password_hash(&new_account.password_hash)
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let account = self.repository.create(Account::new(new_account)).await?;

        info!(username = %account.username(), "Account created");

        Ok(account)
    }

    /// Verify a username and raw password against the stored hash
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Account, DomainError> {
        let account = self
            .repository
            .get_by_username(username)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Account '{}' not found", username)))?;

        if !self.hasher.verify(password, account.password_hash()) {
            debug!(username = %username, "Password mismatch");
            return Err(DomainError::invalid_credentials("Invalid username or password"));
        }

        info!(username = %username, "Account authenticated");

        Ok(account)
    }
}
