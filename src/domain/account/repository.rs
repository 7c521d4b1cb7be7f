//! Account repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Account;
use crate::domain::DomainError;

/// Repository trait for account storage
///
/// Each method performs exactly one operation against the store.
#[async_trait]
pub trait AccountRepository: Send + Sync + Debug {
    /// Get an account by its username
    async fn get_by_username(&self, username: &str) -> Result<Option<Account>, DomainError>;

    /// Insert a new account.
    ///
    /// Fails with `DomainError::Conflict` when the username or email is
    /// already taken; no record is written in that case.
    async fn create(&self, account: Account) -> Result<Account, DomainError>;
}
