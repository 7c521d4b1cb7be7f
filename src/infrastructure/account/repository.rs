//! In-memory account repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, AccountRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Accounts {
    by_username: HashMap<String, Account>,
    /// lowercased email -> username
    email_index: HashMap<String, String>,
}

/// In-memory implementation of AccountRepository
///
/// Both indices live behind one lock so a duplicate check and the insert it
/// guards are atomic.
#[derive(Debug, Default, Clone)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<Accounts>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.by_username.get(username).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.by_username.contains_key(account.username()) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                account.username()
            )));
        }

        let email_key = account.email().to_lowercase();

        if accounts.email_index.contains_key(&email_key) {
            return Err(DomainError::conflict(format!(
                "Email '{}' already exists",
                account.email()
            )));
        }

        accounts
            .email_index
            .insert(email_key, account.username().to_string());
        accounts
            .by_username
            .insert(account.username().to_string(), account.clone());

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{AccountType, NewAccount};

    fn account(username: &str, email: &str) -> Account {
        Account::new(NewAccount {
            username: username.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            email: email.to_string(),
            account_type: AccountType::User,
        })
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryAccountRepository::new();
        repo.create(account("alice", "a@x.com")).await.unwrap();

        let fetched = repo.get_by_username("alice").await.unwrap().unwrap();
        assert_eq!(fetched.email(), "a@x.com");

        assert!(repo.get_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_conflict() {
        let repo = InMemoryAccountRepository::new();
        repo.create(account("alice", "a@x.com")).await.unwrap();

        let result = repo.create(account("alice", "other@x.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));

        // Original record untouched
        let stored = repo.get_by_username("alice").await.unwrap().unwrap();
        assert_eq!(stored.email(), "a@x.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = InMemoryAccountRepository::new();
        repo.create(account("alice", "a@x.com")).await.unwrap();

        let result = repo.create(account("bob", "a@x.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert!(repo.get_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_differing_in_case_is_conflict() {
        let repo = InMemoryAccountRepository::new();
        repo.create(account("alice", "a@x.com")).await.unwrap();

        let result = repo.create(account("bob", "A@X.COM")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_signups_store_one_account() {
        let repo = InMemoryAccountRepository::new();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(account("alice", &format!("a{}@x.com", i))).await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
    }
}
