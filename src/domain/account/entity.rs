//! Account entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of account; self-service signup only creates `User`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[default]
    User,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
        }
    }

    /// Parse a stored `account_type` column
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data needed to register an account. `password_hash` must already be hashed.
#[derive(Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub account_type: AccountType,
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("account_type", &self.account_type)
            .finish_non_exhaustive()
    }
}

/// A stored user identity
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    /// Natural key
    username: String,
    /// Argon2 PHC string - never exposed in serialization
    #[serde(skip_serializing)]
    password_hash: String,
    email: String,
    account_type: AccountType,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account from a registration request
    pub fn new(new_account: NewAccount) -> Self {
        Self {
            username: new_account.username,
            password_hash: new_account.password_hash,
            email: new_account.email,
            account_type: new_account.account_type,
            created_at: Utc::now(),
        }
    }

    /// Rebuild an account from persisted state
    pub fn restore(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        email: impl Into<String>,
        account_type: AccountType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            email: email.into(),
            account_type,
            created_at,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
