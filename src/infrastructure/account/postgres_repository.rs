//! PostgreSQL account repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::account::{Account, AccountRepository, AccountType};
use crate::domain::DomainError;
use crate::infrastructure::storage::is_unique_violation;

/// PostgreSQL implementation of AccountRepository
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn get_by_username(&self, username: &str) -> Result<Option<Account>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT username, password_hash, email, account_type, created_at
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get account: {}", e)))?;

        row.map(|row| row_to_account(&row)).transpose()
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (username, password_hash, email, account_type, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(account.username())
        .bind(account.password_hash())
        .bind(account.email())
        .bind(account.account_type().as_str())
        .bind(account.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| match is_unique_violation(&e) {
            Some(constraint) if constraint.contains("email") => {
                DomainError::conflict(format!("Email '{}' already exists", account.email()))
            }
            Some(_) => DomainError::conflict(format!(
                "Username '{}' already exists",
                account.username()
            )),
            None => DomainError::storage(format!("Failed to create account: {}", e)),
        })?;

        Ok(account)
    }
}

fn row_to_account(row: &sqlx::postgres::PgRow) -> Result<Account, DomainError> {
    let account_type: String = row.get("account_type");
    let account_type = AccountType::parse(&account_type).ok_or_else(|| {
        DomainError::storage(format!("Invalid account type in database: {}", account_type))
    })?;

    Ok(Account::restore(
        row.get::<String, _>("username"),
        row.get::<String, _>("password_hash"),
        row.get::<String, _>("email"),
        account_type,
        row.get("created_at"),
    ))
}
