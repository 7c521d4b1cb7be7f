//! The single database handle shared by every request

use sqlx::postgres::PgPool;
use tracing::info;

use super::factory::{StorageConfig, StorageType};
use super::postgres;
use crate::domain::DomainError;

/// Connection handle established once at process start.
///
/// Cloning is cheap: the Postgres variant shares one pool.
#[derive(Debug, Clone)]
pub enum Database {
    InMemory,
    Postgres(PgPool),
}

impl Database {
    /// Connect to the configured backend.
    ///
    /// For Postgres this opens the pool and runs a probe query, so an
    /// unreachable server is reported here rather than on the first request.
    pub async fn connect(config: &StorageConfig) -> Result<Self, DomainError> {
        match config {
            StorageConfig::InMemory => {
                info!("Using in-memory storage");
                Ok(Self::InMemory)
            }
            StorageConfig::Postgres(pg_config) => {
                info!("Connecting to PostgreSQL...");
                let pool = postgres::connect(pg_config).await?;
                info!("PostgreSQL connection established");
                Ok(Self::Postgres(pool))
            }
        }
    }

    /// Create missing tables
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        match self {
            Self::InMemory => Ok(()),
            Self::Postgres(pool) => postgres::ensure_schema(pool).await,
        }
    }

    /// Verify the backend still answers
    pub async fn ping(&self) -> Result<(), DomainError> {
        match self {
            Self::InMemory => Ok(()),
            Self::Postgres(pool) => postgres::ping(pool).await,
        }
    }

    pub fn storage_type(&self) -> StorageType {
        match self {
            Self::InMemory => StorageType::InMemory,
            Self::Postgres(_) => StorageType::Postgres,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database() {
        let database = Database::connect(&StorageConfig::in_memory()).await.unwrap();

        assert_eq!(database.storage_type(), StorageType::InMemory);
        assert!(database.ensure_schema().await.is_ok());
        assert!(database.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_postgres_fails_to_connect() {
        let config = StorageConfig::postgres(
            postgres::PostgresConfig::new("postgres://nobody@127.0.0.1:1/missing")
                .with_min_connections(0)
                .with_connect_timeout(1),
        );

        let result = Database::connect(&config).await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
