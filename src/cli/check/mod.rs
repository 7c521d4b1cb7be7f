//! Check command - verifies the database is reachable

use anyhow::Context;
use tracing::info;

/// Connect, ping and report
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let storage = config.storage.to_storage_config()?;
    let database = crate::infrastructure::storage::Database::connect(&storage)
        .await
        .context("Could not connect to database")?;

    database.ping().await.context("Database did not respond")?;

    info!(backend = ?database.storage_type(), "Database reachable");

    Ok(())
}
