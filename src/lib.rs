//! Discount Board API
//!
//! Backend for a community board of local discounts:
//! - Account signup with salted password hashes
//! - Username/password authentication
//! - Discount listing submission backed by PostgreSQL

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{AccountRepository, ListingRepository};
use infrastructure::{
    account::{
        AccountService, Argon2Hasher, InMemoryAccountRepository, PostgresAccountRepository,
    },
    listing::{InMemoryListingRepository, ListingService, PostgresListingRepository},
    storage::Database,
};

/// Wire services onto the given database handle
pub fn create_app_state(database: Database) -> AppState {
    match database {
        Database::InMemory => build_state(
            Arc::new(InMemoryAccountRepository::new()),
            Arc::new(InMemoryListingRepository::new()),
            Database::InMemory,
        ),
        Database::Postgres(pool) => build_state(
            Arc::new(PostgresAccountRepository::new(pool.clone())),
            Arc::new(PostgresListingRepository::new(pool.clone())),
            Database::Postgres(pool),
        ),
    }
}

fn build_state<A, L>(accounts: Arc<A>, listings: Arc<L>, database: Database) -> AppState
where
    A: AccountRepository + 'static,
    L: ListingRepository + 'static,
{
    let hasher = Arc::new(Argon2Hasher::new());

    AppState {
        account_service: Arc::new(AccountService::new(accounts, hasher.clone())),
        listing_service: Arc::new(ListingService::new(listings)),
        password_hasher: hasher,
        database,
    }
}
