//! Shared application state

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::{Account, AccountRepository, NewAccount};
use crate::domain::listing::{DiscountListing, ListingId, ListingRepository, NewListing};
use crate::domain::DomainError;
use crate::infrastructure::account::{AccountService, PasswordHasher};
use crate::infrastructure::listing::ListingService;
use crate::infrastructure::storage::Database;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub listing_service: Arc<dyn ListingServiceTrait>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub database: Database,
}

/// Trait for account service operations
#[async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn signup(&self, new_account: NewAccount) -> Result<Account, DomainError>;
    async fn authenticate(&self, username: &str, password: &str) -> Result<Account, DomainError>;
}

/// Trait for listing service operations
#[async_trait]
pub trait ListingServiceTrait: Send + Sync {
    async fn submit(&self, listing: NewListing) -> Result<DiscountListing, DomainError>;
    async fn get(&self, id: &ListingId) -> Result<Option<DiscountListing>, DomainError>;
}

#[async_trait]
impl<R, H> AccountServiceTrait for AccountService<R, H>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn signup(&self, new_account: NewAccount) -> Result<Account, DomainError> {
        AccountService::signup(self, new_account).await
    }

    async fn authenticate(&self, username: &str, password: &str) -> Result<Account, DomainError> {
        AccountService::authenticate(self, username, password).await
    }
}

#[async_trait]
impl<R: ListingRepository + 'static> ListingServiceTrait for ListingService<R> {
    async fn submit(&self, listing: NewListing) -> Result<DiscountListing, DomainError> {
        ListingService::submit(self, listing).await
    }

    async fn get(&self, id: &ListingId) -> Result<Option<DiscountListing>, DomainError> {
        ListingService::get(self, id).await
    }
}
