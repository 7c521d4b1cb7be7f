//! Discount listing repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{DiscountListing, ListingId};
use crate::domain::DomainError;

/// Repository trait for discount listing storage
#[async_trait]
pub trait ListingRepository: Send + Sync + Debug {
    /// Insert a new listing
    async fn create(&self, listing: DiscountListing) -> Result<DiscountListing, DomainError>;

    /// Get a listing by its ID
    async fn get(&self, id: &ListingId) -> Result<Option<DiscountListing>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock listing repository for testing
    #[derive(Debug, Default)]
    pub struct MockListingRepository {
        listings: Arc<RwLock<HashMap<ListingId, DiscountListing>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockListingRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        pub async fn len(&self) -> usize {
            self.listings.read().await.len()
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ListingRepository for MockListingRepository {
        async fn create(&self, listing: DiscountListing) -> Result<DiscountListing, DomainError> {
            self.check_should_fail().await?;
            let mut listings = self.listings.write().await;
            listings.insert(listing.id(), listing.clone());
            Ok(listing)
        }

        async fn get(&self, id: &ListingId) -> Result<Option<DiscountListing>, DomainError> {
            self.check_should_fail().await?;
            let listings = self.listings.read().await;
            Ok(listings.get(id).cloned())
        }
    }
}
