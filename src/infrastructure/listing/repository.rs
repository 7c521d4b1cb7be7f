//! In-memory listing repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::listing::{DiscountListing, ListingId, ListingRepository};
use crate::domain::DomainError;

/// In-memory implementation of ListingRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryListingRepository {
    listings: Arc<RwLock<HashMap<ListingId, DiscountListing>>>,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn create(&self, listing: DiscountListing) -> Result<DiscountListing, DomainError> {
        let mut listings = self.listings.write().await;

        if listings.contains_key(&listing.id()) {
            return Err(DomainError::conflict(format!(
                "Listing '{}' already exists",
                listing.id()
            )));
        }

        listings.insert(listing.id(), listing.clone());
        Ok(listing)
    }

    async fn get(&self, id: &ListingId) -> Result<Option<DiscountListing>, DomainError> {
        let listings = self.listings.read().await;
        Ok(listings.get(id).cloned())
    }
}
