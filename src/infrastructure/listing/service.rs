//! Listing submission service

use std::sync::Arc;

use tracing::info;

use crate::domain::listing::{DiscountListing, ListingId, ListingRepository, NewListing};
use crate::domain::DomainError;

/// Persists discount listings as submitted; fields are not reinterpreted.
#[derive(Debug)]
pub struct ListingService<R: ListingRepository> {
    repository: Arc<R>,
}

impl<R: ListingRepository> ListingService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Store one listing under a freshly generated ID
    pub async fn submit(&self, listing: NewListing) -> Result<DiscountListing, DomainError> {
        let listing = self.repository.create(DiscountListing::new(listing)).await?;

        info!(
            listing_id = %listing.id(),
            establishment = %listing.establishment_name(),
            "Listing submitted"
        );

        Ok(listing)
    }

    /// Get a listing by ID
    pub async fn get(&self, id: &ListingId) -> Result<Option<DiscountListing>, DomainError> {
        self.repository.get(id).await
    }
}
