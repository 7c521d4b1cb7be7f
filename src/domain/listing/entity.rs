//! Discount listing entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Listing identifier, generated on submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(Uuid);

impl ListingId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::str::FromStr for ListingId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptive fields of a listing as submitted
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewListing {
    pub name: Option<String>,
    pub establishment_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub location: Option<String>,
    pub discount: String,
    pub review: Option<String>,
}

/// A stored discount offer at an establishment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountListing {
    id: ListingId,
    name: Option<String>,
    establishment_name: String,
    address: String,
    city: String,
    state: String,
    zip: String,
    location: Option<String>,
    discount: String,
    review: Option<String>,
    created_at: DateTime<Utc>,
}

impl DiscountListing {
    /// Create a listing with a fresh identifier
    pub fn new(listing: NewListing) -> Self {
        Self::restore(ListingId::generate(), listing, Utc::now())
    }

    /// Rebuild a listing from persisted state
    pub fn restore(id: ListingId, listing: NewListing, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: listing.name,
            establishment_name: listing.establishment_name,
            address: listing.address,
            city: listing.city,
            state: listing.state,
            zip: listing.zip,
            location: listing.location,
            discount: listing.discount,
            review: listing.review,
            created_at,
        }
    }

    pub fn id(&self) -> ListingId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn establishment_name(&self) -> &str {
        &self.establishment_name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn discount(&self) -> &str {
        &self.discount
    }

    pub fn review(&self) -> Option<&str> {
        self.review.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
