//! Discount listing domain

mod entity;
mod repository;
mod validation;

pub use entity::{DiscountListing, ListingId, NewListing};
pub use repository::ListingRepository;
pub use validation::{validate_field_length, ListingValidationError};

#[cfg(test)]
pub use repository::mock::MockListingRepository;
