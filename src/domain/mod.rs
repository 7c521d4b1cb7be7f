//! Domain layer - entities, validation rules and repository traits

pub mod account;
pub mod error;
pub mod listing;

pub use account::{Account, AccountRepository, AccountType, NewAccount};
pub use error::DomainError;
pub use listing::{DiscountListing, ListingId, ListingRepository, NewListing};
