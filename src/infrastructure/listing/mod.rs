//! Discount listing infrastructure

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresListingRepository;
pub use repository::InMemoryListingRepository;
pub use service::ListingService;
