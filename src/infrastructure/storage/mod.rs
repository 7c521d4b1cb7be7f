//! Storage backends
//!
//! The process opens one `Database` at startup; repositories share its pool.

mod database;
mod factory;
mod postgres;

pub use database::Database;
pub use factory::{StorageConfig, StorageType};
pub use postgres::{is_unique_violation, PostgresConfig};
