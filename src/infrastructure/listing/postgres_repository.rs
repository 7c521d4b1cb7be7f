//! PostgreSQL listing repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::listing::{DiscountListing, ListingId, ListingRepository, NewListing};
use crate::domain::DomainError;

/// PostgreSQL implementation of ListingRepository
#[derive(Debug, Clone)]
pub struct PostgresListingRepository {
    pool: PgPool,
}

impl PostgresListingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingRepository for PostgresListingRepository {
    async fn create(&self, listing: DiscountListing) -> Result<DiscountListing, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO discount_listings (id, name, establishment_name, address, city, state,
                                           zip, location, discount, review, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(listing.id().as_uuid())
        .bind(listing.name())
        .bind(listing.establishment_name())
        .bind(listing.address())
        .bind(listing.city())
        .bind(listing.state())
        .bind(listing.zip())
        .bind(listing.location())
        .bind(listing.discount())
        .bind(listing.review())
        .bind(listing.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create listing: {}", e)))?;

        Ok(listing)
    }

    async fn get(&self, id: &ListingId) -> Result<Option<DiscountListing>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, establishment_name, address, city, state, zip,
                   location, discount, review, created_at
            FROM discount_listings
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get listing: {}", e)))?;

        Ok(row.map(|row| row_to_listing(&row)))
    }
}

fn row_to_listing(row: &sqlx::postgres::PgRow) -> DiscountListing {
    let fields = NewListing {
        name: row.get("name"),
        establishment_name: row.get("establishment_name"),
        address: row.get("address"),
        city: row.get("city"),
        state: row.get("state"),
        zip: row.get("zip"),
        location: row.get("location"),
        discount: row.get("discount"),
        review: row.get("review"),
    };

    DiscountListing::restore(
        ListingId::from_uuid(row.get("id")),
        fields,
        row.get("created_at"),
    )
}
