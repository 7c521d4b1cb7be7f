//! Discount listing endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::state::AppState;
use crate::api::types::{require, text, ApiError, Json, RequestValidationError};
use crate::domain::listing::{validate_field_length, DiscountListing, ListingId, NewListing};

/// Listing submission request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitListingRequest {
    pub name: Option<Value>,
    pub establishment_name: Option<Value>,
    pub address: Option<Value>,
    pub city: Option<Value>,
    pub state: Option<Value>,
    pub zip: Option<Value>,
    pub location: Option<Value>,
    pub discount: Option<Value>,
    pub review: Option<Value>,
}

impl SubmitListingRequest {
    fn validate(self) -> Result<NewListing, RequestValidationError> {
        let listing = NewListing {
            establishment_name: require("establishmentName", self.establishment_name)?,
            address: require("address", self.address)?,
            city: require("city", self.city)?,
            state: require("state", self.state)?,
            zip: require("zip", self.zip)?,
            discount: require("discount", self.discount)?,
            name: text("name", self.name)?,
            location: text("location", self.location)?,
            review: text("review", self.review)?,
        };

        let fields = [
            ("name", listing.name.as_deref()),
            ("establishmentName", Some(listing.establishment_name.as_str())),
            ("address", Some(listing.address.as_str())),
            ("city", Some(listing.city.as_str())),
            ("state", Some(listing.state.as_str())),
            ("zip", Some(listing.zip.as_str())),
            ("location", listing.location.as_deref()),
            ("discount", Some(listing.discount.as_str())),
            ("review", listing.review.as_deref()),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                validate_field_length(field, value)?;
            }
        }

        Ok(listing)
    }
}

/// Success envelope for a submission
#[derive(Debug, Serialize)]
pub struct SubmitListingResponse {
    pub error: bool,
    pub message: String,
    pub id: String,
    pub listing: DiscountListing,
}

/// Submit a discount listing
///
/// POST /submit
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitListingRequest>,
) -> Result<(StatusCode, Json<SubmitListingResponse>), ApiError> {
    let new_listing = request.validate()?;
    let listing = state.listing_service.submit(new_listing).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitListingResponse {
            error: false,
            message: "Listing submitted".to_string(),
            id: listing.id().to_string(),
            listing,
        }),
    ))
}

/// Get a listing by ID
///
/// GET /listings/{id}
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DiscountListing>, ApiError> {
    let listing_id: ListingId = id
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid listing ID '{}'", id)))?;

    state
        .listing_service
        .get(&listing_id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Listing '{}' not found", id)))
}
