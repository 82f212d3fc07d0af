// src/handlers/ads.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use validator::Validate;

use crate::{
    error::AppError,
    models::listing::{Listing, ListingField, ensure_complete, validate_listing},
    utils::generator::AdGenerator,
};

/// DTO for a batch of listings.
///
/// Listings arrive as loose JSON objects so that non-string fields can be
/// reported as type errors instead of generic deserialization failures.
#[derive(Debug, Deserialize, Validate)]
pub struct ListingBatchRequest {
    #[validate(length(max = 100, message = "A batch may contain at most 100 listings."))]
    pub listings: Vec<Map<String, Value>>,

    /// Reject the whole batch when any listing lacks a required field.
    #[serde(default)]
    pub strict: bool,
}

impl ListingBatchRequest {
    fn into_listings(self) -> Result<Vec<Listing>, AppError> {
        if let Err(validation_errors) = self.validate() {
            return Err(AppError::BadRequest(validation_errors.to_string()));
        }

        self.listings
            .iter()
            .enumerate()
            .map(|(index, object)| Listing::from_json(index, object))
            .collect()
    }
}

/// Validation outcome for one listing of a batch.
#[derive(Debug, Serialize)]
pub struct ListingReport {
    pub index: usize,
    pub valid: bool,
    pub missing: Vec<ListingField>,
}

/// Generates plain-text ads for a batch of listings.
///
/// The text is not HTML-escaped; JSON encoding is the only escaping applied.
pub async fn generate_ads(
    State(generator): State<AdGenerator>,
    Json(payload): Json<ListingBatchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let strict = payload.strict;
    let listings = payload.into_listings()?;

    if strict {
        for (index, listing) in listings.iter().enumerate() {
            ensure_complete(index, listing)?;
        }
    }

    let ads = generator.generate_bulk_ads(&listings);
    tracing::info!(
        "Generated {} ads for {}",
        ads.len(),
        generator.store().store_name
    );

    Ok(Json(json!({ "ads": ads })))
}

/// Reports the missing required fields of each listing.
pub async fn validate_listings(
    Json(payload): Json<ListingBatchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let listings = payload.into_listings()?;

    let results: Vec<ListingReport> = listings
        .iter()
        .enumerate()
        .map(|(index, listing)| {
            let missing: Vec<ListingField> = validate_listing(listing).into_iter().collect();
            ListingReport {
                index,
                valid: missing.is_empty(),
                missing,
            }
        })
        .collect();

    Ok(Json(json!({ "results": results })))
}
