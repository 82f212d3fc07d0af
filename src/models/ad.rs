// src/models/ad.rs

use serde::{Deserialize, Serialize};

/// Rendered ad text derived from a single listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    pub title: String,

    /// Passed through from the listing as entered.
    pub price: String,

    pub body: String,

    /// Name of the store the ad is posted for.
    pub store: String,
}
