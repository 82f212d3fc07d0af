// src/models/store.rs

use serde::{Deserialize, Serialize};

use crate::utils::html::sanitize;

/// The seller's contact and business info embedded in every ad body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreIdentity {
    pub store_name: String,
    pub store_address: String,
    pub store_hours: String,
    pub phone_call: String,
    pub phone_text: String,
}

impl Default for StoreIdentity {
    fn default() -> Self {
        Self {
            store_name: "Cell Phone Repair of Gainesville".to_string(),
            store_address: "4203 NW 16th BLVD. Gainesville, FL. 32605".to_string(),
            store_hours: "Monday-Saturday 10:00am-7:00pm".to_string(),
            phone_call: "352-575-0438".to_string(),
            phone_text: "352-448-8408".to_string(),
        }
    }
}

impl StoreIdentity {
    /// Returns a copy with every field escaped for HTML.
    pub fn sanitized(&self) -> Self {
        Self {
            store_name: sanitize(&self.store_name),
            store_address: sanitize(&self.store_address),
            store_hours: sanitize(&self.store_hours),
            phone_call: sanitize(&self.phone_call),
            phone_text: sanitize(&self.phone_text),
        }
    }
}
