// src/models/listing.rs

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::AppError, utils::html::sanitize};

/// Names of the eight listing attributes, in form column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingField {
    Type,
    Brand,
    Model,
    Size,
    Color,
    Condition,
    Carrier,
    Price,
}

impl ListingField {
    pub const ALL: [ListingField; 8] = [
        ListingField::Type,
        ListingField::Brand,
        ListingField::Model,
        ListingField::Size,
        ListingField::Color,
        ListingField::Condition,
        ListingField::Carrier,
        ListingField::Price,
    ];

    /// Fields that must be non-blank. Size and color are optional.
    pub const REQUIRED: [ListingField; 6] = [
        ListingField::Brand,
        ListingField::Model,
        ListingField::Type,
        ListingField::Condition,
        ListingField::Carrier,
        ListingField::Price,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ListingField::Type => "type",
            ListingField::Brand => "brand",
            ListingField::Model => "model",
            ListingField::Size => "size",
            ListingField::Color => "color",
            ListingField::Condition => "condition",
            ListingField::Carrier => "carrier",
            ListingField::Price => "price",
        }
    }
}

impl fmt::Display for ListingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One electronics item's ad-relevant attributes.
///
/// Every field is always present; an absent input becomes an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    pub brand: String,
    pub model: String,
    pub size: String,
    pub color: String,
    pub condition: String,
    pub carrier: String,
    pub price: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Listing {
    pub fn get(&self, field: ListingField) -> &str {
        match field {
            ListingField::Type => &self.kind,
            ListingField::Brand => &self.brand,
            ListingField::Model => &self.model,
            ListingField::Size => &self.size,
            ListingField::Color => &self.color,
            ListingField::Condition => &self.condition,
            ListingField::Carrier => &self.carrier,
            ListingField::Price => &self.price,
        }
    }

    /// Builds a listing by looking up each field through `value_of`.
    pub fn from_fn<F>(mut value_of: F) -> Self
    where
        F: FnMut(ListingField) -> String,
    {
        Self {
            brand: value_of(ListingField::Brand),
            model: value_of(ListingField::Model),
            size: value_of(ListingField::Size),
            color: value_of(ListingField::Color),
            condition: value_of(ListingField::Condition),
            carrier: value_of(ListingField::Carrier),
            price: value_of(ListingField::Price),
            kind: value_of(ListingField::Type),
        }
    }

    /// Converts a loosely typed JSON object into a listing.
    ///
    /// Absent and `null` fields become empty strings. Any other non-string
    /// value is rejected with [`AppError::TypeError`] rather than coerced.
    pub fn from_json(index: usize, object: &Map<String, Value>) -> Result<Self, AppError> {
        let mut listing = Listing::default();
        for field in ListingField::ALL {
            let value = match object.get(field.as_str()) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => {
                    return Err(AppError::TypeError(format!(
                        "Listing {}: field '{}' must be a string, got {}",
                        index,
                        field,
                        json_type_name(other)
                    )));
                }
            };
            listing.set(field, value);
        }
        Ok(listing)
    }

    /// Returns a copy with every field passed through [`sanitize`].
    pub fn sanitized(&self) -> Self {
        Self::from_fn(|field| sanitize(self.get(field)))
    }

    fn set(&mut self, field: ListingField, value: String) {
        let slot = match field {
            ListingField::Type => &mut self.kind,
            ListingField::Brand => &mut self.brand,
            ListingField::Model => &mut self.model,
            ListingField::Size => &mut self.size,
            ListingField::Color => &mut self.color,
            ListingField::Condition => &mut self.condition,
            ListingField::Carrier => &mut self.carrier,
            ListingField::Price => &mut self.price,
        };
        *slot = value;
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns the required fields that are blank after trimming.
///
/// An empty set means the listing is valid.
pub fn validate_listing(listing: &Listing) -> BTreeSet<ListingField> {
    ListingField::REQUIRED
        .into_iter()
        .filter(|field| listing.get(*field).trim().is_empty())
        .collect()
}

/// Like [`validate_listing`], but reports missing fields as an error.
pub fn ensure_complete(index: usize, listing: &Listing) -> Result<(), AppError> {
    let missing = validate_listing(listing);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingFields {
            index,
            fields: missing.into_iter().collect(),
        })
    }
}
