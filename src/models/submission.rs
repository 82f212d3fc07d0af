// src/models/submission.rs

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use url::form_urlencoded;

use crate::{
    error::AppError,
    models::listing::{Listing, ListingField},
};

pub const MIN_QUANTITY: usize = 1;
pub const MAX_QUANTITY: usize = 100;

pub const INVALID_QUANTITY_MESSAGE: &str =
    "Invalid quantity. Please enter a number between 1 and 100.";

/// Plain integers, or decimals whose fractional part is dropped ("2.5" -> 2).
static QUANTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?\d+)(?:\.\d*)?$").expect("quantity pattern is valid")
});

/// A single raw form value: either a scalar (`name=v`) or a repeated
/// collection (`name[]=a&name[]=b`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

/// An untrusted form submission, carried explicitly into the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub quantity: Option<FieldValue>,
    pub fields: HashMap<String, FieldValue>,
}

impl Submission {
    /// Decodes an `application/x-www-form-urlencoded` body.
    ///
    /// Keys ending in `[]` accumulate into a [`FieldValue::List`]; a plain key
    /// sets a [`FieldValue::Text`], replacing whatever was there.
    pub fn from_form(body: &[u8]) -> Self {
        let mut submission = Submission::default();

        for (key, value) in form_urlencoded::parse(body) {
            let value = value.into_owned();
            let (name, repeated) = match key.strip_suffix("[]") {
                Some(name) => (name.to_string(), true),
                None => (key.to_string(), false),
            };

            if name == "quantity" {
                submission.quantity = Some(merge(submission.quantity.take(), value, repeated));
            } else {
                let existing = submission.fields.remove(&name);
                submission.fields.insert(name, merge(existing, value, repeated));
            }
        }

        submission
    }

    /// Builds a submission from already-separated field collections.
    pub fn with_fields<I>(quantity: &str, fields: I) -> Self
    where
        I: IntoIterator<Item = (ListingField, Vec<String>)>,
    {
        Submission {
            quantity: Some(FieldValue::Text(quantity.to_string())),
            fields: fields
                .into_iter()
                .map(|(field, values)| (field.as_str().to_string(), FieldValue::List(values)))
                .collect(),
        }
    }

    /// The validated batch size.
    pub fn quantity(&self) -> Result<usize, AppError> {
        match &self.quantity {
            Some(FieldValue::Text(raw)) => parse_quantity(raw),
            _ => Err(AppError::InputValidation(INVALID_QUANTITY_MESSAGE.to_string())),
        }
    }

    /// Ensures every field arrived as a collection, naming the first that did not.
    pub fn require_collections(&self) -> Result<(), AppError> {
        for field in ListingField::ALL {
            if !matches!(self.fields.get(field.as_str()), Some(FieldValue::List(_))) {
                return Err(AppError::InputValidation(format!(
                    "Missing form field: {}",
                    field
                )));
            }
        }
        Ok(())
    }

    /// Assembles exactly `quantity` listings, index by index.
    ///
    /// Short collections and scalar fields yield empty strings.
    pub fn parse_listings(&self) -> Result<Vec<Listing>, AppError> {
        let quantity = self.quantity()?;
        Ok((0..quantity).map(|index| self.listing_at(index)).collect())
    }

    fn listing_at(&self, index: usize) -> Listing {
        Listing::from_fn(|field| match self.fields.get(field.as_str()) {
            Some(FieldValue::List(values)) => values.get(index).cloned().unwrap_or_default(),
            _ => String::new(),
        })
    }
}

fn merge(existing: Option<FieldValue>, value: String, repeated: bool) -> FieldValue {
    match (existing, repeated) {
        (Some(FieldValue::List(mut values)), true) => {
            values.push(value);
            FieldValue::List(values)
        }
        (_, true) => FieldValue::List(vec![value]),
        (_, false) => FieldValue::Text(value),
    }
}

/// Parses an untrusted quantity string into a batch size in `[1, 100]`.
pub fn parse_quantity(raw: &str) -> Result<usize, AppError> {
    let invalid = || AppError::InputValidation(INVALID_QUANTITY_MESSAGE.to_string());

    let caps = QUANTITY_PATTERN.captures(raw.trim()).ok_or_else(invalid)?;
    let whole: i64 = caps[1].parse().map_err(|_| invalid())?;

    usize::try_from(whole)
        .ok()
        .filter(|q| (MIN_QUANTITY..=MAX_QUANTITY).contains(q))
        .ok_or_else(invalid)
}
