// src/utils/generator.rs

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::{ad::Ad, listing::Listing, store::StoreIdentity};

/// Ad body text. `{name}` tokens are filled from the listing and store identity.
pub const BODY_TEMPLATE: &str = concat!(
    "Hey everyone, we currently have an {brand} {model} {size} up for sale! ",
    "This {type} is in {condition} condition, it's clean for activation ",
    "and is ready to be activated on {carrier}. ",
    "All {type} purchases from us come with a 90-day warranty so you can rest ",
    "assured you'll have no problems with your new {type}.",
    "\n\n",
    "We also carry a wide range of accessories such as colored tempered glass, ",
    "cases, chargers, portable battery packs etc. Please stop by and check out our ",
    "growing inventory. We repair all electronic devices from phones and tablets to ",
    "computers, laptops, game consoles and more!",
    "\n\n",
    "All phones and tablets include charger block and cable",
    "\n\n",
    "Financing through PayPal credit is available for all purchases over $99, ",
    "no payments and no interest for the first 6 months!",
    "\n\n",
    "{storeName}\n",
    "{storeAddress}\n",
    "Hours of operation: {storeHours}\n",
    "Please Call: {phoneCall} Text: {phoneText}",
);

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z]+)\}").expect("placeholder pattern is valid"));

/// Formats the ad title line. No escaping happens here.
pub fn generate_title(brand: &str, model: &str, size: &str, color: &str, carrier: &str) -> String {
    format!("{brand} {model} {size} {color} ({carrier}) 90-Day Warranty!!!")
}

/// Renders ads for one store.
#[derive(Debug, Clone, Default)]
pub struct AdGenerator {
    store: StoreIdentity,
}

impl AdGenerator {
    pub fn new(store: StoreIdentity) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &StoreIdentity {
        &self.store
    }

    /// Fills [`BODY_TEMPLATE`].
    ///
    /// Substitution is a single pass over the template, so a field value that
    /// itself looks like `{type}` is emitted literally.
    pub fn generate_body(
        &self,
        brand: &str,
        model: &str,
        size: &str,
        kind: &str,
        condition: &str,
        carrier: &str,
    ) -> String {
        PLACEHOLDER
            .replace_all(BODY_TEMPLATE, |caps: &Captures| {
                let value: &str = match &caps[1] {
                    "brand" => brand,
                    "model" => model,
                    "size" => size,
                    "type" => kind,
                    "condition" => condition,
                    "carrier" => carrier,
                    "storeName" => &self.store.store_name,
                    "storeAddress" => &self.store.store_address,
                    "storeHours" => &self.store.store_hours,
                    "phoneCall" => &self.store.phone_call,
                    "phoneText" => &self.store.phone_text,
                    _ => &caps[0],
                };
                value.to_string()
            })
            .into_owned()
    }

    pub fn generate_ad(&self, listing: &Listing) -> Ad {
        Ad {
            title: generate_title(
                &listing.brand,
                &listing.model,
                &listing.size,
                &listing.color,
                &listing.carrier,
            ),
            price: listing.price.clone(),
            body: self.generate_body(
                &listing.brand,
                &listing.model,
                &listing.size,
                &listing.kind,
                &listing.condition,
                &listing.carrier,
            ),
            store: self.store.store_name.clone(),
        }
    }

    /// One ad per listing, in input order.
    pub fn generate_bulk_ads(&self, listings: &[Listing]) -> Vec<Ad> {
        listings.iter().map(|l| self.generate_ad(l)).collect()
    }

    /// Sanitizes every listing field and the store identity before
    /// rendering, for HTML output.
    pub fn generate_safe_ads(&self, listings: &[Listing]) -> Vec<Ad> {
        let safe = AdGenerator::new(self.store.sanitized());
        listings
            .iter()
            .map(|l| safe.generate_ad(&l.sanitized()))
            .collect()
    }
}
