// src/handlers/pages.rs

use std::fmt::Write;

use axum::{
    body::Bytes,
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::{
    error::AppError,
    models::{ad::Ad, submission::Submission},
    utils::{generator::AdGenerator, html::sanitize},
};

/// `(value, label)` pairs for the product type column.
const TYPE_OPTIONS: [(&str, &str); 7] = [
    ("Phone", "Phone"),
    ("Computer", "Computer"),
    ("Console", "Game Console"),
    ("Laptop", "Laptop"),
    ("Tablet", "Tablet"),
    ("TV", "TV"),
    ("Accessory", "Accessory"),
];

const CONDITION_OPTIONS: [&str; 8] = [
    "Great", "Mint", "Excellent", "Good", "Fair", "Poor", "Broken", "As-Is",
];

const CARRIER_OPTIONS: [&str; 8] = [
    "AT&T",
    "Cricket",
    "T-Mobile",
    "Verizon",
    "Boost",
    "Straight Talk",
    "Sprint",
    "Unlocked",
];

const STYLE: &str = "
    body { background-color: #f0f0f0; margin: 0; text-align: center; font-family: sans-serif; }
    .header { width: 100%; background-color: #08c; color: white; padding: 3px; }
    .error { color: #b00; }
    td { border: .5px solid; text-align: center; }
    input { text-align: center; width: 100px; }
    .ad-container { padding-top: 3px; background-color: white; width: 100%; margin: auto; }
    .ad-table { border: .5px solid; margin: 26px auto; }
    .ad-body { text-align: left; }
";

/// Query parameters for the entry form.
#[derive(Debug, Deserialize)]
pub struct IndexParams {
    pub error: Option<String>,
}

/// Step 1: asks how many listings to prepare.
pub async fn index(Query(params): Query<IndexParams>) -> Html<String> {
    let mut content = String::from("<div class='header'><h1>Quick Lister</h1></div>");

    if let Some(error) = params.error.as_deref().map(sanitize).filter(|e| !e.is_empty()) {
        let _ = write!(content, "<p class='error'>{}</p>", error);
    }

    content.push_str(
        "<form action='/listings' method='post'>\
         <p>Please enter how many listings you want to make:</p>\
         <input type='text' name='quantity' placeholder='# of ads'> \
         <input type='submit' value='Submit'>\
         </form>",
    );

    Html(layout("Quick Lister", &content))
}

/// Step 2: renders one input row per listing.
pub async fn listing_form(body: Bytes) -> Result<Html<String>, AppError> {
    let submission = Submission::from_form(&body);
    let quantity = submission.quantity()?;

    tracing::debug!("Rendering listing form for {} rows", quantity);

    let mut content = String::from(
        "<form action='/results' method='post'>\
         <div class='header'><h1>Fill in information below and click generate button</h1></div>\
         <p><input type='submit' value='Generate Ads'></p>\
         <table class='table' style='width:100%'>\
         <tr><th>#</th><th>Type</th><th>Brand</th><th>Model</th><th>Storage Size</th>\
         <th>Color</th><th>Condition</th><th>Carrier</th><th>Price</th></tr>",
    );

    let types = select("type[]", TYPE_OPTIONS);
    let conditions = select("condition[]", CONDITION_OPTIONS.map(|c| (c, c)));
    let carriers = select("carrier[]", CARRIER_OPTIONS.map(|c| (c, c)));

    for row in 1..=quantity {
        let _ = write!(
            content,
            "<tr class='row'><td>{row}</td><td>{types}</td>\
             <td><input type='text' name='brand[]' placeholder='Brand' required></td>\
             <td><input type='text' name='model[]' placeholder='Model' required></td>\
             <td><input type='text' name='size[]' value=' GB'></td>\
             <td><input type='text' name='color[]' placeholder='Color'></td>\
             <td>{conditions}</td><td>{carriers}</td>\
             <td><input type='text' name='price[]' placeholder='$' required></td></tr>"
        );
    }

    let _ = write!(
        content,
        "</table><input type='hidden' name='quantity' value='{}'></form>",
        quantity
    );

    Ok(Html(layout("Listing Details", &content)))
}

/// Step 3: turns the submitted rows into copy-ready ads.
pub async fn results(
    State(generator): State<AdGenerator>,
    body: Bytes,
) -> Result<Html<String>, AppError> {
    let submission = Submission::from_form(&body);
    if submission.quantity.is_none() {
        return Err(AppError::InputValidation(
            "No form data received.".to_string(),
        ));
    }

    let quantity = submission.quantity()?;
    submission.require_collections()?;
    let listings = submission.parse_listings()?;
    let ads = generator.generate_safe_ads(&listings);

    tracing::info!("Generated {} ads", ads.len());

    let mut content = format!(
        "<div class='header'><h1>Below are your {} Ads</h1></div>\
         <h3>Copy the information below and paste it in to your ad.</h3>",
        quantity
    );
    for (index, ad) in ads.iter().enumerate() {
        content.push_str(&render_ad(index + 1, ad));
    }

    Ok(Html(layout("Finalized Ads", &content)))
}

/// Ad fields are expected to be escaped already.
fn render_ad(number: usize, ad: &Ad) -> String {
    format!(
        "<div class='ad-container'><table class='ad-table'>\
         <tr><th>Ad #{}</th></tr>\
         <tr><td class='ad-title'>{}<br><br>{}<br><br>{}</td></tr>\
         <tr><td class='ad-body'>{}</td></tr>\
         </table></div>",
        number,
        ad.title,
        ad.price,
        ad.store,
        ad.body.replace('\n', "<br>")
    )
}

fn select<'a, I>(name: &str, options: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut html = format!("<select name='{}'>", name);
    for (value, label) in options {
        let _ = write!(
            html,
            "<option value='{}'>{}</option>",
            sanitize(value),
            sanitize(label)
        );
    }
    html.push_str("</select>");
    html
}

fn layout(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang='en'><head><meta charset='UTF-8'>\
         <meta name='viewport' content='width=device-width, initial-scale=1.0'>\
         <title>{}</title><style>{}</style></head><body>{}</body></html>",
        title, STYLE, content
    )
}
