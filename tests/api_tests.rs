// tests/api_tests.rs

use quick_lister::{config::Config, models::store::StoreIdentity, routes, state::AppState};
use serde_json::{Value, json};

/// Helper function to spawn the app on a random port for testing.
/// Returns the base URL (e.g., "http://127.0.0.1:12345").
async fn spawn_app_with(config: Config) -> String {
    let state = AppState::new(config);
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

async fn spawn_app() -> String {
    spawn_app_with(Config {
        rust_log: "error".to_string(),
        ..Config::default()
    })
    .await
}

fn listing(brand: &str) -> Value {
    json!({
        "type": "Phone",
        "brand": brand,
        "model": "Galaxy S23",
        "size": "256 GB",
        "color": "White",
        "condition": "Excellent",
        "carrier": "Verizon",
        "price": "$650"
    })
}

async fn post_json(address: &str, path: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}{}", address, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request")
}

#[tokio::test]
async fn unknown_path_is_404() {
    // Arrange
    let address = spawn_app().await;
    let client = reqwest::Client::new();

    // Act
    let response = client
        .get(format!("{}/random_path_that_does_not_exist", address))
        .send()
        .await
        .expect("Failed to execute request");

    // Assert
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn generate_ads_returns_one_ad_per_listing_in_order() {
    let address = spawn_app().await;

    let response = post_json(
        &address,
        "/api/ads",
        json!({ "listings": [listing("Samsung"), listing("Apple"), listing("Google")] }),
    )
    .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let ads = body["ads"].as_array().expect("ads array");

    assert_eq!(ads.len(), 3);
    assert_eq!(
        ads[0]["title"],
        "Samsung Galaxy S23 256 GB White (Verizon) 90-Day Warranty!!!"
    );
    assert!(ads[1]["title"].as_str().unwrap().starts_with("Apple"));
    assert!(ads[2]["title"].as_str().unwrap().starts_with("Google"));
    assert_eq!(ads[0]["price"], "$650");
    assert_eq!(ads[0]["store"], "Cell Phone Repair of Gainesville");
    assert!(ads[0]["body"].as_str().unwrap().contains("This Phone is in Excellent condition"));
}

#[tokio::test]
async fn generate_ads_with_empty_batch_returns_empty_list() {
    let address = spawn_app().await;

    let response = post_json(&address, "/api/ads", json!({ "listings": [] })).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["ads"], json!([]));
}

#[tokio::test]
async fn generate_ads_keeps_text_unescaped() {
    let address = spawn_app().await;
    let mut item = listing("<b>Samsung</b>");
    item["carrier"] = json!("AT&T");

    let response = post_json(&address, "/api/ads", json!({ "listings": [item] })).await;

    let body: Value = response.json().await.unwrap();
    let title = body["ads"][0]["title"].as_str().unwrap();
    assert!(title.starts_with("<b>Samsung</b>"));
    assert!(title.contains("(AT&T)"));
}

#[tokio::test]
async fn generate_ads_rejects_non_string_fields() {
    let address = spawn_app().await;
    let mut item = listing("Samsung");
    item["price"] = json!(650);

    let response = post_json(&address, "/api/ads", json!({ "listings": [item] })).await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("price"));
}

#[tokio::test]
async fn generate_ads_rejects_oversized_batch() {
    let address = spawn_app().await;
    let listings: Vec<Value> = (0..101).map(|i| listing(&format!("Brand{}", i))).collect();

    let response = post_json(&address, "/api/ads", json!({ "listings": listings })).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn strict_generation_reports_missing_fields() {
    let address = spawn_app().await;
    let mut incomplete = listing("");
    incomplete["price"] = json!("");
    incomplete["carrier"] = json!("  ");

    let response = post_json(
        &address,
        "/api/ads",
        json!({ "listings": [listing("Apple"), incomplete], "strict": true }),
    )
    .await;

    assert_eq!(response.status().as_u16(), 422);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["index"], 1);
    assert_eq!(body["missing"], json!(["brand", "carrier", "price"]));
}

#[tokio::test]
async fn lenient_generation_accepts_incomplete_listings() {
    let address = spawn_app().await;

    let response = post_json(
        &address,
        "/api/ads",
        json!({ "listings": [{ "brand": "Apple" }] }),
    )
    .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["ads"][0]["title"],
        "Apple    () 90-Day Warranty!!!"
    );
}

#[tokio::test]
async fn validate_reports_each_listing() {
    let address = spawn_app().await;
    let mut no_color = listing("Apple");
    no_color["color"] = json!("");

    let response = post_json(
        &address,
        "/api/listings/validate",
        json!({ "listings": [no_color, { "model": "Pixel 8", "size": "128 GB" }] }),
    )
    .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let results = body["results"].as_array().unwrap();

    assert_eq!(results[0]["valid"], true);
    assert_eq!(results[0]["missing"], json!([]));
    assert_eq!(results[1]["valid"], false);
    assert_eq!(
        results[1]["missing"],
        json!(["type", "brand", "condition", "carrier", "price"])
    );
}

#[tokio::test]
async fn configured_store_identity_appears_in_ads() {
    let address = spawn_app_with(Config {
        rust_log: "error".to_string(),
        store: StoreIdentity {
            store_name: "Gadget Barn".to_string(),
            phone_call: "555-0100".to_string(),
            ..StoreIdentity::default()
        },
        ..Config::default()
    })
    .await;

    let response = post_json(&address, "/api/ads", json!({ "listings": [listing("LG")] })).await;

    let body: Value = response.json().await.unwrap();
    let ad = &body["ads"][0];
    assert_eq!(ad["store"], "Gadget Barn");
    assert!(ad["body"].as_str().unwrap().contains("Gadget Barn\n"));
    assert!(ad["body"].as_str().unwrap().contains("Please Call: 555-0100"));
}
