// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{ads, pages},
    state::AppState,
};

/// Assembles the main application router.
///
/// * HTML form flow at the root (entry form, listing rows, results).
/// * JSON API under `/api`, behind a CORS layer built from the configured origins.
/// * Applies request tracing globally.
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let page_routes = Router::new()
        .route("/", get(pages::index))
        .route("/listings", post(pages::listing_form))
        .route("/results", post(pages::results));

    let api_routes = Router::new()
        .route("/ads", post(ads::generate_ads))
        .route("/listings/validate", post(ads::validate_listings))
        .layer(cors);

    Router::new()
        .merge(page_routes)
        .nest("/api", api_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
