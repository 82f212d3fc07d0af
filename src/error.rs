// src/error.rs

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use url::form_urlencoded;

use crate::models::listing::ListingField;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 303 back to the entry form, with the message in the query string
    InputValidation(String),

    // 422 Unprocessable Entity, listing at `index` lacks required fields
    MissingFields {
        index: usize,
        fields: Vec<ListingField>,
    },

    // 400 Bad Request, a non-string arrived where text was expected
    TypeError(String),

    // 400 Bad Request
    BadRequest(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputValidation(msg)
            | AppError::TypeError(msg)
            | AppError::BadRequest(msg)
            | AppError::InternalServerError(msg) => f.write_str(msg),
            AppError::MissingFields { index, fields } => {
                let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
                write!(f, "Listing {} is missing: {}", index, names.join(", "))
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Location of the entry form carrying `message` as its `error` parameter.
pub fn entry_form_location(message: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("/?error={}", encoded)
}

/// Implements `IntoResponse` for `AppError`.
/// Input problems redirect back to the form; everything else is a JSON body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match self {
            AppError::InputValidation(_) => {
                tracing::warn!("Rejected form input: {}", message);
                let location = entry_form_location(&message);
                return (StatusCode::SEE_OTHER, [(header::LOCATION, location)], message)
                    .into_response();
            }
            AppError::MissingFields { index, fields } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": message, "index": index, "missing": fields }),
            ),
            AppError::TypeError(_) | AppError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            AppError::InternalServerError(_) => {
                tracing::error!("Internal Server Error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_encodes_message() {
        assert_eq!(
            entry_form_location("Missing form field: type"),
            "/?error=Missing+form+field%3A+type"
        );
    }

    #[test]
    fn input_validation_redirects_to_entry_form() {
        let response = AppError::InputValidation("Invalid quantity.".into()).into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/?error=Invalid+quantity."
        );
    }

    #[test]
    fn missing_fields_is_unprocessable() {
        let err = AppError::MissingFields {
            index: 2,
            fields: vec![ListingField::Brand, ListingField::Price],
        };
        assert_eq!(err.to_string(), "Listing 2 is missing: brand, price");
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn type_error_is_bad_request() {
        let response = AppError::TypeError("field 'brand' must be a string".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
