// src/config.rs

use std::env;
use dotenvy::dotenv;

use crate::models::store::StoreIdentity;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub rust_log: String,
    pub log_dir: String,
    /// Origins allowed to call the JSON API from a browser.
    pub allowed_origins: Vec<String>,
    pub store: StoreIdentity,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: String| get(key).unwrap_or(default);

        let bind_addr = or("BIND_ADDR", "0.0.0.0:3000".to_string());

        let rust_log = or("RUST_LOG", "info".to_string());

        let log_dir = or("LOG_DIR", "logs".to_string());

        let allowed_origins = or(
            "ALLOWED_ORIGINS",
            "http://localhost:3000,http://127.0.0.1:3000".to_string(),
        )
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

        let defaults = StoreIdentity::default();
        let store = StoreIdentity {
            store_name: or("STORE_NAME", defaults.store_name),
            store_address: or("STORE_ADDRESS", defaults.store_address),
            store_hours: or("STORE_HOURS", defaults.store_hours),
            phone_call: or("STORE_PHONE_CALL", defaults.phone_call),
            phone_text: or("STORE_PHONE_TEXT", defaults.phone_text),
        };

        Self {
            bind_addr,
            rust_log,
            log_dir,
            allowed_origins,
            store,
        }
    }
}
