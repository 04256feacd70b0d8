use std::env;

pub mod cors;
pub mod headers;

pub use cors::create_cors_layer;
pub use headers::create_privacy_headers_layer;

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Name of the shared-secret request header, stored lowercased.
    pub api_key_header: String,
    /// Shared secret expected in that header on every `/api` request.
    pub api_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/rael".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .expect("PORT must be a number"),
            api_key_header: env::var("API_KEY_HEADER")
                .unwrap_or_else(|_| "x-api-key".to_string())
                .to_lowercase(),
            api_key: env::var("API_KEY")
                .unwrap_or_else(|_| "dev-key-change-in-production".to_string()),
        }
    }
}
