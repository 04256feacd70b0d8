//! Shared-secret header authentication.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::config::Config;
use crate::state::AppState;
use crate::utils::error::AppError;

/// Rejects any `/api` request that does not carry the configured secret in
/// the configured header.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !is_authorized(request.headers(), &state.config) {
        return Err(AppError::AuthError(
            "Missing or invalid API key".to_string(),
        ));
    }

    Ok(next.run(request).await)
}

fn is_authorized(headers: &HeaderMap, config: &Config) -> bool {
    headers
        .get(config.api_key_header.as_str())
        .and_then(|value| value.to_str().ok())
        .map(|value| value == config.api_key)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn config() -> Config {
        Config {
            database_url: String::new(),
            host: "127.0.0.1".into(),
            port: 0,
            api_key_header: "x-api-key".into(),
            api_key: "sekret".into(),
        }
    }

    #[test]
    fn accepts_matching_secret() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("sekret"));
        assert!(is_authorized(&headers, &config()));
    }

    #[test]
    fn rejects_missing_header() {
        assert!(!is_authorized(&HeaderMap::new(), &config()));
    }

    #[test]
    fn rejects_wrong_secret() {
        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("guess"));
        assert!(!is_authorized(&headers, &config()));
    }
}
