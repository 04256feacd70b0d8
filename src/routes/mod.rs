use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_privacy_headers_layer};
use crate::handlers::{events, health_check, registration};
use crate::middleware::require_api_key;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/events/get_event", get(events::get_event))
        .route("/events/get_active_events", get(events::get_active_events))
        .route("/registration/get_all_id", get(registration::get_all_id))
        .route("/registration/print_cards", get(registration::print_cards))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes)
        .layer(create_privacy_headers_layer())
        .layer(create_cors_layer(&state.config.api_key_header))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
