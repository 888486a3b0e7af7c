use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/message", post(handlers::post_message))
        .route("/events", get(handlers::state_events))
        .route(
            "/settings",
            get(handlers::get_settings).put(handlers::update_settings),
        )
        .route("/rules", get(handlers::get_rules))
        .route("/navigate", post(handlers::navigate))
        .route("/presence", post(handlers::report_presence))
        .route("/activity", post(handlers::report_activity))
        .with_state(state)
}
