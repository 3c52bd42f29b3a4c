//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::rest::{debug, events, health, statistics, ApiError};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::root).fallback(method_not_allowed))
        .route("/health", get(health::health_check).fallback(method_not_allowed))
        .route("/event", post(events::record_event).fallback(method_not_allowed))
        .route(
            "/statistics",
            get(statistics::get_statistics).fallback(method_not_allowed),
        )
        .route("/debug/events", get(debug::list_events).fallback(method_not_allowed))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found("Endpoint not found")
}

async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed("Method not allowed")
}
