//! Liveness endpoints

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::state::AppState;
use crate::utils::time::to_rfc3339;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub route: &'static str,
    pub description: &'static str,
}

/// Response for GET /
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub server_time: String,
    pub window_secs: i64,
    pub endpoints: Vec<EndpointInfo>,
}

const ENDPOINTS: &[(&str, &str)] = &[
    ("POST /event", "Store a new event"),
    ("GET /statistics", "Get statistics for the trailing window"),
    ("GET /health", "Liveness check"),
    ("GET /debug/events", "View all stored events"),
];

/// GET / - Service banner
pub async fn root(State(state): State<Arc<AppState>>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Event Statistics API is running",
        version: crate::VERSION,
        server_time: to_rfc3339(state.store.now()),
        window_secs: state.store.window().num_seconds(),
        endpoints: ENDPOINTS
            .iter()
            .map(|&(route, description)| EndpointInfo { route, description })
            .collect(),
    })
}
