//! Event ingestion endpoint

use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::{info, warn};

use super::ApiError;
use crate::api::state::AppState;
use crate::utils::time::to_rfc3339;
use crate::validation::parse_event_payload;

/// Response for POST /event
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub received_timestamp: String,
    pub server_time: String,
}

/// POST /event - Store a timestamped value
///
/// Body: `{"timestamp": "2025-06-26T14:30:00Z", "value": 12.34}`
pub async fn record_event(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<RecordResponse>), ApiError> {
    let input = parse_event_payload(&body).map_err(|e| {
        warn!(error = %e, "Rejected event payload");
        ApiError::from(e)
    })?;

    state.store.record(input.timestamp, input.value);
    info!(timestamp = %input.timestamp, value = input.value, "Event recorded");

    let response = RecordResponse {
        status: "success",
        message: "Event stored successfully",
        received_timestamp: to_rfc3339(input.timestamp),
        server_time: to_rfc3339(state.store.now()),
    };
    Ok((StatusCode::CREATED, Json(response)))
}
