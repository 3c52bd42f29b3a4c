//! Debug listing of stored events

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::state::AppState;
use crate::utils::time::{age_minutes, to_rfc3339};

#[derive(Debug, Serialize)]
pub struct EventInfo {
    pub timestamp: String,
    pub value: f64,
    pub is_recent: bool,
    pub age_minutes: f64,
}

/// Response for GET /debug/events
#[derive(Debug, Serialize)]
pub struct DebugEventsResponse {
    pub current_time: String,
    pub cutoff_time: String,
    pub window_secs: i64,
    pub total_events: usize,
    pub events: Vec<EventInfo>,
}

/// GET /debug/events - Every stored event, in insertion order
///
/// Read-only: expired events that have not been evicted yet are listed with
/// `is_recent: false` and stay in the store.
pub async fn list_events(State(state): State<Arc<AppState>>) -> Json<DebugEventsResponse> {
    let store = &state.store;
    let now = store.now();
    let cutoff = store.cutoff_at(now);

    let events: Vec<EventInfo> = store
        .snapshot()
        .into_iter()
        .map(|event| EventInfo {
            timestamp: to_rfc3339(event.timestamp),
            value: event.value,
            is_recent: event.is_live(cutoff),
            age_minutes: age_minutes(event.timestamp, now),
        })
        .collect();

    Json(DebugEventsResponse {
        current_time: to_rfc3339(now),
        cutoff_time: to_rfc3339(cutoff),
        window_secs: store.window().num_seconds(),
        total_events: events.len(),
        events,
    })
}
