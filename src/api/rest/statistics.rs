//! Statistics endpoint

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::api::state::AppState;
use crate::types::Statistics;

/// GET /statistics - Aggregate statistics over the trailing window
///
/// `min`, `max` and `mean` are `null` when no events are live.
pub async fn get_statistics(State(state): State<Arc<AppState>>) -> Json<Statistics> {
    let stats = state.store.aggregate();
    info!(
        count = stats.count,
        min = ?stats.min,
        max = ?stats.max,
        mean = ?stats.mean,
        "Statistics requested"
    );
    Json(stats)
}
