//! Event type stored by the rolling window
//!
//! An event is an immutable `(timestamp, value)` sample. Events are only ever
//! appended to the store and later evicted once they fall out of the window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// When the sample was taken (UTC)
    pub timestamp: DateTime<Utc>,
    /// Sampled value
    pub value: f64,
}

impl Event {
    /// Create a new event
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Whether this event is live relative to `cutoff` (inclusive)
    pub fn is_live(&self, cutoff: DateTime<Utc>) -> bool {
        self.timestamp >= cutoff
    }
}
