//! Aggregate statistics over the live window

use serde::{Deserialize, Serialize};

/// Statistics snapshot computed by `EventStore::aggregate`
///
/// `min`, `max` and `mean` are `None` exactly when `count` is zero. They
/// serialize as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
}

impl Statistics {
    /// Statistics for an empty window
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no live events contributed
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
