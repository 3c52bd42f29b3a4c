//! Event Store Module
//!
//! This module provides the rolling-window storage engine:
//! - `EventStore`: append-only buffer with lazy eviction and on-demand aggregation
//! - `StatsAccumulator`: single-pass min/max/mean reduction
//!
//! # Architecture
//!
//! ```text
//! Write Path:
//! ┌─────────┐    ┌──────────────┐    ┌──────────────────────┐
//! │ POST    │───►│ push_back    │───►│ pop expired front    │
//! │ /event  │    │ (under lock) │    │ entries (same lock)  │
//! └─────────┘    └──────────────┘    └──────────────────────┘
//!
//! Read Path:
//! ┌─────────────┐    ┌───────────────────────────────┐
//! │ GET         │───►│ retain live + accumulate      │───► Statistics
//! │ /statistics │    │ (one pass, one lock)          │
//! └─────────────┘    └───────────────────────────────┘
//! ```

mod stats;
mod store;

pub use stats::StatsAccumulator;
pub use store::{EventStore, EventStoreConfig, DEFAULT_WINDOW_SECS};
