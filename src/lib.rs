//! Event Statistics Service
//!
//! Records timestamped numeric samples and answers min/max/mean/count queries
//! over a trailing one-hour window.
//!
//! # Features
//!
//! - **Rolling Window**: Events older than the window are evicted lazily
//! - **Thread-Safe**: One mutex guards append, eviction and reduction
//! - **On-Demand**: Statistics are recomputed on every query, never cached
//! - **REST API**: `POST /event`, `GET /statistics` over Axum
//!
//! # Modules
//!
//! - `types`: Core data structures (Event, Statistics)
//! - `event_store`: Rolling-window storage engine
//! - `validation`: Request payload parsing
//! - `config`: Environment-driven server settings
//! - `api`: HTTP router and handlers
//! - `utils`: Clock sources and timestamp helpers
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use event_stats::EventStore;
//!
//! let store = EventStore::new();
//! store.record(Utc::now(), 10.5);
//! store.record(Utc::now(), 20.5);
//!
//! let stats = store.aggregate();
//! assert_eq!(stats.count, 2);
//! assert_eq!(stats.mean, Some(15.5));
//! ```

pub mod api;
pub mod config;
pub mod event_store;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::ServerConfig;
pub use event_store::{EventStore, EventStoreConfig};
pub use types::{Event, ServerResult, Statistics};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
