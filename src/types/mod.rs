//! Data types for the event statistics service
//!
//! This module contains the core data structures shared by the store and the API.

mod event;
mod statistics;

pub use event::Event;
pub use statistics::Statistics;

/// Result type for server bootstrap operations
pub type ServerResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
