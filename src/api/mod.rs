//! API module for HTTP endpoints
//!
//! This module wires the event store into a REST API.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
