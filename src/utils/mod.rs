//! Utility functions and helpers
//!
//! This module contains clock sources and timestamp helpers.

pub mod time;

pub use time::{age_minutes, to_rfc3339, Clock, ManualClock, SystemClock};
