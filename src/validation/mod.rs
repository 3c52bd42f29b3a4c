//! Validation of inbound requests
//!
//! This module rejects malformed event payloads so the store only ever sees
//! well-typed timestamps and values.

mod event;

pub use event::{parse_event_payload, parse_timestamp, EventInput, ValidationError};
