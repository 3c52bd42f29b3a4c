//! Inbound event payload parsing
//!
//! Turns a raw request body into a typed `(timestamp, value)` pair before it
//! reaches the store.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::value::RawValue;
use serde_json::Value;
use thiserror::Error;

/// Naive ISO-8601 layouts accepted without an offset; interpreted as UTC
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A validated event ready for `EventStore::record`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventInput {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

/// Reasons an event payload is rejected
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    InvalidBody,

    #[error("Missing '{0}' field")]
    MissingField(&'static str),

    #[error("Invalid timestamp format. Use ISO 8601 (e.g., '2025-06-26T14:30:00Z'): {0}")]
    InvalidTimestamp(String),

    #[error("Invalid value. Must be a finite number: {0}")]
    InvalidValue(String),
}

/// Parse a JSON request body into an `EventInput`
///
/// Fields are kept as raw JSON until they are looked at, so a malformed field
/// (e.g. a number outside the `f64` range) is reported against that field
/// rather than the whole body.
pub fn parse_event_payload(body: &[u8]) -> Result<EventInput, ValidationError> {
    let fields: HashMap<String, &RawValue> =
        serde_json::from_slice(body).map_err(|_| ValidationError::InvalidBody)?;

    let timestamp = fields
        .get("timestamp")
        .ok_or(ValidationError::MissingField("timestamp"))?;
    let value = fields
        .get("value")
        .ok_or(ValidationError::MissingField("value"))?;

    let timestamp: Value = serde_json::from_str(timestamp.get())
        .map_err(|e| ValidationError::InvalidTimestamp(e.to_string()))?;
    let value: Value = serde_json::from_str(value.get())
        .map_err(|e| ValidationError::InvalidValue(e.to_string()))?;

    Ok(EventInput {
        timestamp: parse_timestamp_value(&timestamp)?,
        value: parse_value(&value)?,
    })
}

fn parse_timestamp_value(raw: &Value) -> Result<DateTime<Utc>, ValidationError> {
    match raw {
        Value::String(s) => parse_timestamp(s),
        other => Err(ValidationError::InvalidTimestamp(format!(
            "expected a string, got {}",
            json_type_name(other)
        ))),
    }
}

/// Parse an ISO-8601 timestamp
///
/// Offsets (including `Z`) are converted to UTC; timestamps without an offset
/// are taken to already be UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(ValidationError::InvalidTimestamp(format!(
        "'{}' is not a valid ISO 8601 datetime",
        raw
    )))
}

fn parse_value(raw: &Value) -> Result<f64, ValidationError> {
    let value = match raw {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ValidationError::InvalidValue(n.to_string()))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::InvalidValue(format!("'{}' is not a number", s)))?,
        other => {
            return Err(ValidationError::InvalidValue(format!(
                "expected a number, got {}",
                json_type_name(other)
            )))
        }
    };

    if !value.is_finite() {
        return Err(ValidationError::InvalidValue(format!(
            "{} is not finite",
            value
        )));
    }
    Ok(value)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
