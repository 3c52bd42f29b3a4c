//! REST API module for HTTP endpoints
//!
//! - `POST /event` - Record an event
//! - `GET /statistics` - Statistics over the trailing window
//! - `GET /debug/events` - List stored events without evicting
//! - `GET /health`, `GET /` - Liveness and service banner

pub mod debug;
pub mod events;
pub mod health;
pub mod statistics;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::validation::ValidationError;

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: message.into(),
            code: "NOT_FOUND".to_string(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: message.into(),
            code: "BAD_REQUEST".to_string(),
        }
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::METHOD_NOT_ALLOWED,
            error: message.into(),
            code: "METHOD_NOT_ALLOWED".to_string(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::bad_request(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
