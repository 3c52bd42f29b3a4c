//! Server configuration loaded from environment variables
//!
//! | Variable | Default |
//! |---|---|
//! | `EVENT_STATS_HOST` | `0.0.0.0` |
//! | `EVENT_STATS_PORT` | `5000` |
//! | `EVENT_STATS_WINDOW_SECS` | `3600` |

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use chrono::Duration;
use thiserror::Error;

use crate::event_store::EventStoreConfig;

pub const HOST_VAR: &str = "EVENT_STATS_HOST";
pub const PORT_VAR: &str = "EVENT_STATS_PORT";
pub const WINDOW_VAR: &str = "EVENT_STATS_WINDOW_SECS";

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "event_stats=info,tower_http=info";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{0} must be greater than zero")]
    NonPositive(&'static str),

    #[error("{var} is out of range: '{value}'")]
    OutOfRange { var: &'static str, value: String },
}

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub window: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            window: EventStoreConfig::default().window,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup(HOST_VAR) {
            Some(raw) => parse_var(HOST_VAR, "IP address", &raw)?,
            None => defaults.host,
        };
        let port = match lookup(PORT_VAR) {
            Some(raw) => parse_var(PORT_VAR, "port number", &raw)?,
            None => defaults.port,
        };
        let window = match lookup(WINDOW_VAR) {
            Some(raw) => parse_window(&raw)?,
            None => defaults.window,
        };

        Ok(Self { host, port, window })
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Store settings derived from this config
    pub fn store_config(&self) -> EventStoreConfig {
        EventStoreConfig::with_window(self.window)
    }
}

fn parse_window(raw: &str) -> Result<Duration, ConfigError> {
    let secs: i64 = parse_var(WINDOW_VAR, "number of seconds", raw)?;
    if secs <= 0 {
        return Err(ConfigError::NonPositive(WINDOW_VAR));
    }
    Duration::try_seconds(secs).ok_or_else(|| ConfigError::OutOfRange {
        var: WINDOW_VAR,
        value: raw.to_string(),
    })
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    raw: &str,
) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: raw.to_string(),
    })
}
