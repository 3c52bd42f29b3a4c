//! Time sources and timestamp utilities

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use parking_lot::Mutex;

/// Source of the current instant
///
/// The store reads "now" through this trait so that window expiry can be
/// driven deterministically in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Jump to an arbitrary instant
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock() = instant;
    }

    /// Move the clock forward (or backward for negative deltas)
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Format an instant as RFC 3339 with microsecond precision and a `Z` suffix
pub fn to_rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Age of `instant` relative to `now` in fractional minutes
///
/// Negative for future timestamps.
pub fn age_minutes(instant: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let age = now.signed_duration_since(instant);
    match age.num_microseconds() {
        Some(us) => us as f64 / 60_000_000.0,
        None => age.num_seconds() as f64 / 60.0,
    }
}
