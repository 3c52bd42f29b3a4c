//! Event Store - rolling window of timestamped samples
//!
//! The EventStore keeps events in insertion order inside a single mutex and
//! evicts expired entries lazily. There is no background sweeper: `aggregate`
//! is the authoritative eviction point and `record` trims the front of the
//! buffer opportunistically.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use tracing::debug;

use super::stats::StatsAccumulator;
use crate::types::{Event, Statistics};
use crate::utils::time::{Clock, SystemClock};

/// Default trailing window in seconds
pub const DEFAULT_WINDOW_SECS: i64 = 3600;

/// Configuration for the EventStore
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventStoreConfig {
    /// Trailing window; events older than `now - window` are expired
    pub window: Duration,
}

impl Default for EventStoreConfig {
    fn default() -> Self {
        Self {
            window: Duration::seconds(DEFAULT_WINDOW_SECS),
        }
    }
}

impl EventStoreConfig {
    /// Create config with a custom window
    pub fn with_window(window: Duration) -> Self {
        Self { window }
    }

    /// Create config with a window length in seconds
    ///
    /// Returns `None` when `secs` does not fit in a `Duration`.
    pub fn with_window_secs(secs: i64) -> Option<Self> {
        Duration::try_seconds(secs).map(Self::with_window)
    }
}

/// Thread-safe in-memory store answering rolling-window statistics
pub struct EventStore {
    config: EventStoreConfig,
    clock: Arc<dyn Clock>,
    events: Mutex<VecDeque<Event>>,
}

impl EventStore {
    /// Create a new EventStore with the default one-hour window
    pub fn new() -> Self {
        Self::with_config(EventStoreConfig::default())
    }

    /// Create a new EventStore with custom config
    pub fn with_config(config: EventStoreConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a new EventStore reading time from `clock`
    pub fn with_clock(config: EventStoreConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            clock,
            events: Mutex::new(VecDeque::new()),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &EventStoreConfig {
        &self.config
    }

    /// Window length
    pub fn window(&self) -> Duration {
        self.config.window
    }

    /// Current instant according to the store's clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Oldest timestamp that is still live at `now`
    pub fn cutoff_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_signed(self.config.window)
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Oldest timestamp that is currently live
    pub fn cutoff(&self) -> DateTime<Utc> {
        self.cutoff_at(self.now())
    }

    /// Append an event to the tail of the buffer
    ///
    /// Any timestamp is accepted, including ones far in the past or in the
    /// future. Existing entries are never reordered. Expired entries sitting
    /// at the front of the buffer are dropped while the lock is held.
    pub fn record(&self, timestamp: DateTime<Utc>, value: f64) {
        let mut events = self.events.lock();
        let cutoff = self.cutoff();
        events.push_back(Event::new(timestamp, value));

        let mut evicted = 0usize;
        while events.front().is_some_and(|e| !e.is_live(cutoff)) {
            events.pop_front();
            evicted += 1;
        }
        if evicted > 0 {
            debug!(evicted, retained = events.len(), "Trimmed expired events on record");
        }
    }

    /// Evict expired events and reduce the remaining ones
    ///
    /// Eviction and reduction happen under one lock acquisition, so a
    /// concurrent `record` or `aggregate` observes either the full state
    /// before this call or the full state after it.
    pub fn aggregate(&self) -> Statistics {
        let mut acc = StatsAccumulator::new();

        let mut events = self.events.lock();
        let cutoff = self.cutoff();
        let before = events.len();
        events.retain(|event| {
            let live = event.is_live(cutoff);
            if live {
                acc.push(event.value);
            }
            live
        });
        let evicted = before - events.len();
        drop(events);

        if evicted > 0 {
            debug!(evicted, %cutoff, "Evicted expired events");
        }

        acc.finish()
    }

    /// Copy of all stored events in insertion order, without evicting
    ///
    /// May include events that have expired but not yet been evicted.
    pub fn snapshot(&self) -> Vec<Event> {
        self.events.lock().iter().copied().collect()
    }

    /// Number of stored events, expired or not
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drop every stored event
    pub fn clear(&self) {
        let mut events = self.events.lock();
        let dropped = events.len();
        events.clear();
        debug!(dropped, "Cleared event store");
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStore")
            .field("config", &self.config)
            .field("len", &self.len())
            .finish()
    }
}
