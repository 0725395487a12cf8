//! Time source abstraction for real and fixed time.
//!
//! Services never call `Utc::now()` themselves; they ask this module. The
//! binary installs a [`FixedTimeSource`] when invoked with `--at`, which makes
//! every service answer as of that instant. Without one, the real clock is
//! used.

use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Global time source instance, defaults to RealTimeSource
static TIME_SOURCE: OnceCell<Arc<dyn TimeSource>> = OnceCell::new();

/// Format accepted by [`parse_datetime`].
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trait for abstracting the current instant.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Real-time implementation that uses actual system time
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time source that always answers the same instant.
pub struct FixedTimeSource {
    instant: DateTime<Utc>,
}

impl FixedTimeSource {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Initialize the global time source (call once at startup).
///
/// Returns false if a source was already installed; the first one wins.
pub fn init_time_source(source: Arc<dyn TimeSource>) -> bool {
    TIME_SOURCE.set(source).is_ok()
}

/// Get the current time from the global time source
pub fn now() -> DateTime<Utc> {
    TIME_SOURCE.get_or_init(|| Arc::new(RealTimeSource)).now()
}

/// Parse a UTC datetime string in the format "YYYY-MM-DD HH:MM:SS"
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| format!("Invalid datetime format: {e}. Use YYYY-MM-DD HH:MM:SS"))
}
