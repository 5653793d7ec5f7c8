//! Clock abstraction for determinism.
//!
//! All engine reads of "now" go through this trait. The interrupt auto-hide
//! window and scene durations are computed against an injected clock, so
//! tests run on virtual time and production code never owns a real timer.

use chrono::{DateTime, Duration, Utc};

/// Abstraction over system time for deterministic behavior.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Whole milliseconds elapsed between two instants, clamped at zero.
#[must_use]
pub fn elapsed_ms(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().max(0)
}

/// A deadline `window_ms` milliseconds after `from`.
#[must_use]
pub fn deadline_after_ms(from: DateTime<Utc>, window_ms: i64) -> DateTime<Utc> {
    from + Duration::milliseconds(window_ms)
}
