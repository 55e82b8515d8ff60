//! # Clock
//!
//! The injectable time source.
//!
//! arcade-core never reads the wall clock; every operation takes an
//! explicit `now`. The station supplies that instant from a `Clock`, so a
//! test can pin or advance time deterministically while production uses
//! the system clock.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

// =============================================================================
// Clock Trait
// =============================================================================

/// A source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// =============================================================================
// System Clock
// =============================================================================

/// Production clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// =============================================================================
// Manual Clock
// =============================================================================

/// A clock that only moves when told to. For tests and embedding apps'
/// test suites.
///
/// ## Example
/// ```rust
/// use arcade_station::clock::{Clock, ManualClock};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let clock = ManualClock::at(Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap());
/// clock.advance(Duration::minutes(90));
/// assert_eq!(clock.now().time().to_string(), "19:30:00");
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    /// Creates a manual clock pinned at the given instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        ManualClock {
            now: Mutex::new(now),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().expect("clock mutex poisoned");
        *now = *now + delta;
    }

    /// Pins the clock to a new instant.
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut now = self.now.lock().expect("clock mutex poisoned");
        *now = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock mutex poisoned")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
