//! # Cafe State
//!
//! The single-writer state container.
//!
//! ## Thread Safety
//! The whole cafe sits behind one `Arc<Mutex<Cafe>>`:
//! 1. Checkout crosses room, ledger and history in one transition and
//!    must not interleave with another write
//! 2. Terminal commands can run concurrently
//! 3. Every core operation is bounded local computation, so the lock is
//!    only ever held briefly and nothing blocks indefinitely
//!
//! No I/O happens under the lock: directory lookups and menu imports
//! resolve *before* a command takes it.
//!
//! ## Why Not RwLock?
//! Reads (room grid, live charge) are as cheap as the lock itself and
//! writes dominate the interesting paths. An RwLock would add complexity
//! with minimal benefit.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use arcade_core::Cafe;

use crate::clock::{Clock, SystemClock};

// =============================================================================
// Cafe State
// =============================================================================

/// Shared, thread-safe handle to the lounge state and the clock.
pub struct CafeState {
    cafe: Arc<Mutex<Cafe>>,
    clock: Arc<dyn Clock>,
}

impl CafeState {
    /// Creates state with the default floor plan and the system clock.
    pub fn new() -> Self {
        CafeState::with_clock(Arc::new(SystemClock))
    }

    /// Creates state with the default floor plan and an injected clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        CafeState::with_cafe_and_clock(Cafe::with_default_floor(), clock)
    }

    /// Creates state from an explicit cafe (custom floor plan, restored
    /// snapshot) and clock.
    pub fn with_cafe_and_clock(cafe: Cafe, clock: Arc<dyn Clock>) -> Self {
        CafeState {
            cafe: Arc::new(Mutex::new(cafe)),
            clock,
        }
    }

    /// The current instant according to the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Executes a function with read access to the cafe.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let rooms = state.with_cafe(|cafe| cafe.rooms().to_vec());
    /// ```
    pub fn with_cafe<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cafe) -> R,
    {
        let cafe = self.cafe.lock().expect("Cafe mutex poisoned");
        f(&cafe)
    }

    /// Executes a function with write access to the cafe.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_cafe_mut(|cafe| cafe.checkout(room_id, now))?;
    /// ```
    pub fn with_cafe_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cafe) -> R,
    {
        let mut cafe = self.cafe.lock().expect("Cafe mutex poisoned");
        f(&mut cafe)
    }
}

impl Default for CafeState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
