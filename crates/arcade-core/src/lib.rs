//! # arcade-core: Pure Business Logic for Arcade POS
//!
//! This crate is the **heart** of Arcade POS. It contains the room/session
//! lifecycle state machine and the billing engine as pure logic with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                     Arcade POS Architecture                       │
//! │                                                                   │
//! │  ┌─────────────────────────────────────────────────────────────┐ │
//! │  │                  Frontend (React terminal)                  │ │
//! │  │   Room Grid ──► Booking ──► Drink Menu ──► Checkout         │ │
//! │  └────────────────────────────┬────────────────────────────────┘ │
//! │                               │                                  │
//! │  ┌────────────────────────────▼────────────────────────────────┐ │
//! │  │            arcade-station (commands + state)                │ │
//! │  │   book_room, order_drink, checkout_room, update_rates, ...  │ │
//! │  └────────────────────────────┬────────────────────────────────┘ │
//! │                               │                                  │
//! │  ┌────────────────────────────▼────────────────────────────────┐ │
//! │  │              ★ arcade-core (THIS CRATE) ★                   │ │
//! │  │                                                             │ │
//! │  │   ┌────────┐ ┌─────────┐ ┌────────┐ ┌────────┐ ┌─────────┐ │ │
//! │  │   │  cafe  │ │ billing │ │ ledger │ │history │ │  rates  │ │ │
//! │  │   │ rooms  │ │  Bill   │ │ hours  │ │  log   │ │  table  │ │ │
//! │  │   │sessions│ │  math   │ │ ledger │ │queries │ │         │ │ │
//! │  │   └────────┘ └─────────┘ └────────┘ └────────┘ └─────────┘ │ │
//! │  │                                                             │ │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS           │ │
//! │  └─────────────────────────────────────────────────────────────┘ │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cafe`] - The room/session state machine that owns all lounge state
//! - [`billing`] - Pure charge calculation (time + drinks)
//! - [`ledger`] - Per-customer cumulative play hours, keyed by phone
//! - [`history`] - Append-only checkout history with read-side queries
//! - [`rates`] - Hourly rate per room category
//! - [`menu`] - Drink menu CRUD
//! - [`money`] - Integer money (whole currency units, no floats)
//! - [`types`] - Domain entities (Room, Session, Drink, Customer, ...)
//! - [`error`] - Typed domain errors
//! - [`validation`] - Field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every operation takes an explicit `now`; the
//!    core never reads the wall clock
//! 2. **No I/O**: database, network and file system access are FORBIDDEN
//!    here; callers persist the entities however they like
//! 3. **Integer Money**: all monetary values are whole currency units in
//!    an i64, rounded up in the house's favor
//! 4. **Atomic Operations**: an error return means nothing changed
//!
//! ## Example Usage
//!
//! ```rust
//! use arcade_core::{Cafe, Guest};
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let mut cafe = Cafe::with_default_floor();
//! let start = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
//!
//! cafe.book(1, Guest::walk_in("01001234567"), start).unwrap();
//! let record = cafe.checkout(1, start + Duration::minutes(90)).unwrap();
//!
//! // 90 minutes of PS5 at the default 40/hr: ceil(1.5 * 40) = 60
//! assert_eq!(record.room_charge.units(), 60);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod cafe;
pub mod error;
pub mod history;
pub mod ledger;
pub mod menu;
pub mod money;
pub mod rates;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use arcade_core::Cafe` instead of
// `use arcade_core::cafe::Cafe`

pub use billing::Bill;
pub use cafe::{Cafe, Guest, DEFAULT_FLOOR_PLAN};
pub use error::{CoreError, CoreResult, ValidationError};
pub use history::{CheckoutLog, LogSummary};
pub use ledger::CustomerLedger;
pub use menu::DrinkMenu;
pub use money::Money;
pub use rates::RateTable;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity for a single drink order.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 100 instead of 10).
/// Larger rounds are placed as multiple orders.
pub const MAX_ORDER_QUANTITY: i64 = 999;
