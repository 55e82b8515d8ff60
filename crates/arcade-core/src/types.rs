//! # Domain Types
//!
//! Core domain types used throughout Arcade POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                            │
//! │                                                                 │
//! │  ┌───────────────┐   ┌───────────────┐   ┌──────────────────┐   │
//! │  │     Room      │   │    Session    │   │  CheckoutRecord  │   │
//! │  │  ───────────  │   │  ───────────  │   │  ──────────────  │   │
//! │  │  id (u32)     │──►│  phone        │──►│  room + customer │   │
//! │  │  category     │   │  rate (frozen)│   │  charges (final) │   │
//! │  │  session?     │   │  orders       │   │  orders (frozen) │   │
//! │  └───────────────┘   └───────────────┘   └──────────────────┘   │
//! │                                                                 │
//! │  ┌───────────────┐   ┌───────────────┐                          │
//! │  │     Drink     │   │   Customer    │                          │
//! │  │  id / price   │   │  phone (key)  │                          │
//! │  └───────────────┘   │  hours_played │                          │
//! │                      └───────────────┘                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `Session` freezes the room category, the hourly rate and the customer
//! discount at booking time. Rate table edits and customer record edits made
//! while the session is open never change what the session bills.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Room Category
// =============================================================================

/// The pricing/equipment tier of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RoomCategory {
    /// PlayStation 5 station.
    #[serde(rename = "PS5")]
    Ps5,
    /// PlayStation 4 station.
    #[serde(rename = "PS4")]
    Ps4,
    /// Billiards table.
    Billiards,
}

impl RoomCategory {
    /// All categories, in rate table display order.
    pub const ALL: [RoomCategory; 3] = [RoomCategory::Ps5, RoomCategory::Ps4, RoomCategory::Billiards];

    /// Stable label matching the wire form.
    pub const fn label(&self) -> &'static str {
        match self {
            RoomCategory::Ps5 => "PS5",
            RoomCategory::Ps4 => "PS4",
            RoomCategory::Billiards => "Billiards",
        }
    }
}

impl std::fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Drink & DrinkOrder
// =============================================================================

/// A drink on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Drink {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown on the menu and on receipts.
    pub name: String,

    /// Unit price. Zero is allowed (promotional items).
    pub price: Money,
}

/// One drink order placed against an open session.
///
/// Immutable once appended. Two orders for the same drink are kept as two
/// entries; quantities are never merged, so totals sum over all entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DrinkOrder {
    /// Menu drink this order references. The referenced drink may be
    /// deleted later; billing then prices this order at zero.
    pub drink_id: String,

    /// Quantity ordered (always positive).
    pub quantity: i64,

    /// When the order was placed.
    #[ts(as = "String")]
    pub ordered_at: DateTime<Utc>,
}

// =============================================================================
// Session
// =============================================================================

/// One open rental period tied to exactly one room and one customer.
///
/// Owned exclusively by its `Room` and destroyed by the checkout that
/// closes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Session {
    /// Phone number of the owning customer (ledger key).
    pub phone: String,

    /// Customer name at booking time, when the directory knew one.
    pub customer_name: Option<String>,

    /// Room category at booking time (frozen).
    pub category: RoomCategory,

    /// Hourly rate at booking time (frozen).
    pub hourly_rate: Money,

    /// Customer discount percent at booking time (frozen, 0 when none).
    pub discount_percent: u8,

    /// When the session started.
    #[ts(as = "String")]
    pub started_at: DateTime<Utc>,

    /// Drink orders placed against this session, in order. Append-only.
    pub orders: Vec<DrinkOrder>,
}

impl Session {
    /// Elapsed milliseconds from session start to `as_of`, clamped at zero.
    pub fn elapsed_ms(&self, as_of: DateTime<Utc>) -> i64 {
        (as_of - self.started_at).num_milliseconds().max(0)
    }
}

// =============================================================================
// Room
// =============================================================================

/// A rentable gaming station.
///
/// Rooms are provisioned once at startup and recycled indefinitely:
/// `Available` (no session) and `Occupied` (open session) are the only two
/// states. Occupancy is derived from session ownership, so the two can
/// never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Room {
    /// Room id, immutable after provisioning.
    pub id: u32,

    /// Display name ("Room 1", ...).
    pub name: String,

    /// Pricing category of this room.
    pub category: RoomCategory,

    /// The open session, if any.
    pub session: Option<Session>,
}

impl Room {
    /// Creates an available room.
    pub fn new(id: u32, name: impl Into<String>, category: RoomCategory) -> Self {
        Room {
            id,
            name: name.into(),
            category,
            session: None,
        }
    }

    /// A room is occupied exactly when it owns an open session.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.session.is_some()
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer in the play-hours ledger, keyed by phone number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Customer {
    /// Phone number, the natural key. Immutable once on file.
    pub phone: String,

    /// Customer name, when known.
    pub name: Option<String>,

    /// Cumulative billed hours across all completed sessions.
    /// Monotonically non-decreasing through the checkout path.
    pub hours_played: i64,

    /// Discount percent applied to room charges (0..=100).
    pub discount_percent: u8,

    /// End time of the customer's most recent checkout.
    #[ts(as = "Option<String>")]
    pub last_visit: Option<DateTime<Utc>>,
}

impl Customer {
    /// Creates a fresh ledger entry with zero hours.
    pub fn new(phone: impl Into<String>, name: Option<String>) -> Self {
        Customer {
            phone: phone.into(),
            name,
            hours_played: 0,
            discount_percent: 0,
            last_visit: None,
        }
    }

    /// Adds billed hours and stamps the visit. Negative credits clamp to
    /// zero so ledger hours never decrease through the checkout path.
    pub fn credit(&mut self, hours: i64, now: DateTime<Utc>) {
        self.hours_played += hours.max(0);
        self.last_visit = Some(now);
    }
}

// =============================================================================
// Checkout Record
// =============================================================================

/// Immutable snapshot of one completed session.
///
/// Created at checkout and never mutated or deleted afterwards. Stores the
/// raw drink ids; name lookups against a later menu are best-effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutRecord {
    /// Record id (UUID v4).
    pub id: String,

    /// Room identity at checkout time.
    pub room_id: u32,
    pub room_name: String,
    pub category: RoomCategory,

    /// Customer identity as the session carried it.
    pub phone: String,
    pub customer_name: Option<String>,

    #[ts(as = "String")]
    pub started_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub ended_at: DateTime<Utc>,

    /// Elapsed session time in milliseconds.
    pub duration_ms: i64,

    /// Final charges, exactly as billed.
    pub room_charge: Money,
    pub drinks_total: Money,
    pub total: Money,

    /// The session's full order list, frozen.
    pub orders: Vec<DrinkOrder>,
}

// =============================================================================
// Unit Tests
// =============================================================================
