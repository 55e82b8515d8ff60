//! # Room/Session State Machine
//!
//! `Cafe` owns the whole lounge state and is the only place it mutates.
//!
//! ## Room Lifecycle
//! ```text
//! ┌─────────────┐    book     ┌─────────────┐
//! │  Available  │────────────►│  Occupied   │──┐
//! │ (no session)│             │(open session│  │ add_drink_order
//! │             │◄────────────│  + orders)  │◄─┘
//! └─────────────┘  checkout   └─────────────┘
//! ```
//!
//! Rooms are provisioned once at construction and recycled indefinitely;
//! there is no terminal state.
//!
//! ## Atomicity
//! Every operation validates first and mutates after: an error return
//! means nothing changed. `checkout` is the one transition that touches
//! three entities (room, ledger, history); its apply phase is infallible
//! by construction so the triad can never be left half-updated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::billing::{self, Bill};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::history::CheckoutLog;
use crate::ledger::CustomerLedger;
use crate::menu::DrinkMenu;
use crate::money::Money;
use crate::rates::RateTable;
use crate::types::{
    CheckoutRecord, Customer, Drink, DrinkOrder, Room, RoomCategory, Session,
};
use crate::validation::{validate_discount_percent, validate_phone, validate_quantity};

/// The fixed floor plan rooms are provisioned from at startup.
pub const DEFAULT_FLOOR_PLAN: [(u32, RoomCategory); 6] = [
    (1, RoomCategory::Ps5),
    (2, RoomCategory::Ps5),
    (3, RoomCategory::Ps4),
    (4, RoomCategory::Ps4),
    (5, RoomCategory::Ps4),
    (6, RoomCategory::Billiards),
];

// =============================================================================
// Guest
// =============================================================================

/// The resolved customer identity a booking is made for.
///
/// Resolution itself (directory lookup by phone) is the caller's job; the
/// state machine only checks that the phone is usable and lazily creates a
/// ledger entry for a phone it has never seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Guest {
    pub phone: String,
    pub name: Option<String>,
    /// Discount percent to freeze into the session (0 when none).
    pub discount_percent: u8,
}

impl Guest {
    /// A walk-in guest known only by phone.
    pub fn walk_in(phone: impl Into<String>) -> Self {
        Guest {
            phone: phone.into(),
            name: None,
            discount_percent: 0,
        }
    }
}

// =============================================================================
// Cafe
// =============================================================================

/// The lounge: rooms, drink menu, rate table, customer ledger and checkout
/// history, mutated only through the operations below.
#[derive(Debug, Clone)]
pub struct Cafe {
    rooms: Vec<Room>,
    menu: DrinkMenu,
    rates: RateTable,
    ledger: CustomerLedger,
    history: CheckoutLog,
}

impl Cafe {
    /// Builds a cafe from an explicit room list and rate table.
    pub fn new(rooms: Vec<Room>, rates: RateTable) -> Self {
        Cafe {
            rooms,
            menu: DrinkMenu::new(),
            rates,
            ledger: CustomerLedger::new(),
            history: CheckoutLog::new(),
        }
    }

    /// Builds the standard floor: rooms 1-2 PS5, 3-5 PS4, 6 Billiards,
    /// at the default rates.
    pub fn with_default_floor() -> Self {
        let rooms = DEFAULT_FLOOR_PLAN
            .iter()
            .map(|&(id, category)| Room::new(id, format!("Room {id}"), category))
            .collect();
        Cafe::new(rooms, RateTable::default())
    }

    // =========================================================================
    // Read Side
    // =========================================================================

    /// All rooms in provisioning order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// One room by id.
    pub fn room(&self, room_id: u32) -> CoreResult<&Room> {
        self.rooms
            .iter()
            .find(|r| r.id == room_id)
            .ok_or(CoreError::RoomNotFound { room_id })
    }

    pub fn menu(&self) -> &DrinkMenu {
        &self.menu
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn ledger(&self) -> &CustomerLedger {
        &self.ledger
    }

    pub fn history(&self) -> &CheckoutLog {
        &self.history
    }

    /// Live quote for an open session, priced as of `as_of`.
    ///
    /// Read-only and safe to call repeatedly (the live charge display
    /// polls this).
    pub fn current_charge(&self, room_id: u32, as_of: DateTime<Utc>) -> CoreResult<Bill> {
        let room = self.room(room_id)?;
        let session = room
            .session
            .as_ref()
            .ok_or(CoreError::RoomNotOccupied { room_id })?;

        Ok(billing::quote(session, &self.menu, as_of))
    }

    // =========================================================================
    // Session Lifecycle
    // =========================================================================

    /// Books a room for a guest, opening a session that starts at `now`.
    ///
    /// The session freezes the room's category, the category's current
    /// hourly rate and the guest's discount. An unseen phone gets a
    /// zero-hours ledger entry.
    ///
    /// ## Errors
    /// - `RoomNotFound` for an unknown id
    /// - `RoomUnavailable` if the room already has an open session (the
    ///   existing session is left untouched)
    /// - `CustomerUnresolved` if the phone is empty or malformed
    /// - `Validation` for an out-of-range discount
    pub fn book(&mut self, room_id: u32, guest: Guest, now: DateTime<Utc>) -> CoreResult<&Session> {
        let phone = validate_phone(&guest.phone).map_err(|_| CoreError::CustomerUnresolved {
            phone: guest.phone.clone(),
        })?;
        validate_discount_percent(i64::from(guest.discount_percent))?;

        let index = self.room_index(room_id)?;
        if self.rooms[index].is_occupied() {
            return Err(CoreError::RoomUnavailable { room_id });
        }

        // Validation done; everything below is infallible.
        let category = self.rooms[index].category;
        let hourly_rate = self.rates.rate(category);

        self.ledger.ensure(&phone, guest.name.clone());

        let room = &mut self.rooms[index];
        let session = room.session.insert(Session {
            phone,
            customer_name: guest.name,
            category,
            hourly_rate,
            discount_percent: guest.discount_percent,
            started_at: now,
            orders: Vec::new(),
        });

        Ok(&*session)
    }

    /// Appends a drink order to a room's open session.
    ///
    /// Orders are never merged: a second order for the same drink is kept
    /// as its own entry and totals sum over all entries.
    ///
    /// ## Errors
    /// - `RoomNotFound` / `RoomNotOccupied`
    /// - `InvalidQuantity` for quantity <= 0 (or `Validation` above the cap)
    /// - `DrinkNotFound` if the drink is not on the menu right now
    pub fn add_drink_order(
        &mut self,
        room_id: u32,
        drink_id: &str,
        quantity: i64,
        now: DateTime<Utc>,
    ) -> CoreResult<&Session> {
        validate_quantity(quantity).map_err(|err| match err {
            ValidationError::MustBePositive { .. } => CoreError::InvalidQuantity { quantity },
            other => CoreError::Validation(other),
        })?;

        if !self.menu.contains(drink_id) {
            return Err(CoreError::DrinkNotFound(drink_id.to_string()));
        }

        let index = self.room_index(room_id)?;
        let session = self.rooms[index]
            .session
            .as_mut()
            .ok_or(CoreError::RoomNotOccupied { room_id })?;

        session.orders.push(DrinkOrder {
            drink_id: drink_id.to_string(),
            quantity,
            ordered_at: now,
        });

        Ok(&*session)
    }

    /// Closes a room's session: bills it, credits the customer's hours,
    /// archives the record and frees the room.
    ///
    /// This is the single transition that crosses room, ledger and
    /// history; it applies as one indivisible step.
    ///
    /// ## Errors
    /// - `RoomNotFound` / `RoomNotOccupied` (checked before any mutation)
    pub fn checkout(&mut self, room_id: u32, now: DateTime<Utc>) -> CoreResult<CheckoutRecord> {
        let index = self.room_index(room_id)?;
        let room = &self.rooms[index];
        let session = room
            .session
            .as_ref()
            .ok_or(CoreError::RoomNotOccupied { room_id })?;

        let duration_ms = session.elapsed_ms(now);
        let bill = billing::quote(session, &self.menu, now);
        let hours = billing::billable_hours(duration_ms);

        let record = CheckoutRecord {
            id: Uuid::new_v4().to_string(),
            room_id: room.id,
            room_name: room.name.clone(),
            category: session.category,
            phone: session.phone.clone(),
            customer_name: session.customer_name.clone(),
            started_at: session.started_at,
            ended_at: now,
            duration_ms,
            room_charge: bill.room_charge,
            drinks_total: bill.drinks_total,
            total: bill.total,
            orders: session.orders.clone(),
        };

        // Apply phase, infallible: room + ledger + history move together.
        // `ensure` re-creates the entry if an admin deleted the customer
        // while the session was open.
        self.ledger
            .ensure(&record.phone, record.customer_name.clone())
            .credit(hours, now);
        self.history.record(record.clone());
        self.rooms[index].session = None;

        Ok(record)
    }

    // =========================================================================
    // Rate Table
    // =========================================================================

    /// Replaces the whole rate table. Open sessions keep their frozen rate.
    pub fn update_rates(&mut self, rates: RateTable) -> CoreResult<()> {
        self.rates.replace(rates)
    }

    /// Sets one category's hourly rate. Open sessions keep their frozen rate.
    pub fn set_rate(&mut self, category: RoomCategory, rate: Money) -> CoreResult<()> {
        self.rates.set(category, rate)
    }

    // =========================================================================
    // Drink Menu CRUD
    // =========================================================================

    pub fn add_drink(&mut self, drink: Drink) -> CoreResult<()> {
        self.menu.add(drink)
    }

    pub fn update_drink(&mut self, drink: Drink) -> CoreResult<()> {
        self.menu.update(drink)
    }

    /// Removes a drink from the menu. History and open-session orders that
    /// reference it are untouched; billing prices them at zero from here on.
    pub fn remove_drink(&mut self, drink_id: &str) -> CoreResult<Drink> {
        self.menu.remove(drink_id)
    }

    // =========================================================================
    // Customer CRUD (admin)
    // =========================================================================

    pub fn add_customer(&mut self, customer: Customer) -> CoreResult<()> {
        self.ledger.add(customer)
    }

    pub fn update_customer(&mut self, customer: Customer) -> CoreResult<()> {
        self.ledger.update(customer)
    }

    /// Removes a customer from the ledger. An open session for this phone
    /// keeps billing normally and checkout re-creates the ledger entry.
    pub fn remove_customer(&mut self, phone: &str) -> CoreResult<Customer> {
        self.ledger.remove(phone)
    }

    fn room_index(&self, room_id: u32) -> CoreResult<usize> {
        self.rooms
            .iter()
            .position(|r| r.id == room_id)
            .ok_or(CoreError::RoomNotFound { room_id })
    }
}

impl Default for Cafe {
    fn default() -> Self {
        Cafe::with_default_floor()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const PHONE: &str = "01001234567";

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap()
    }

    fn cafe_with_menu() -> Cafe {
        let mut cafe = Cafe::with_default_floor();
        cafe.add_drink(Drink {
            id: "coffee".to_string(),
            name: "Coffee".to_string(),
            price: Money::from_units(15),
        })
        .unwrap();
        cafe.add_drink(Drink {
            id: "tea".to_string(),
            name: "Tea".to_string(),
            price: Money::from_units(10),
        })
        .unwrap();
        cafe
    }

    #[test]
    fn test_default_floor_plan() {
        let cafe = Cafe::with_default_floor();
        assert_eq!(cafe.rooms().len(), 6);
        assert_eq!(cafe.room(1).unwrap().category, RoomCategory::Ps5);
        assert_eq!(cafe.room(6).unwrap().category, RoomCategory::Billiards);
        assert_eq!(cafe.room(4).unwrap().name, "Room 4");
        assert!(cafe.rooms().iter().all(|r| !r.is_occupied()));
    }

    #[test]
    fn test_book_opens_session_with_snapshots() {
        let mut cafe = Cafe::with_default_floor();

        let session = cafe.book(1, Guest::walk_in(PHONE), t0()).unwrap();
        assert_eq!(session.phone, PHONE);
        assert_eq!(session.category, RoomCategory::Ps5);
        assert_eq!(session.hourly_rate, Money::from_units(40));
        assert_eq!(session.started_at, t0());
        assert!(session.orders.is_empty());

        assert!(cafe.room(1).unwrap().is_occupied());

        // Unseen phone got a zero-hours ledger entry
        let customer = cafe.ledger().get(PHONE).unwrap();
        assert_eq!(customer.hours_played, 0);
    }

    #[test]
    fn test_book_unknown_room() {
        let mut cafe = Cafe::with_default_floor();
        assert!(matches!(
            cafe.book(99, Guest::walk_in(PHONE), t0()),
            Err(CoreError::RoomNotFound { room_id: 99 })
        ));
    }

    #[test]
    fn test_book_occupied_room_fails_and_preserves_session() {
        let mut cafe = cafe_with_menu();
        cafe.book(1, Guest::walk_in(PHONE), t0()).unwrap();
        cafe.add_drink_order(1, "coffee", 2, t0()).unwrap();

        let err = cafe
            .book(1, Guest::walk_in("01207654321"), t0() + chrono::Duration::minutes(10))
            .unwrap_err();
        assert!(matches!(err, CoreError::RoomUnavailable { room_id: 1 }));

        // First guest's session survives with time and orders intact
        let session = cafe.room(1).unwrap().session.as_ref().unwrap();
        assert_eq!(session.phone, PHONE);
        assert_eq!(session.started_at, t0());
        assert_eq!(session.orders.len(), 1);
        // And the losing guest never reached the ledger
        assert!(cafe.ledger().get("01207654321").is_none());
    }

    #[test]
    fn test_book_requires_resolvable_phone() {
        let mut cafe = Cafe::with_default_floor();

        for bad in ["", "   ", "01-00", "123"] {
            let err = cafe.book(1, Guest::walk_in(bad), t0()).unwrap_err();
            assert!(matches!(err, CoreError::CustomerUnresolved { .. }));
            assert!(!cafe.room(1).unwrap().is_occupied());
        }
        assert!(cafe.ledger().is_empty());
    }

    #[test]
    fn test_order_appends_without_merging() {
        let mut cafe = cafe_with_menu();
        cafe.book(1, Guest::walk_in(PHONE), t0()).unwrap();

        cafe.add_drink_order(1, "coffee", 1, t0()).unwrap();
        let session = cafe
            .add_drink_order(1, "coffee", 1, t0() + chrono::Duration::minutes(5))
            .unwrap();

        // Two entries for the same drink, not one merged entry
        assert_eq!(session.orders.len(), 2);
        assert!(session.orders.iter().all(|o| o.drink_id == "coffee"));
        assert_eq!(session.orders.iter().map(|o| o.quantity).sum::<i64>(), 2);
    }

    #[test]
    fn test_order_rejects_bad_quantity() {
        let mut cafe = cafe_with_menu();
        cafe.book(1, Guest::walk_in(PHONE), t0()).unwrap();

        assert!(matches!(
            cafe.add_drink_order(1, "coffee", 0, t0()),
            Err(CoreError::InvalidQuantity { quantity: 0 })
        ));
        assert!(matches!(
            cafe.add_drink_order(1, "coffee", -3, t0()),
            Err(CoreError::InvalidQuantity { quantity: -3 })
        ));
        assert!(matches!(
            cafe.add_drink_order(1, "coffee", 1000, t0()),
            Err(CoreError::Validation(_))
        ));

        // Nothing was appended
        assert!(cafe.room(1).unwrap().session.as_ref().unwrap().orders.is_empty());
    }

    #[test]
    fn test_order_requires_open_session_and_live_drink() {
        let mut cafe = cafe_with_menu();

        assert!(matches!(
            cafe.add_drink_order(1, "coffee", 1, t0()),
            Err(CoreError::RoomNotOccupied { room_id: 1 })
        ));

        cafe.book(1, Guest::walk_in(PHONE), t0()).unwrap();
        assert!(matches!(
            cafe.add_drink_order(1, "mojito", 1, t0()),
            Err(CoreError::DrinkNotFound(_))
        ));
    }

    #[test]
    fn test_checkout_full_scenario() {
        // 90 minutes of PS5 at 40/hr with 2x coffee(15) + 1x tea(10)
        let mut cafe = cafe_with_menu();
        cafe.book(1, Guest::walk_in(PHONE), t0()).unwrap();
        cafe.add_drink_order(1, "coffee", 2, t0()).unwrap();
        cafe.add_drink_order(1, "tea", 1, t0()).unwrap();

        let end = t0() + chrono::Duration::minutes(90);
        let record = cafe.checkout(1, end).unwrap();

        assert_eq!(record.room_charge.units(), 60); // ceil(1.5 * 40)
        assert_eq!(record.drinks_total.units(), 40); // 2*15 + 1*10
        assert_eq!(record.total.units(), 100);
        assert_eq!(record.duration_ms, 5_400_000);
        assert_eq!(record.room_id, 1);
        assert_eq!(record.room_name, "Room 1");
        assert_eq!(record.category, RoomCategory::Ps5);
        assert_eq!(record.orders.len(), 2);

        // Ledger credited ceil(90min / 1h) = 2 hours, visit stamped
        let customer = cafe.ledger().get(PHONE).unwrap();
        assert_eq!(customer.hours_played, 2);
        assert_eq!(customer.last_visit, Some(end));

        // History got the record, newest first
        assert_eq!(cafe.history().len(), 1);
        assert_eq!(cafe.history().latest().unwrap().id, record.id);

        // Room is available again
        assert!(!cafe.room(1).unwrap().is_occupied());
    }

    #[test]
    fn test_checkout_requires_open_session() {
        let mut cafe = Cafe::with_default_floor();
        assert!(matches!(
            cafe.checkout(1, t0()),
            Err(CoreError::RoomNotOccupied { room_id: 1 })
        ));
        assert!(cafe.history().is_empty());
    }

    #[test]
    fn test_immediate_checkout_bills_minimum_one_unit() {
        let mut cafe = Cafe::with_default_floor();
        cafe.book(1, Guest::walk_in(PHONE), t0()).unwrap();

        let record = cafe
            .checkout(1, t0() + chrono::Duration::milliseconds(1))
            .unwrap();
        assert_eq!(record.drinks_total.units(), 0);
        assert_eq!(record.room_charge.units(), 1);
        assert_eq!(cafe.ledger().get(PHONE).unwrap().hours_played, 1);
    }

    #[test]
    fn test_checkout_restores_pre_booking_room_state() {
        let mut cafe = cafe_with_menu();
        let before = cafe.room(3).unwrap().clone();

        cafe.book(3, Guest::walk_in(PHONE), t0()).unwrap();
        cafe.add_drink_order(3, "tea", 2, t0()).unwrap();
        cafe.checkout(3, t0() + chrono::Duration::hours(1)).unwrap();

        assert_eq!(cafe.room(3).unwrap(), &before);
    }

    #[test]
    fn test_room_can_be_rebooked_after_checkout() {
        let mut cafe = Cafe::with_default_floor();
        cafe.book(1, Guest::walk_in(PHONE), t0()).unwrap();
        cafe.checkout(1, t0() + chrono::Duration::hours(1)).unwrap();

        let later = t0() + chrono::Duration::hours(2);
        let session = cafe.book(1, Guest::walk_in("01207654321"), later).unwrap();
        assert_eq!(session.started_at, later);
    }

    #[test]
    fn test_rate_edit_does_not_change_open_session() {
        let mut cafe = Cafe::with_default_floor();
        cafe.book(1, Guest::walk_in(PHONE), t0()).unwrap();

        // Mid-session rate hike from 40 to 50
        cafe.set_rate(RoomCategory::Ps5, Money::from_units(50)).unwrap();

        let end = t0() + chrono::Duration::minutes(90);
        let record = cafe.checkout(1, end).unwrap();
        assert_eq!(record.room_charge.units(), 60); // still ceil(1.5 * 40)

        // The next booking picks up the new rate
        let session = cafe.book(1, Guest::walk_in(PHONE), end).unwrap();
        assert_eq!(session.hourly_rate, Money::from_units(50));
    }

    #[test]
    fn test_update_rates_rejects_bad_table() {
        let mut cafe = Cafe::with_default_floor();
        let bad = RateTable {
            ps5: Money::from_units(45),
            ps4: Money::zero(),
            billiards: Money::from_units(55),
        };
        assert!(matches!(
            cafe.update_rates(bad),
            Err(CoreError::InvalidRate { rate: 0 })
        ));
        assert_eq!(cafe.rates(), &RateTable::default());
    }

    #[test]
    fn test_customer_discount_is_frozen_at_booking() {
        let mut cafe = Cafe::with_default_floor();
        let mut regular = Customer::new(PHONE, Some("Omar".to_string()));
        regular.discount_percent = 10;
        cafe.add_customer(regular).unwrap();

        let guest = Guest {
            phone: PHONE.to_string(),
            name: Some("Omar".to_string()),
            discount_percent: 10,
        };
        cafe.book(1, guest, t0()).unwrap();

        // Admin drops the discount mid-session; the session keeps 10%
        let mut edited = cafe.ledger().get(PHONE).unwrap().clone();
        edited.discount_percent = 0;
        cafe.update_customer(edited).unwrap();

        let record = cafe.checkout(1, t0() + chrono::Duration::minutes(90)).unwrap();
        assert_eq!(record.room_charge.units(), 54); // 60 less 10%
    }

    #[test]
    fn test_customer_deleted_mid_session_still_checks_out() {
        let mut cafe = Cafe::with_default_floor();
        cafe.book(1, Guest::walk_in(PHONE), t0()).unwrap();
        cafe.remove_customer(PHONE).unwrap();

        let record = cafe.checkout(1, t0() + chrono::Duration::minutes(30)).unwrap();
        assert_eq!(record.phone, PHONE);

        // Checkout re-created the ledger entry and credited it
        let customer = cafe.ledger().get(PHONE).unwrap();
        assert_eq!(customer.hours_played, 1);
    }

    #[test]
    fn test_drink_deleted_mid_session_prices_at_zero() {
        let mut cafe = cafe_with_menu();
        cafe.book(1, Guest::walk_in(PHONE), t0()).unwrap();
        cafe.add_drink_order(1, "coffee", 2, t0()).unwrap();
        cafe.add_drink_order(1, "tea", 1, t0()).unwrap();

        cafe.remove_drink("tea").unwrap();

        let record = cafe.checkout(1, t0() + chrono::Duration::hours(1)).unwrap();
        assert_eq!(record.drinks_total.units(), 30); // tea contributes 0
        assert_eq!(record.orders.len(), 2); // but the order itself is kept
    }

    #[test]
    fn test_current_charge_matches_checkout_at_same_instant() {
        let mut cafe = cafe_with_menu();
        cafe.book(2, Guest::walk_in(PHONE), t0()).unwrap();
        cafe.add_drink_order(2, "coffee", 2, t0()).unwrap();

        let as_of = t0() + chrono::Duration::minutes(90);
        let live = cafe.current_charge(2, as_of).unwrap();
        let record = cafe.checkout(2, as_of).unwrap();

        assert_eq!(live.room_charge, record.room_charge);
        assert_eq!(live.drinks_total, record.drinks_total);
        assert_eq!(live.total, record.total);
    }

    #[test]
    fn test_independent_rooms_do_not_interfere() {
        let mut cafe = cafe_with_menu();
        cafe.book(1, Guest::walk_in(PHONE), t0()).unwrap();
        cafe.book(6, Guest::walk_in("01207654321"), t0()).unwrap();
        cafe.add_drink_order(1, "coffee", 1, t0()).unwrap();

        let record = cafe.checkout(6, t0() + chrono::Duration::hours(1)).unwrap();
        assert_eq!(record.category, RoomCategory::Billiards);
        assert_eq!(record.room_charge.units(), 50);
        assert_eq!(record.drinks_total.units(), 0);

        // Room 1 still occupied with its order intact
        let session = cafe.room(1).unwrap().session.as_ref().unwrap();
        assert_eq!(session.orders.len(), 1);
    }
}
