//! # Room Commands
//!
//! The session lifecycle as the terminal drives it.
//!
//! ## Room Lifecycle
//! ```text
//! ┌───────────┐  book_room   ┌───────────┐  checkout_room  ┌───────────┐
//! │ Available │─────────────►│ Occupied  │────────────────►│ Available │
//! └───────────┘              └───────────┘                 └───────────┘
//!                              │      ▲
//!                              │      │ order_drink
//!                              └──────┘ current_charge (read-only poll)
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use arcade_core::{Bill, CheckoutRecord, Guest, Room, Session};

use crate::error::ApiError;
use crate::providers::CustomerDirectory;
use crate::state::CafeState;

/// Room DTO for the room grid.
///
/// Carries an explicit `is_occupied` flag alongside the session so the
/// grid can color tiles without inspecting session internals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomView {
    pub id: u32,
    pub name: String,
    pub category: arcade_core::RoomCategory,
    pub is_occupied: bool,
    pub current_session: Option<Session>,
}

impl From<&Room> for RoomView {
    fn from(room: &Room) -> Self {
        RoomView {
            id: room.id,
            name: room.name.clone(),
            category: room.category,
            is_occupied: room.is_occupied(),
            current_session: room.session.clone(),
        }
    }
}

/// Lists all rooms for the room grid.
pub fn list_rooms(state: &CafeState) -> Vec<RoomView> {
    debug!("list_rooms command");
    state.with_cafe(|cafe| cafe.rooms().iter().map(RoomView::from).collect())
}

/// Books a room for the customer behind a phone number.
///
/// ## Resolution Order
/// 1. The external directory is asked for the phone (off-lock)
/// 2. A local ledger entry, if one exists, wins for name and discount
/// 3. A well-formed phone nobody knows books as a walk-in with zero hours
///
/// ## Errors
/// - `DIRECTORY_ERROR` if the lookup fails or returns a malformed record
/// - `ROOM_UNAVAILABLE` / `NOT_FOUND` / `CUSTOMER_UNRESOLVED` from the core
pub async fn book_room(
    state: &CafeState,
    directory: &dyn CustomerDirectory,
    room_id: u32,
    phone: String,
) -> Result<RoomView, ApiError> {
    debug!(room_id = %room_id, phone = %phone, "book_room command");

    // Collaborator I/O first; the lock is only taken once this resolves.
    let resolved = match directory.find_by_phone(&phone).await? {
        Some(record) => record.try_into_guest()?,
        None => Guest::walk_in(phone.clone()),
    };

    let view = state.with_cafe_mut(|cafe| {
        let guest = match cafe.ledger().get(&resolved.phone) {
            Some(known) => Guest {
                phone: known.phone.clone(),
                name: known.name.clone().or_else(|| resolved.name.clone()),
                discount_percent: known.discount_percent,
            },
            None => resolved.clone(),
        };

        cafe.book(room_id, guest, state.now())?;
        Ok::<RoomView, ApiError>(RoomView::from(cafe.room(room_id)?))
    })?;

    info!(room_id = %room_id, phone = %phone, "Session started");
    Ok(view)
}

/// Appends a drink order to a room's open session.
pub fn order_drink(
    state: &CafeState,
    room_id: u32,
    drink_id: String,
    quantity: i64,
) -> Result<RoomView, ApiError> {
    debug!(room_id = %room_id, drink_id = %drink_id, quantity = %quantity, "order_drink command");

    let view = state.with_cafe_mut(|cafe| {
        cafe.add_drink_order(room_id, &drink_id, quantity, state.now())?;
        Ok::<RoomView, ApiError>(RoomView::from(cafe.room(room_id)?))
    })?;

    info!(room_id = %room_id, drink_id = %drink_id, quantity = %quantity, "Drink ordered");
    Ok(view)
}

/// Live quote for an open session. Read-only; the checkout screen polls
/// this while the session runs.
pub fn current_charge(state: &CafeState, room_id: u32) -> Result<Bill, ApiError> {
    debug!(room_id = %room_id, "current_charge command");
    state
        .with_cafe(|cafe| cafe.current_charge(room_id, state.now()))
        .map_err(ApiError::from)
}

/// Closes a room's session: final bill, ledger credit, history record,
/// room freed. One indivisible transition under the state lock.
pub fn checkout_room(state: &CafeState, room_id: u32) -> Result<CheckoutRecord, ApiError> {
    debug!(room_id = %room_id, "checkout_room command");

    let record = state
        .with_cafe_mut(|cafe| cafe.checkout(room_id, state.now()))
        .map_err(ApiError::from)?;

    info!(
        room_id = %room_id,
        phone = %record.phone,
        total = %record.total,
        "Session checked out"
    );
    Ok(record)
}

// =============================================================================
// Unit Tests
// =============================================================================
