//! # Billing Calculator
//!
//! Pure functions converting a session's elapsed time and drink orders into
//! charges. No side effects and no clock access: the caller supplies the
//! effective "as-of" instant, so the same functions serve the live charge
//! display on an open session and the final bill at checkout.
//!
//! ## Rounding Policy
//! Room time is billed by the hour fraction and rounded UP to the whole
//! currency unit (house rounding): a one-millisecond session at any
//! positive rate bills at least 1 unit. The discount step rounds the
//! discounted charge up as well, so every monetary derivation carries the
//! same policy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::menu::DrinkMenu;
use crate::money::Money;
use crate::types::{DrinkOrder, Session};

/// Milliseconds per billable hour.
pub const MS_PER_HOUR: i64 = 3_600_000;

// =============================================================================
// Bill
// =============================================================================

/// The result of pricing a session at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Bill {
    /// Time charge: ceil(hours × rate), discounted.
    pub room_charge: Money,

    /// Sum over all drink orders at menu prices.
    pub drinks_total: Money,

    /// room_charge + drinks_total, exactly.
    pub total: Money,
}

// =============================================================================
// Calculator
// =============================================================================

/// Billable whole hours for a duration: ceil(duration / 1 hour).
///
/// Used by the ledger to credit play hours at checkout. Negative durations
/// clamp to zero.
pub fn billable_hours(duration_ms: i64) -> i64 {
    let duration_ms = duration_ms.max(0);
    (duration_ms + MS_PER_HOUR - 1) / MS_PER_HOUR
}

/// The room time charge for a duration at an hourly rate.
///
/// `ceil(duration_ms × rate / 3_600_000)`, then the discount percentage is
/// taken off and the result rounded up again. Integer math throughout,
/// widened to i128 so large durations cannot overflow.
///
/// ```rust
/// use arcade_core::billing::room_charge;
/// use arcade_core::money::Money;
///
/// // 90 minutes at EGP 40/hr: ceil(1.5 × 40) = 60
/// assert_eq!(room_charge(5_400_000, Money::from_units(40), 0).units(), 60);
/// // Any positive duration bills at least one unit
/// assert_eq!(room_charge(1, Money::from_units(40), 0).units(), 1);
/// ```
pub fn room_charge(duration_ms: i64, rate: Money, discount_percent: u8) -> Money {
    let duration_ms = i128::from(duration_ms.max(0));
    let rate = i128::from(rate.units());

    let ms_per_hour = i128::from(MS_PER_HOUR);
    let gross = (duration_ms * rate + ms_per_hour - 1) / ms_per_hour;

    let keep = i128::from(100 - u16::from(discount_percent.min(100)));
    let discounted = (gross * keep + 99) / 100;

    Money::from_units(discounted as i64)
}

/// Sum of unit price × quantity over all orders.
///
/// Menu lookups are best-effort: an order whose drink id has been deleted
/// from the menu contributes zero, it never errors.
pub fn drinks_total(orders: &[DrinkOrder], menu: &DrinkMenu) -> Money {
    orders
        .iter()
        .map(|order| {
            menu.price_of(&order.drink_id)
                .unwrap_or(Money::zero())
                .multiply_quantity(order.quantity)
        })
        .sum()
}

/// Prices a session as of the given instant.
///
/// Works on an open session (live display, `as_of = now`) and on a closing
/// session (checkout passes the recorded end time). Uses the rate and
/// discount frozen into the session at booking.
pub fn quote(session: &Session, menu: &DrinkMenu, as_of: DateTime<Utc>) -> Bill {
    let room = room_charge(
        session.elapsed_ms(as_of),
        session.hourly_rate,
        session.discount_percent,
    );
    let drinks = drinks_total(&session.orders, menu);

    Bill {
        room_charge: room,
        drinks_total: drinks,
        total: room + drinks,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
