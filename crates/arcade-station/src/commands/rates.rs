//! # Rate Commands
//!
//! Rate table retrieval and update for the admin settings screen.
//!
//! Bad input (a zero or negative rate) is rejected with a validation
//! error; nothing is clamped. Open sessions are never affected by a rate
//! change because every session froze its rate at booking.

use tracing::{debug, info};

use arcade_core::RateTable;

use crate::error::ApiError;
use crate::state::CafeState;

/// The current rate table.
pub fn get_rates(state: &CafeState) -> RateTable {
    debug!("get_rates command");
    state.with_cafe(|cafe| *cafe.rates())
}

/// Replaces the rate table. All three rates must be positive; a bad table
/// is rejected whole and the current table stays in force.
pub fn update_rates(state: &CafeState, rates: RateTable) -> Result<RateTable, ApiError> {
    debug!(?rates, "update_rates command");

    state
        .with_cafe_mut(|cafe| cafe.update_rates(rates))
        .map_err(ApiError::from)?;

    info!(?rates, "Rates updated");
    Ok(rates)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use arcade_core::Money;

    #[test]
    fn test_get_and_update() {
        let state = CafeState::new();
        assert_eq!(get_rates(&state), RateTable::default());

        let next = RateTable {
            ps5: Money::from_units(45),
            ps4: Money::from_units(35),
            billiards: Money::from_units(55),
        };
        update_rates(&state, next).unwrap();
        assert_eq!(get_rates(&state), next);
    }

    #[test]
    fn test_update_rejects_zero_rate() {
        let state = CafeState::new();

        let bad = RateTable {
            ps5: Money::from_units(45),
            ps4: Money::zero(),
            billiards: Money::from_units(55),
        };
        let err = update_rates(&state, bad).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        // The old table is still in force
        assert_eq!(get_rates(&state), RateTable::default());
    }
}
