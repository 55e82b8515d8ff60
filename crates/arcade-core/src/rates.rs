//! # Rate Table
//!
//! Holds the hourly price for each room category.
//!
//! Rates are strictly positive. Edits to the table never touch open
//! sessions: every session freezes its rate at booking time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::RoomCategory;

// =============================================================================
// Rate Table
// =============================================================================

/// Hourly rate per room category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RateTable {
    #[serde(rename = "PS5")]
    pub ps5: Money,
    #[serde(rename = "PS4")]
    pub ps4: Money,
    #[serde(rename = "Billiards")]
    pub billiards: Money,
}

impl RateTable {
    /// Builds a rate table, rejecting any non-positive rate.
    pub fn new(ps5: Money, ps4: Money, billiards: Money) -> CoreResult<Self> {
        let table = RateTable { ps5, ps4, billiards };
        table.validate()?;
        Ok(table)
    }

    /// The hourly rate for a category.
    pub fn rate(&self, category: RoomCategory) -> Money {
        match category {
            RoomCategory::Ps5 => self.ps5,
            RoomCategory::Ps4 => self.ps4,
            RoomCategory::Billiards => self.billiards,
        }
    }

    /// Sets the rate for one category. Rejects rates <= 0.
    pub fn set(&mut self, category: RoomCategory, rate: Money) -> CoreResult<()> {
        if !rate.is_positive() {
            return Err(CoreError::InvalidRate { rate: rate.units() });
        }

        match category {
            RoomCategory::Ps5 => self.ps5 = rate,
            RoomCategory::Ps4 => self.ps4 = rate,
            RoomCategory::Billiards => self.billiards = rate,
        }
        Ok(())
    }

    /// Replaces the whole table at once. Rejects if any rate is <= 0 and
    /// leaves the current table untouched in that case.
    pub fn replace(&mut self, next: RateTable) -> CoreResult<()> {
        next.validate()?;
        *self = next;
        Ok(())
    }

    fn validate(&self) -> CoreResult<()> {
        for category in RoomCategory::ALL {
            let rate = self.rate(category);
            if !rate.is_positive() {
                return Err(CoreError::InvalidRate { rate: rate.units() });
            }
        }
        Ok(())
    }
}

/// Opening rates for the lounge.
impl Default for RateTable {
    fn default() -> Self {
        RateTable {
            ps5: Money::from_units(40),
            ps4: Money::from_units(30),
            billiards: Money::from_units(50),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let table = RateTable::default();
        assert_eq!(table.rate(RoomCategory::Ps5).units(), 40);
        assert_eq!(table.rate(RoomCategory::Ps4).units(), 30);
        assert_eq!(table.rate(RoomCategory::Billiards).units(), 50);
    }

    #[test]
    fn test_set_rate() {
        let mut table = RateTable::default();
        table.set(RoomCategory::Ps5, Money::from_units(50)).unwrap();
        assert_eq!(table.rate(RoomCategory::Ps5).units(), 50);
    }

    #[test]
    fn test_set_rejects_non_positive() {
        let mut table = RateTable::default();

        let err = table.set(RoomCategory::Ps4, Money::zero()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRate { rate: 0 }));

        let err = table
            .set(RoomCategory::Ps4, Money::from_units(-10))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidRate { rate: -10 }));

        // Table unchanged after rejected edits
        assert_eq!(table.rate(RoomCategory::Ps4).units(), 30);
    }

    #[test]
    fn test_replace_is_all_or_nothing() {
        let mut table = RateTable::default();

        let bad = RateTable {
            ps5: Money::from_units(45),
            ps4: Money::zero(),
            billiards: Money::from_units(55),
        };
        assert!(table.replace(bad).is_err());
        assert_eq!(table, RateTable::default());

        let good = RateTable {
            ps5: Money::from_units(45),
            ps4: Money::from_units(35),
            billiards: Money::from_units(55),
        };
        table.replace(good).unwrap();
        assert_eq!(table.rate(RoomCategory::Billiards).units(), 55);
    }

    #[test]
    fn test_wire_form_uses_category_labels() {
        let json = serde_json::to_string(&RateTable::default()).unwrap();
        assert_eq!(json, r#"{"PS5":40,"PS4":30,"Billiards":50}"#);
    }
}
