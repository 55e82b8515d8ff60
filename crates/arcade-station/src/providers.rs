//! # Collaborator Providers
//!
//! Boundary types for the two external collaborators the station consumes
//! but does not implement: the network-backed customer directory and the
//! drink-menu import feed.
//!
//! Both feeds arrive as loosely-shaped JSON. Explicit schemas are declared
//! here and validated at the boundary; malformed records are rejected with
//! an error instead of propagating untyped data into the core.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use arcade_core::validation::{validate_discount_percent, validate_drink_name, validate_phone, validate_price};
use arcade_core::{Drink, Guest, Money};

// =============================================================================
// Directory Error
// =============================================================================

/// Failures of the customer directory collaborator.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The directory could not be reached or answered abnormally.
    /// Retrying is the collaborator's business, not the station's.
    #[error("Customer directory unavailable: {0}")]
    Unavailable(String),

    /// The directory answered with a record that fails validation.
    #[error("Malformed customer record: {reason}")]
    Malformed { reason: String },
}

// =============================================================================
// Customer Directory
// =============================================================================

/// Lookup-by-phone provider. Implementations are typically HTTP-backed;
/// tests use an in-memory stub.
#[async_trait]
pub trait CustomerDirectory: Send + Sync {
    /// Finds the directory record for a phone number. `Ok(None)` means the
    /// directory is healthy but has never seen the phone.
    async fn find_by_phone(&self, phone: &str) -> Result<Option<CustomerRecord>, DirectoryError>;
}

/// The directory's customer payload, exactly as it arrives on the wire.
///
/// The upstream service uses PascalCase field names; they are pinned here
/// so a drifting payload fails loudly at deserialization instead of
/// silently zeroing fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "PhoneNum")]
    pub phone: String,

    #[serde(rename = "CustomerName", default)]
    pub name: Option<String>,

    #[serde(rename = "TotalHourPlayed", default)]
    pub total_hours_played: i64,

    #[serde(rename = "Discount", default)]
    pub discount_percent: i64,
}

impl CustomerRecord {
    /// Validates the record and converts it into a bookable guest.
    ///
    /// ## Errors
    /// `Malformed` for a non-digit phone, an out-of-range discount or a
    /// negative hours figure.
    pub fn try_into_guest(self) -> Result<Guest, DirectoryError> {
        let phone = validate_phone(&self.phone).map_err(|err| DirectoryError::Malformed {
            reason: err.to_string(),
        })?;

        validate_discount_percent(self.discount_percent).map_err(|err| {
            DirectoryError::Malformed {
                reason: err.to_string(),
            }
        })?;

        if self.total_hours_played < 0 {
            return Err(DirectoryError::Malformed {
                reason: "TotalHourPlayed must not be negative".to_string(),
            });
        }

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Guest {
            phone,
            name,
            discount_percent: self.discount_percent as u8,
        })
    }
}

// =============================================================================
// Menu Import
// =============================================================================

/// One item of an imported drink menu, as it arrives on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRecord {
    /// Upstream id; a fresh one is minted when absent.
    #[serde(default)]
    pub id: Option<String>,

    pub name: String,

    /// Unit price in whole currency units.
    pub price: i64,
}

impl MenuItemRecord {
    /// Validates the record and converts it into a menu drink, minting an
    /// id if the feed did not carry one.
    pub fn try_into_drink(self, mint_id: impl FnOnce() -> String) -> Result<Drink, DirectoryError> {
        validate_drink_name(&self.name).map_err(|err| DirectoryError::Malformed {
            reason: err.to_string(),
        })?;

        let price = Money::from_units(self.price);
        validate_price(price).map_err(|err| DirectoryError::Malformed {
            reason: err.to_string(),
        })?;

        let id = self
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(mint_id);

        Ok(Drink {
            id,
            name: self.name.trim().to_string(),
            price,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_record_wire_shape() {
        let json = r#"{
            "PhoneNum": "01001234567",
            "CustomerName": "Omar Hassan",
            "TotalHourPlayed": 42,
            "Discount": 10
        }"#;

        let record: CustomerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.phone, "01001234567");
        assert_eq!(record.total_hours_played, 42);

        let guest = record.try_into_guest().unwrap();
        assert_eq!(guest.phone, "01001234567");
        assert_eq!(guest.name.as_deref(), Some("Omar Hassan"));
        assert_eq!(guest.discount_percent, 10);
    }

    #[test]
    fn test_customer_record_optional_fields_default() {
        let record: CustomerRecord =
            serde_json::from_str(r#"{"PhoneNum": "01001234567"}"#).unwrap();
        let guest = record.try_into_guest().unwrap();
        assert!(guest.name.is_none());
        assert_eq!(guest.discount_percent, 0);
    }

    #[test]
    fn test_customer_record_rejects_malformed() {
        let bad_phone = CustomerRecord {
            phone: "not-a-phone".to_string(),
            name: None,
            total_hours_played: 0,
            discount_percent: 0,
        };
        assert!(matches!(
            bad_phone.try_into_guest(),
            Err(DirectoryError::Malformed { .. })
        ));

        let bad_discount = CustomerRecord {
            phone: "01001234567".to_string(),
            name: None,
            total_hours_played: 0,
            discount_percent: 150,
        };
        assert!(matches!(
            bad_discount.try_into_guest(),
            Err(DirectoryError::Malformed { .. })
        ));

        let bad_hours = CustomerRecord {
            phone: "01001234567".to_string(),
            name: None,
            total_hours_played: -1,
            discount_percent: 0,
        };
        assert!(matches!(
            bad_hours.try_into_guest(),
            Err(DirectoryError::Malformed { .. })
        ));
    }

    #[test]
    fn test_menu_item_record_conversion() {
        let record: MenuItemRecord =
            serde_json::from_str(r#"{"id": "tea", "name": "Tea", "price": 10}"#).unwrap();
        let drink = record.try_into_drink(|| "minted".to_string()).unwrap();
        assert_eq!(drink.id, "tea");
        assert_eq!(drink.price, Money::from_units(10));
    }

    #[test]
    fn test_menu_item_record_mints_missing_id() {
        let record: MenuItemRecord =
            serde_json::from_str(r#"{"name": "Tea", "price": 10}"#).unwrap();
        let drink = record.try_into_drink(|| "minted".to_string()).unwrap();
        assert_eq!(drink.id, "minted");
    }

    #[test]
    fn test_menu_item_record_rejects_malformed() {
        let nameless = MenuItemRecord {
            id: None,
            name: "   ".to_string(),
            price: 10,
        };
        assert!(nameless.try_into_drink(|| "x".to_string()).is_err());

        let negative = MenuItemRecord {
            id: None,
            name: "Tea".to_string(),
            price: -1,
        };
        assert!(negative.try_into_drink(|| "x".to_string()).is_err());
    }
}
