//! # Customer Ledger
//!
//! Per-customer cumulative play hours, keyed by phone number.
//!
//! The checkout path only ever adds hours (`credit`), so ledger hours are
//! monotonically non-decreasing. Administrative CRUD may mutate any field
//! directly and is not constrained by the state machine. Deleting a
//! customer whose session is still open is allowed: the session carries
//! denormalized copies of everything billing needs, so it survives the
//! deletion untouched.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::Customer;
use crate::validation::{validate_discount_percent, validate_phone};

// =============================================================================
// Customer Ledger
// =============================================================================

/// The play-hours ledger, keyed by phone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerLedger {
    customers: BTreeMap<String, Customer>,
}

impl CustomerLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        CustomerLedger {
            customers: BTreeMap::new(),
        }
    }

    /// Looks up a customer by phone.
    pub fn get(&self, phone: &str) -> Option<&Customer> {
        self.customers.get(phone)
    }

    /// Returns the customer for this phone, creating a zero-hours entry if
    /// the phone is unseen. An existing entry is left untouched; `name` is
    /// only used when creating.
    pub fn ensure(&mut self, phone: &str, name: Option<String>) -> &mut Customer {
        self.customers
            .entry(phone.to_string())
            .or_insert_with(|| Customer::new(phone, name))
    }

    /// Credits billed hours to a customer and refreshes their last visit.
    ///
    /// Hours are additive; this is the only mutation the checkout path
    /// performs on the ledger.
    pub fn credit(&mut self, phone: &str, hours: i64, now: DateTime<Utc>) -> CoreResult<()> {
        let customer = self
            .customers
            .get_mut(phone)
            .ok_or_else(|| CoreError::CustomerNotFound(phone.to_string()))?;

        customer.credit(hours, now);
        Ok(())
    }

    // =========================================================================
    // Administrative CRUD
    // =========================================================================

    /// Adds a customer record (admin path).
    ///
    /// ## Errors
    /// - `Validation(Duplicate)` if the phone is already on file
    /// - `Validation` for a malformed phone or out-of-range discount
    pub fn add(&mut self, customer: Customer) -> CoreResult<()> {
        let phone = validate_phone(&customer.phone)?;
        validate_discount_percent(i64::from(customer.discount_percent))?;

        if self.customers.contains_key(&phone) {
            return Err(CoreError::Validation(ValidationError::Duplicate {
                field: "phone".to_string(),
                value: phone,
            }));
        }

        self.customers.insert(phone, customer);
        Ok(())
    }

    /// Replaces a customer record (admin path). The phone is the key and
    /// cannot be changed by an update.
    pub fn update(&mut self, customer: Customer) -> CoreResult<()> {
        validate_discount_percent(i64::from(customer.discount_percent))?;

        if !self.customers.contains_key(&customer.phone) {
            return Err(CoreError::CustomerNotFound(customer.phone));
        }

        self.customers.insert(customer.phone.clone(), customer);
        Ok(())
    }

    /// Removes a customer record (admin path).
    ///
    /// Any open session for this customer keeps billing normally; it
    /// carries its own phone, rate and discount snapshots.
    pub fn remove(&mut self, phone: &str) -> CoreResult<Customer> {
        self.customers
            .remove(phone)
            .ok_or_else(|| CoreError::CustomerNotFound(phone.to_string()))
    }

    /// Customers in phone order.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.values()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
