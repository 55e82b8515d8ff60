//! # Customer Commands
//!
//! Administrative customer management plus the directory lookup the
//! booking form uses to preview a customer before booking.
//!
//! Admin CRUD goes straight at the ledger and may set any field; the
//! state machine only touches the ledger through bookings and checkouts.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use arcade_core::Customer;

use crate::error::ApiError;
use crate::providers::CustomerDirectory;
use crate::state::CafeState;

/// What the booking form shows after a successful lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupView {
    pub phone: String,
    pub name: Option<String>,
    pub total_hours_played: i64,
    pub discount_percent: u8,
}

/// Lists the ledger in phone order.
pub fn list_customers(state: &CafeState) -> Vec<Customer> {
    debug!("list_customers command");
    state.with_cafe(|cafe| cafe.ledger().iter().cloned().collect())
}

/// Previews the customer behind a phone number.
///
/// The local ledger answers first; otherwise the external directory is
/// asked. `Ok(None)` means neither knows the phone, which the booking
/// form treats as "will book as a walk-in".
pub async fn lookup_customer(
    state: &CafeState,
    directory: &dyn CustomerDirectory,
    phone: String,
) -> Result<Option<LookupView>, ApiError> {
    debug!(phone = %phone, "lookup_customer command");

    let local = state.with_cafe(|cafe| cafe.ledger().get(&phone).cloned());
    if let Some(customer) = local {
        return Ok(Some(LookupView {
            phone: customer.phone,
            name: customer.name,
            total_hours_played: customer.hours_played,
            discount_percent: customer.discount_percent,
        }));
    }

    match directory.find_by_phone(&phone).await? {
        Some(record) => {
            let hours = record.total_hours_played;
            let guest = record.try_into_guest()?;
            Ok(Some(LookupView {
                phone: guest.phone,
                name: guest.name,
                total_hours_played: hours,
                discount_percent: guest.discount_percent,
            }))
        }
        None => Ok(None),
    }
}

/// Adds a customer record (admin).
pub fn add_customer(
    state: &CafeState,
    phone: String,
    name: Option<String>,
    discount_percent: u8,
) -> Result<Customer, ApiError> {
    debug!(phone = %phone, "add_customer command");

    let mut customer = Customer::new(phone, name);
    customer.discount_percent = discount_percent;

    state
        .with_cafe_mut(|cafe| cafe.add_customer(customer.clone()))
        .map_err(ApiError::from)?;

    info!(phone = %customer.phone, "Customer added");
    Ok(customer)
}

/// Replaces a customer record (admin). Any field except the phone key may
/// change, including played hours.
pub fn update_customer(state: &CafeState, customer: Customer) -> Result<Customer, ApiError> {
    debug!(phone = %customer.phone, "update_customer command");

    state
        .with_cafe_mut(|cafe| cafe.update_customer(customer.clone()))
        .map_err(ApiError::from)?;

    info!(phone = %customer.phone, "Customer updated");
    Ok(customer)
}

/// Removes a customer record (admin). A session the customer still has
/// open keeps billing normally; checkout re-creates the ledger entry.
pub fn delete_customer(state: &CafeState, phone: String) -> Result<Customer, ApiError> {
    debug!(phone = %phone, "delete_customer command");

    let removed = state
        .with_cafe_mut(|cafe| cafe.remove_customer(&phone))
        .map_err(ApiError::from)?;

    info!(phone = %removed.phone, "Customer deleted");
    Ok(removed)
}

// =============================================================================
// Unit Tests
// =============================================================================
