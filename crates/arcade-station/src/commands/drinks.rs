//! # Drink Commands
//!
//! Menu CRUD and bulk import. Menu management is administrative and
//! independent of the session state machine; deleting a drink never
//! touches sessions or history.

use tracing::{debug, info};
use uuid::Uuid;

use arcade_core::{Drink, Money};

use crate::error::ApiError;
use crate::providers::MenuItemRecord;
use crate::state::CafeState;

/// Lists the menu in id order.
pub fn list_drinks(state: &CafeState) -> Vec<Drink> {
    debug!("list_drinks command");
    state.with_cafe(|cafe| cafe.menu().iter().cloned().collect())
}

/// Adds a drink with a freshly minted id.
pub fn add_drink(state: &CafeState, name: String, price: i64) -> Result<Drink, ApiError> {
    debug!(name = %name, price = %price, "add_drink command");

    let drink = Drink {
        id: Uuid::new_v4().to_string(),
        name,
        price: Money::from_units(price),
    };

    state
        .with_cafe_mut(|cafe| cafe.add_drink(drink.clone()))
        .map_err(ApiError::from)?;

    info!(drink_id = %drink.id, name = %drink.name, "Drink added");
    Ok(drink)
}

/// Replaces an existing drink's name and price.
pub fn update_drink(
    state: &CafeState,
    id: String,
    name: String,
    price: i64,
) -> Result<Drink, ApiError> {
    debug!(drink_id = %id, "update_drink command");

    let drink = Drink {
        id,
        name,
        price: Money::from_units(price),
    };

    state
        .with_cafe_mut(|cafe| cafe.update_drink(drink.clone()))
        .map_err(ApiError::from)?;

    info!(drink_id = %drink.id, "Drink updated");
    Ok(drink)
}

/// Removes a drink from the menu. Orders already placed against it keep
/// their entries and price at zero from now on.
pub fn delete_drink(state: &CafeState, id: String) -> Result<Drink, ApiError> {
    debug!(drink_id = %id, "delete_drink command");

    let removed = state
        .with_cafe_mut(|cafe| cafe.remove_drink(&id))
        .map_err(ApiError::from)?;

    info!(drink_id = %removed.id, name = %removed.name, "Drink deleted");
    Ok(removed)
}

/// Imports a drink menu from an external feed.
///
/// All-or-nothing: every record is validated before anything is applied,
/// so one malformed item rejects the whole batch. Items whose id is
/// already on the menu update in place; the rest are added.
pub fn import_menu(state: &CafeState, items: Vec<MenuItemRecord>) -> Result<usize, ApiError> {
    debug!(count = items.len(), "import_menu command");

    let drinks = items
        .into_iter()
        .map(|item| item.try_into_drink(|| Uuid::new_v4().to_string()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| ApiError::validation(err.to_string()))?;

    let imported = drinks.len();
    state
        .with_cafe_mut(|cafe| {
            for drink in drinks {
                if cafe.menu().contains(&drink.id) {
                    cafe.update_drink(drink)?;
                } else {
                    cafe.add_drink(drink)?;
                }
            }
            Ok::<(), arcade_core::CoreError>(())
        })
        .map_err(ApiError::from)?;

    info!(imported = imported, "Menu imported");
    Ok(imported)
}

// =============================================================================
// Unit Tests
// =============================================================================
