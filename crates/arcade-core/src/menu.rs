//! # Drink Menu
//!
//! The drink menu, keyed by drink id. Independently CRUD-managed and
//! deliberately decoupled from the state machine: deleting a drink that
//! past orders reference leaves those orders intact, and billing prices
//! the dangling reference at zero.

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Drink;
use crate::validation::{validate_drink_name, validate_price};

// =============================================================================
// Drink Menu
// =============================================================================

/// Menu mapping drink id to drink.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrinkMenu {
    drinks: BTreeMap<String, Drink>,
}

impl DrinkMenu {
    /// Creates an empty menu.
    pub fn new() -> Self {
        DrinkMenu {
            drinks: BTreeMap::new(),
        }
    }

    /// Looks up a drink by id.
    pub fn get(&self, id: &str) -> Option<&Drink> {
        self.drinks.get(id)
    }

    /// Whether a drink id is currently on the menu.
    pub fn contains(&self, id: &str) -> bool {
        self.drinks.contains_key(id)
    }

    /// Best-effort unit price lookup. `None` for deleted/unknown ids.
    pub fn price_of(&self, id: &str) -> Option<Money> {
        self.drinks.get(id).map(|d| d.price)
    }

    /// Adds a drink to the menu.
    ///
    /// ## Errors
    /// - `Validation(Duplicate)` if the id is already on the menu
    /// - `Validation` if the name is empty/too long or the price negative
    pub fn add(&mut self, drink: Drink) -> CoreResult<()> {
        validate_drink_name(&drink.name)?;
        validate_price(drink.price)?;

        if self.drinks.contains_key(&drink.id) {
            return Err(CoreError::Validation(ValidationError::Duplicate {
                field: "drink id".to_string(),
                value: drink.id,
            }));
        }

        self.drinks.insert(drink.id.clone(), drink);
        Ok(())
    }

    /// Replaces an existing drink (same id) with new name/price.
    ///
    /// ## Errors
    /// - `DrinkNotFound` if the id is not on the menu
    /// - `Validation` for a bad name or price
    pub fn update(&mut self, drink: Drink) -> CoreResult<()> {
        validate_drink_name(&drink.name)?;
        validate_price(drink.price)?;

        if !self.drinks.contains_key(&drink.id) {
            return Err(CoreError::DrinkNotFound(drink.id));
        }

        self.drinks.insert(drink.id.clone(), drink);
        Ok(())
    }

    /// Removes a drink from the menu.
    ///
    /// Past orders referencing the id are unaffected; they simply price at
    /// zero from now on.
    pub fn remove(&mut self, id: &str) -> CoreResult<Drink> {
        self.drinks
            .remove(id)
            .ok_or_else(|| CoreError::DrinkNotFound(id.to_string()))
    }

    /// Drinks in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Drink> {
        self.drinks.values()
    }

    pub fn len(&self) -> usize {
        self.drinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
