//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! Floating point cannot represent currency exactly (0.1 + 0.2 !=
//! 0.30000000000000004 is the classic failure). All monetary values in
//! Arcade POS are whole Egyptian pounds held in an `i64`: the lounge
//! prices everything in whole pounds (hourly rates of 40/30/50, drinks at
//! 15 and 10) and the billing policy rounds room time up to the whole
//! pound, so there is never a fractional amount to carry.
//!
//! ## Usage
//! ```rust
//! use arcade_core::money::Money;
//!
//! let rate = Money::from_units(40);            // EGP 40
//! let two_hours = rate * 2;                    // EGP 80
//! let with_drink = two_hours + Money::from_units(15);
//! assert_eq!(with_drink.units(), 95);
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units (EGP).
///
/// ## Design Decisions
/// - **i64 (signed)**: room for refunds and corrections even though the
///   billing path only ever produces non-negative amounts
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support so amounts serialize as plain numbers
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ```rust
    /// use arcade_core::money::Money;
    ///
    /// let rate = Money::from_units(40);
    /// assert_eq!(rate.units(), 40);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the amount is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the amount is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies the amount by a quantity.
    ///
    /// ```rust
    /// use arcade_core::money::Money;
    ///
    /// let coffee = Money::from_units(15);
    /// assert_eq!(coffee.multiply_quantity(2).units(), 30);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for logs and debugging. The frontend owns real currency
/// formatting and localization.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EGP {}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(40);
        assert_eq!(money.units(), 40);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(40)), "EGP 40");
        assert_eq!(format!("{}", Money::from_units(0)), "EGP 0");
        assert_eq!(format!("{}", Money::from_units(-5)), "EGP -5");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(60);
        let b = Money::from_units(40);

        assert_eq!((a + b).units(), 100);
        assert_eq!((a - b).units(), 20);
        assert_eq!((a * 3).units(), 180);
    }

    #[test]
    fn test_sum() {
        let total: Money = [15, 15, 10].into_iter().map(Money::from_units).sum();
        assert_eq!(total.units(), 40);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_units(1).is_positive());
        assert!(Money::from_units(-1).is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let tea = Money::from_units(10);
        assert_eq!(tea.multiply_quantity(3).units(), 30);
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_units(40)).unwrap();
        assert_eq!(json, "40");
    }
}
