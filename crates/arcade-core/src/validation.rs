//! # Validation Module
//!
//! Input validation utilities for Arcade POS.
//!
//! ## Validation Strategy
//! ```text
//! Layer 1: Frontend (TypeScript)
//! ├── Basic format checks (empty, length)
//! └── Immediate user feedback
//!          │
//!          ▼
//! Layer 2: Station commands (Rust)
//! ├── Type validation (deserialization)
//! └── THIS MODULE: field validation before state machine logic
//! ```
//!
//! ## Usage
//! ```rust
//! use arcade_core::validation::{validate_phone, validate_quantity};
//!
//! validate_phone("01001234567").unwrap();
//! validate_quantity(2).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_ORDER_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer phone number.
///
/// ## Rules
/// - Must not be empty
/// - Digits only after trimming
/// - Between 7 and 15 digits (the booking UI enforces the stricter local
///   11-digit format; the core accepts any sane length)
///
/// ## Returns
/// The trimmed phone string.
///
/// ## Example
/// ```rust
/// use arcade_core::validation::validate_phone;
///
/// assert!(validate_phone("01001234567").is_ok());
/// assert!(validate_phone("").is_err());
/// assert!(validate_phone("01-00-123").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<String> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits".to_string(),
        });
    }

    if !(7..=15).contains(&phone.len()) {
        return Err(ValidationError::OutOfRange {
            field: "phone".to_string(),
            min: 7,
            max: 15,
        });
    }

    Ok(phone.to_string())
}

/// Validates a drink name.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 100 characters
pub fn validate_drink_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a drink order quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ORDER_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ORDER_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ORDER_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a drink unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an hourly rate.
///
/// ## Rules
/// - Must be strictly positive; a free category is never valid
pub fn validate_rate(rate: Money) -> ValidationResult<()> {
    if !rate.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "hourly rate".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
pub fn validate_discount_percent(percent: i64) -> ValidationResult<()> {
    if !(0..=100).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
