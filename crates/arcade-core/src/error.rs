//! # Error Types
//!
//! Domain-specific error types for arcade-core.
//!
//! ## Error Hierarchy
//! ```text
//! arcade-core errors (this file)
//! ├── CoreError        - State machine and billing rule violations
//! └── ValidationError  - Input validation failures
//!
//! arcade-station errors (separate crate)
//! └── ApiError         - What the terminal frontend sees (serialized)
//!
//! Flow: ValidationError → CoreError → ApiError → Frontend
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (room id, phone, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every operation fails atomically: an error means no state changed

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent state machine or billing rule violations. They
/// are returned synchronously and never leave partial state behind.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No room is provisioned under this id.
    #[error("Room not found: {room_id}")]
    RoomNotFound { room_id: u32 },

    /// Booking attempted on a room that already has an open session.
    ///
    /// The existing session is left untouched; a room must be checked out
    /// before it can be booked again.
    #[error("Room {room_id} is already occupied")]
    RoomUnavailable { room_id: u32 },

    /// Drink order or checkout attempted on a room with no open session.
    #[error("Room {room_id} has no open session")]
    RoomNotOccupied { room_id: u32 },

    /// Drink order quantity must be a positive integer.
    #[error("Invalid quantity: {quantity} (must be positive)")]
    InvalidQuantity { quantity: i64 },

    /// Hourly rates must be strictly positive.
    ///
    /// A zero rate would make every session in the category free, so bad
    /// input is rejected instead of clamped.
    #[error("Invalid hourly rate: {rate} (must be positive)")]
    InvalidRate { rate: i64 },

    /// Booking attempted without a resolvable customer identity.
    #[error("Customer could not be resolved for phone: {phone}")]
    CustomerUnresolved { phone: String },

    /// Drink id is not on the menu.
    #[error("Drink not found: {0}")]
    DrinkNotFound(String),

    /// No ledger entry exists for this phone number.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before state machine logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., non-digit characters in a phone number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., phone number already on file).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::RoomUnavailable { room_id: 3 };
        assert_eq!(err.to_string(), "Room 3 is already occupied");

        let err = CoreError::RoomNotOccupied { room_id: 5 };
        assert_eq!(err.to_string(), "Room 5 has no open session");

        let err = CoreError::InvalidRate { rate: 0 };
        assert_eq!(err.to_string(), "Invalid hourly rate: 0 (must be positive)");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "phone".to_string(),
        };
        assert_eq!(err.to_string(), "phone is required");

        let err = ValidationError::Duplicate {
            field: "phone".to_string(),
            value: "01001234567".to_string(),
        };
        assert_eq!(err.to_string(), "phone '01001234567' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
