//! # API Error Type
//!
//! Unified error type for station commands.
//!
//! ## Error Handling Strategy
//! Commands return `Result<T, ApiError>`. Domain errors from arcade-core
//! convert into an `ApiError` with a machine-readable code the frontend
//! can switch on and a human-readable message it can display:
//!
//! ```json
//! { "code": "ROOM_UNAVAILABLE", "message": "Room 3 is already occupied" }
//! ```

use serde::Serialize;

use arcade_core::CoreError;

use crate::providers::DirectoryError;

// =============================================================================
// Api Error
// =============================================================================

/// API error returned from station commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (room, drink, customer)
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Booking attempted on an occupied room
    RoomUnavailable,

    /// Drink order or checkout on a room without an open session
    RoomNotOccupied,

    /// Booking without a resolvable customer
    CustomerUnresolved,

    /// The customer directory lookup failed
    DirectoryError,

    /// Anything unexpected
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{resource} not found: {id}"))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core domain errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::RoomNotFound { .. }
            | CoreError::DrinkNotFound(_)
            | CoreError::CustomerNotFound(_) => ErrorCode::NotFound,
            CoreError::RoomUnavailable { .. } => ErrorCode::RoomUnavailable,
            CoreError::RoomNotOccupied { .. } => ErrorCode::RoomNotOccupied,
            CoreError::CustomerUnresolved { .. } => ErrorCode::CustomerUnresolved,
            CoreError::InvalidQuantity { .. }
            | CoreError::InvalidRate { .. }
            | CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts directory lookup failures to API errors.
impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        ApiError::new(ErrorCode::DirectoryError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
