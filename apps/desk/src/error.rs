//! # Desk Error Type
//!
//! Unified error type for desk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Billing Desk                       │
//! │                                                                         │
//! │  Window layer                Rust                                       │
//! │  ────────────                ────                                       │
//! │                                                                         │
//! │  "Generate Bill" clicked                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  generate_bill(...) -> Result<BillView, DeskError>               │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  "abc" in a box? ─── DeskError::invalid_input ─────┐            │  │
//! │  │         │                                           │            │  │
//! │  │         ▼                                           ▼            │  │
//! │  │  Core rule broken? ─── CoreError ──────────────► DeskError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Message box: title from `code`, body from `message`                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these errors end the process; each becomes a message box and the
//! cashier tries again.

use serde::Serialize;
use smak_core::CoreError;

/// Error returned from desk commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_QUANTITY",
///   "message": "Quantity for Beef Burger cannot be negative (got -2)"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for desk responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Menu item unknown to the catalog (wiring mistake)
    NotFound,

    /// Quantity below zero
    InvalidQuantity,

    /// Discount or VAT negative, NaN or infinite
    InvalidPercentage,

    /// Text that is not a number at all
    InvalidInput,

    /// Catalog data failed validation
    ValidationError,

    /// Receipt could not be written
    SaveFailure,

    /// Save requested before any bill was generated
    NoBill,

    /// Anything else
    Internal,
}

impl DeskError {
    /// Creates a new desk error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        DeskError {
            code,
            message: message.into(),
        }
    }

    /// Creates an input parsing error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        DeskError::new(ErrorCode::InvalidInput, message)
    }

    /// Creates the "nothing to save" warning.
    pub fn no_bill() -> Self {
        DeskError::new(ErrorCode::NoBill, "No bill to save.")
    }

    /// Creates a save failure from an I/O error.
    pub fn save_failure(err: &std::io::Error) -> Self {
        tracing::error!("Receipt save failed: {}", err);
        DeskError::new(ErrorCode::SaveFailure, format!("Failed to save bill: {}", err))
    }

    /// Warnings are shown with a warning icon instead of an error icon.
    pub fn is_warning(&self) -> bool {
        self.code == ErrorCode::NoBill
    }
}

/// Converts core errors to desk errors.
impl From<CoreError> for DeskError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ItemNotFound(name) => {
                tracing::error!(item = %name, "Item missing from catalog");
                ErrorCode::NotFound
            }
            CoreError::InvalidQuantity { .. } => ErrorCode::InvalidQuantity,
            CoreError::InvalidPercentage { .. } => ErrorCode::InvalidPercentage,
            CoreError::Validation(_) => ErrorCode::ValidationError,
            CoreError::AmountOverflow(context) => {
                tracing::error!(%context, "Amount overflow");
                ErrorCode::Internal
            }
        };
        DeskError::new(code, err.to_string())
    }
}

impl std::fmt::Display for DeskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for DeskError {}

/// Result type for desk commands.
pub type DeskResult<T> = Result<T, DeskError>;
