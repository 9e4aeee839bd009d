//! # Error Types
//!
//! Domain-specific error types for smak-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  smak-core errors (this file)                                          │
//! │  ├── CoreError        - Billing rule violations                        │
//! │  └── ValidationError  - Catalog data failures                          │
//! │                                                                         │
//! │  smak-desk errors (separate crate)                                     │
//! │  └── DeskError        - What the window layer sees (code + message)    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DeskError → message box           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, field, value)
//! 3. The core never recovers from its own errors; callers decide

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core billing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Menu item cannot be found.
    ///
    /// ## When This Occurs
    /// The window layer asked for an item the catalog does not carry. This is
    /// a wiring mistake rather than bad user input.
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    /// A quantity below zero was requested.
    ///
    /// ## User Workflow
    /// ```text
    /// Quantity box for "Beef Burger": -2
    ///      │
    ///      ▼
    /// InvalidQuantity { item: "Beef Burger", quantity: -2 }
    ///      │
    ///      ▼
    /// Message box: "Quantity for Beef Burger cannot be negative."
    /// ```
    #[error("Quantity for {item} cannot be negative (got {quantity})")]
    InvalidQuantity { item: String, quantity: i64 },

    /// Discount or VAT is negative, NaN or infinite.
    #[error("{field} must be a finite, non-negative percentage (got {value})")]
    InvalidPercentage { field: String, value: String },

    /// An amount left the representable decimal range.
    #[error("Amount out of range while computing {0}")]
    AmountOverflow(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        CoreError::AmountOverflow(context.into())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog data validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be below zero.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Duplicate value (e.g., two menu items with one name).
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
