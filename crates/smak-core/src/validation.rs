//! # Validation Module
//!
//! Business rule checks for billing input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: smak-desk                                                    │
//! │  ├── Text parsing ("2" → 2, "abc" → InvalidInput)                      │
//! │  └── Skipping zero quantities                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Quantities are never negative                                     │
//! │  ├── Percentages are finite and never negative                         │
//! │  └── Menu items have a name and a non-negative price                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Percentage;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use smak_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Chicken Burger").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// Zero is allowed (free items).
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "unit price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Order Validators
// =============================================================================

/// Validates a quantity for `item`.
///
/// ## Rules
/// - Must be zero or more
/// - Zero is valid here; the desk decides whether to skip it
///
/// ## Example
/// ```rust
/// use smak_core::validation::validate_quantity;
///
/// assert!(validate_quantity("Soft Drink", 0).is_ok());
/// assert!(validate_quantity("Soft Drink", -1).is_err());
/// ```
pub fn validate_quantity(item: &str, qty: i64) -> CoreResult<()> {
    if qty < 0 {
        return Err(CoreError::InvalidQuantity {
            item: item.to_string(),
            quantity: qty,
        });
    }

    Ok(())
}

// =============================================================================
// Bill Validators
// =============================================================================

/// Validates a discount or VAT percentage and converts it.
///
/// ## Rules
/// - Must be finite (no NaN, no infinities)
/// - Must be zero or more
/// - No upper bound
///
/// ## Example
/// ```rust
/// use smak_core::validation::validate_percentage;
///
/// assert!(validate_percentage("vat", 15.0).is_ok());
/// assert!(validate_percentage("discount", 120.0).is_ok());
/// assert!(validate_percentage("discount", -5.0).is_err());
/// ```
pub fn validate_percentage(field: &str, value: f64) -> CoreResult<Percentage> {
    Percentage::from_f64(value).ok_or_else(|| CoreError::InvalidPercentage {
        field: field.to_string(),
        value: value.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
