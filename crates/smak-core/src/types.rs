//! # Domain Types
//!
//! Small value types shared by the catalog, order, bill and receipt modules.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │   Percentage    │   │   ReferenceNo   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name (key)     │   │  Decimal ≥ 0    │   │  "BILL4821"     │       │
//! │  │  unit_price     │   │  10 = 10%       │   │  display only   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;
use crate::validation::{validate_item_name, validate_unit_price, ValidationResult};

// =============================================================================
// Percentage
// =============================================================================

/// A non-negative percentage, used for both discount and VAT.
///
/// ## No Upper Bound
/// A 150% discount is accepted and produces a negative bill. The desk has
/// always allowed this, so the type does not cap it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Percentage(#[ts(type = "string")] Decimal);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Percentage = Percentage(Decimal::ZERO);

    /// Creates a percentage from an exact decimal, rejecting negatives.
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return None;
        }
        Some(Percentage(value))
    }

    /// Creates a percentage from a float.
    ///
    /// Returns `None` for NaN, infinities, negative values, magnitudes
    /// outside the decimal range and non-zero values too small to represent.
    ///
    /// ## Example
    /// ```rust
    /// use smak_core::types::Percentage;
    ///
    /// assert_eq!(Percentage::from_f64(7.5).unwrap().to_string(), "7.5");
    /// assert!(Percentage::from_f64(-1.0).is_none());
    /// assert!(Percentage::from_f64(f64::NAN).is_none());
    /// ```
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        let decimal = Decimal::from_f64(value)?;
        if decimal.is_zero() && value != 0.0 {
            return None;
        }
        Percentage::from_decimal(decimal)
    }

    /// Returns the percentage as a decimal (10% → `10`).
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Checks if the percentage is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Percentage::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Parses decimal text such as `"7.5"`; negatives are rejected.
impl FromStr for Percentage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .ok()
            .and_then(Percentage::from_decimal)
            .ok_or_else(|| CoreError::InvalidPercentage {
                field: "percentage".to_string(),
                value: s.to_string(),
            })
    }
}

impl Serialize for Percentage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Percentage::from_decimal(value)
            .ok_or_else(|| D::Error::custom("percentage must not be negative"))
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A purchasable dish or drink.
///
/// The name is the item's key within a catalog. Items are immutable once
/// created; an order line keeps its own copy so the price is frozen at the
/// moment the line is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    name: String,
    unit_price: Money,
}

impl MenuItem {
    /// Creates a validated menu item.
    ///
    /// ## Example
    /// ```rust
    /// use smak_core::money::Money;
    /// use smak_core::types::MenuItem;
    ///
    /// let fries = MenuItem::new("French Fries", Money::from_whole(80)).unwrap();
    /// assert_eq!(fries.name(), "French Fries");
    ///
    /// assert!(MenuItem::new("", Money::from_whole(80)).is_err());
    /// assert!(MenuItem::new("Free Lunch", Money::from_whole(-1)).is_err());
    /// ```
    pub fn new(name: impl Into<String>, unit_price: Money) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_unit_price(unit_price)?;
        Ok(MenuItem {
            name: name.trim().to_string(),
            unit_price,
        })
    }

    /// Builds an item from trusted constant data.
    pub(crate) fn fixed(name: &str, whole_taka: i64) -> Self {
        MenuItem {
            name: name.to_string(),
            unit_price: Money::from_whole(whole_taka),
        }
    }

    /// Display name, also the catalog key.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price of a single unit.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }
}

// =============================================================================
// Reference Number
// =============================================================================

/// Identifier printed at the top of a receipt, e.g. `BILL4821`.
///
/// Reference numbers are for display. Nothing guarantees two receipts get
/// different ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceNo(String);

impl ReferenceNo {
    pub fn new(value: impl Into<String>) -> Self {
        ReferenceNo(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReferenceNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
