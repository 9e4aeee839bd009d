//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    400 × 7.5 / 100 = 29.999999999999996  ❌ WRONG!                      │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 Decimals                                         │
//! │    400 × 7.5 / 100 = 30                                                 │
//! │    Discounts and VAT are exact, and the receipt prints what the        │
//! │    cashier would compute by hand                                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use smak_core::money::Money;
//!
//! let burger = Money::from_whole(160); // 160 Tk
//!
//! let two = burger * 2;                // 320 Tk
//! let with_fries = two + Money::from_whole(80);
//! assert_eq!(with_fries.to_string(), "400");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;
use ts_rs::TS;

use crate::types::Percentage;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in taka, stored as an exact decimal.
///
/// ## Design Decisions
/// - **Signed**: a discount above 100% legitimately produces a negative bill
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **Serialized as a string**: `"18.5"` survives JSON without float drift
///
/// ## Where Money is Used
/// ```text
/// MenuItem.unit_price ──► OrderLine.line_cost ──► Order.subtotal
///                                                       │
///                                                       ▼
///                       BillResult { discount_amount, vat_amount, total }
///                                                       │
///                                                       ▼
///                                   "Total: 378 Tk" on the receipt
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from a whole number of taka.
    ///
    /// ## Example
    /// ```rust
    /// use smak_core::money::Money;
    ///
    /// let price = Money::from_whole(180);
    /// assert_eq!(price.to_string(), "180");
    /// ```
    #[inline]
    pub fn from_whole(taka: i64) -> Self {
        Money(Decimal::from(taka))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Adds two amounts, returning `None` if the result leaves the decimal range.
    #[inline]
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use smak_core::money::Money;
    ///
    /// let unit_price = Money::from_whole(160);
    /// let line_cost = unit_price.checked_mul_quantity(2).unwrap();
    /// assert_eq!(line_cost, Money::from_whole(320));
    /// ```
    #[inline]
    pub fn checked_mul_quantity(self, qty: i64) -> Option<Money> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Returns `rate` percent of this amount (`self × rate / 100`).
    ///
    /// No rounding is applied: 7.5% of 250 is 18.75.
    ///
    /// ## Example
    /// ```rust
    /// use smak_core::money::Money;
    /// use smak_core::types::Percentage;
    ///
    /// let subtotal = Money::from_whole(400);
    /// let discount = Percentage::from_f64(10.0).unwrap();
    /// assert_eq!(subtotal.percent_of(discount), Some(Money::from_whole(40)));
    /// ```
    pub fn percent_of(self, rate: Percentage) -> Option<Money> {
        self.0
            .checked_mul(rate.value())?
            .checked_div(Decimal::ONE_HUNDRED)
            .map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Natural string form: integral amounts print without a fraction
/// (`320`), others without trailing zeros (`18.5`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
    }
}

/// Serialized in its natural string form, e.g. `"18.5"`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer).map(Money)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

/// Multiplication by a quantity. Panics on decimal overflow; use
/// [`Money::checked_mul_quantity`] for unvalidated input.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_natural_form() {
        assert_eq!(Money::from_whole(320).to_string(), "320");
        assert_eq!(Money::from_whole(0).to_string(), "0");
        assert_eq!(Money::from_whole(-20).to_string(), "-20");
        assert_eq!("18.50".parse::<Money>().unwrap().to_string(), "18.5");
        assert_eq!("378.000".parse::<Money>().unwrap().to_string(), "378");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_whole(160);
        let b = Money::from_whole(80);

        assert_eq!(a + b, Money::from_whole(240));
        assert_eq!(a - b, Money::from_whole(80));
        assert_eq!(a * 2, Money::from_whole(320));

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc, Money::from_whole(240));
    }

    #[test]
    fn test_percent_of_is_exact() {
        let subtotal = Money::from_whole(250);
        let rate = Percentage::from_f64(7.5).unwrap();
        assert_eq!(subtotal.percent_of(rate).unwrap().to_string(), "18.75");

        let rate = Percentage::from_f64(0.1).unwrap();
        assert_eq!(Money::from_whole(30).percent_of(rate).unwrap().to_string(), "0.03");
    }

    #[test]
    fn test_checked_ops_report_overflow() {
        let huge = Money::new(Decimal::MAX);
        assert!(huge.checked_add(Money::from_whole(1)).is_none());
        assert!(huge.checked_mul_quantity(2).is_none());
        assert!(Money::new(Decimal::MIN).checked_sub(Money::from_whole(1)).is_none());
        assert_eq!(
            Money::from_whole(20).checked_mul_quantity(0),
            Some(Money::zero())
        );
    }

    #[test]
    fn test_zero_and_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_whole(-1).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&"378.00".parse::<Money>().unwrap()).unwrap();
        assert_eq!(json, "\"378\"");

        let back: Money = serde_json::from_str("\"18.5\"").unwrap();
        assert_eq!(back.to_string(), "18.5");
    }

    #[test]
    fn test_deserializes_from_string_or_number() {
        let price: Money = serde_json::from_str("\"160\"").unwrap();
        assert_eq!(price, Money::from_whole(160));

        let price: Money = serde_json::from_str("160").unwrap();
        assert_eq!(price, Money::from_whole(160));

        assert!(serde_json::from_str::<Money>("\"abc\"").is_err());
    }
}
