//! # Bill Calculation
//!
//! Turns an order plus discount and VAT percentages into a [`BillResult`].
//!
//! ## Calculation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal        = Σ quantity × unit price                 400         │
//! │  discount_amount = subtotal × discount% / 100               40  (10%)  │
//! │  after_discount  = subtotal − discount_amount              360         │
//! │  vat_amount      = after_discount × vat% / 100              18  (5%)   │
//! │  total           = after_discount + vat_amount             378         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! VAT is charged on the discounted amount, never on the original subtotal.
//! Nothing is rounded; the decimals are exact.

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::order::Order;
use crate::types::Percentage;
use crate::validation::validate_percentage;

/// Discount and VAT settings for one bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BillCalculator {
    discount: Percentage,
    vat: Percentage,
}

impl BillCalculator {
    /// Creates a calculator from raw percentages.
    ///
    /// Fails with `InvalidPercentage` if either value is negative, NaN or
    /// infinite. Values above 100 are accepted.
    ///
    /// ## Example
    /// ```rust
    /// use smak_core::bill::BillCalculator;
    ///
    /// assert!(BillCalculator::new(10.0, 5.0).is_ok());
    /// assert!(BillCalculator::new(-10.0, 5.0).is_err());
    /// assert!(BillCalculator::new(10.0, f64::NAN).is_err());
    /// ```
    pub fn new(discount_percent: f64, vat_percent: f64) -> CoreResult<Self> {
        Ok(BillCalculator {
            discount: validate_percentage("discount", discount_percent)?,
            vat: validate_percentage("vat", vat_percent)?,
        })
    }

    /// Creates a calculator from already validated percentages.
    pub const fn with_rates(discount: Percentage, vat: Percentage) -> Self {
        BillCalculator { discount, vat }
    }

    pub fn discount(&self) -> Percentage {
        self.discount
    }

    pub fn vat(&self) -> Percentage {
        self.vat
    }

    /// Computes the bill for `order`.
    ///
    /// ## Example
    /// ```rust
    /// use smak_core::bill::BillCalculator;
    /// use smak_core::catalog::smak_menu;
    /// use smak_core::money::Money;
    /// use smak_core::order::Order;
    ///
    /// let menu = smak_menu();
    /// let mut order = Order::new();
    /// order.add_item(menu.lookup("Chicken Burger").unwrap(), 2).unwrap();
    /// order.add_item(menu.lookup("French Fries").unwrap(), 1).unwrap();
    ///
    /// let bill = BillCalculator::new(10.0, 5.0).unwrap().calculate(&order).unwrap();
    /// assert_eq!(bill.total(), Money::from_whole(378));
    /// ```
    pub fn calculate(&self, order: &Order) -> CoreResult<BillResult> {
        let subtotal = order.subtotal();

        let discount_amount = subtotal
            .percent_of(self.discount)
            .ok_or_else(|| CoreError::overflow("discount amount"))?;
        let after_discount = subtotal
            .checked_sub(discount_amount)
            .ok_or_else(|| CoreError::overflow("discounted subtotal"))?;
        let vat_amount = after_discount
            .percent_of(self.vat)
            .ok_or_else(|| CoreError::overflow("VAT amount"))?;
        let total = after_discount
            .checked_add(vat_amount)
            .ok_or_else(|| CoreError::overflow("total"))?;

        Ok(BillResult {
            subtotal,
            discount_percent: self.discount,
            vat_percent: self.vat,
            discount_amount,
            vat_amount,
            total,
        })
    }
}

/// The computed amounts of one bill.
///
/// Derived from an order and never updated in place; recalculate after the
/// order changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BillResult {
    subtotal: Money,
    discount_percent: Percentage,
    vat_percent: Percentage,
    discount_amount: Money,
    vat_amount: Money,
    total: Money,
}

impl BillResult {
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn discount_percent(&self) -> Percentage {
        self.discount_percent
    }

    pub fn vat_percent(&self) -> Percentage {
        self.vat_percent
    }

    pub fn discount_amount(&self) -> Money {
        self.discount_amount
    }

    /// Subtotal minus discount; the base VAT is charged on.
    pub fn after_discount(&self) -> Money {
        self.subtotal - self.discount_amount
    }

    pub fn vat_amount(&self) -> Money {
        self.vat_amount
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
