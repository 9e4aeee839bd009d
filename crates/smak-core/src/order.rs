//! # Order
//!
//! Accumulates the customer's selections before billing.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Operations                                     │
//! │                                                                         │
//! │  Desk Action               Order Method            State Change         │
//! │  ───────────               ────────────            ────────────         │
//! │                                                                         │
//! │  Quantity box "2" ───────► add_item(item, 2) ────► lines.push(line)    │
//! │                                                                         │
//! │  Same item again ────────► add_item(item, 1) ────► lines[i].qty += 1   │
//! │                                                                         │
//! │  Quantity box "-1" ──────► add_item(item, -1) ───► (unchanged, Err)    │
//! │                                                                         │
//! │  Generate Bill ──────────► subtotal() ───────────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::MenuItem;
use crate::validation::validate_quantity;

/// One item of an order with its quantity.
///
/// ## Price Freezing
/// The line keeps its own copy of the menu item, so the cost printed on the
/// receipt is the price at the time the line was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    item: MenuItem,
    quantity: i64,
}

impl OrderLine {
    /// Creates a line, failing on a negative quantity or a cost that does
    /// not fit the decimal range.
    pub fn new(item: MenuItem, quantity: i64) -> CoreResult<Self> {
        validate_quantity(item.name(), quantity)?;
        item.unit_price()
            .checked_mul_quantity(quantity)
            .ok_or_else(|| CoreError::overflow(format!("line cost of {}", item.name())))?;
        Ok(OrderLine { item, quantity })
    }

    #[inline]
    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Quantity × unit price.
    pub fn line_cost(&self) -> Money {
        // Representable: checked in `new`.
        self.item.unit_price() * self.quantity
    }
}

/// The customer's order.
///
/// ## Invariants
/// - At most one line per menu item (adding again merges quantities)
/// - Lines keep insertion order; the receipt prints them in that order
/// - The subtotal always fits the decimal range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    /// Creates a new empty order.
    pub fn new() -> Self {
        Order { lines: Vec::new() }
    }

    /// Adds `quantity` units of `item`.
    ///
    /// ## Behavior
    /// - Item already ordered: quantities are merged into the existing line
    /// - Otherwise: a new line is appended
    /// - Zero is accepted and yields a zero-cost line
    /// - Negative quantity: `InvalidQuantity`, order left untouched
    ///
    /// ## Example
    /// ```rust
    /// use smak_core::catalog::smak_menu;
    /// use smak_core::order::Order;
    ///
    /// let mut order = Order::new();
    /// let fries = smak_menu().lookup("French Fries").unwrap();
    ///
    /// order.add_item(fries, 2).unwrap();
    /// assert!(order.add_item(fries, -1).is_err());
    /// assert_eq!(order.subtotal().to_string(), "160");
    /// ```
    pub fn add_item(&mut self, item: &MenuItem, quantity: i64) -> CoreResult<()> {
        validate_quantity(item.name(), quantity)?;

        let existing = self
            .lines
            .iter()
            .position(|line| line.item.name() == item.name());

        let line = match existing {
            Some(index) => {
                let merged = self.lines[index]
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| CoreError::overflow(format!("quantity of {}", item.name())))?;
                OrderLine::new(self.lines[index].item.clone(), merged)?
            }
            None => OrderLine::new(item.clone(), quantity)?,
        };

        // Check the subtotal before touching any state.
        let others = self
            .lines
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != existing)
            .map(|(_, l)| l.line_cost());
        checked_sum(others.chain(std::iter::once(line.line_cost())))
            .ok_or_else(|| CoreError::overflow("order subtotal"))?;

        match existing {
            Some(index) => self.lines[index] = line,
            None => self.lines.push(line),
        }
        Ok(())
    }

    /// Sum of all line costs; zero for an empty order.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(), |acc, line| acc + line.line_cost())
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns the number of distinct items in the order.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the total quantity of all items.
    ///
    /// Widened to `i128`: each line holds up to `i64::MAX` units.
    pub fn total_quantity(&self) -> i128 {
        self.lines.iter().map(|l| i128::from(l.quantity)).sum()
    }
}

fn checked_sum(costs: impl Iterator<Item = Money>) -> Option<Money> {
    costs.fold(Some(Money::zero()), |acc, cost| acc?.checked_add(cost))
}
