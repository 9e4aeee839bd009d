//! # Receipt Formatting
//!
//! Renders a bill as the plain-text receipt shown on screen and saved to disk.
//!
//! ## Layout
//! ```text
//! Reference No: BILL4821
//! Date: 18/10/2026
//! ----------------------------------------
//! Chicken Burger x 2 = 320 Tk
//! French Fries x 1 = 80 Tk
//! ----------------------------------------
//! Subtotal: 400 Tk
//! Discount: 10%
//! VAT: 5%
//! Total: 378 Tk
//! ```
//!
//! The layout is line-exact: saved receipts are compared byte for byte, so
//! any change here is a format change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::bill::BillResult;
use crate::order::Order;
use crate::types::ReferenceNo;
use crate::{CURRENCY_LABEL, RECEIPT_RULE_WIDTH};

/// Receipt date format (DD/MM/YYYY).
pub const RECEIPT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Stateless receipt renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptFormatter;

impl ReceiptFormatter {
    /// Renders the receipt text.
    ///
    /// Zero-quantity order lines are not printed. Lines are joined with `\n`
    /// and there is no trailing newline. Amounts
    /// use their natural string form (`320`, `18.5`).
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveDate;
    /// use smak_core::bill::BillCalculator;
    /// use smak_core::catalog::smak_menu;
    /// use smak_core::order::Order;
    /// use smak_core::receipt::ReceiptFormatter;
    /// use smak_core::types::ReferenceNo;
    ///
    /// let mut order = Order::new();
    /// order.add_item(smak_menu().lookup("Soft Drink").unwrap(), 1).unwrap();
    /// let bill = BillCalculator::new(0.0, 15.0).unwrap().calculate(&order).unwrap();
    ///
    /// let text = ReceiptFormatter::format(
    ///     &order,
    ///     &bill,
    ///     &ReferenceNo::new("BILL1000"),
    ///     NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
    /// );
    /// assert!(text.starts_with("Reference No: BILL1000\nDate: 05/01/2026\n"));
    /// assert!(text.ends_with("Total: 23 Tk"));
    /// ```
    pub fn format(
        order: &Order,
        bill: &BillResult,
        reference_no: &ReferenceNo,
        date: NaiveDate,
    ) -> String {
        let rule = "-".repeat(RECEIPT_RULE_WIDTH);
        let mut lines = Vec::with_capacity(order.len() + 8);

        lines.push(format!("Reference No: {}", reference_no));
        lines.push(format!("Date: {}", date.format(RECEIPT_DATE_FORMAT)));
        lines.push(rule.clone());
        for line in order.lines().iter().filter(|l| l.quantity() > 0) {
            lines.push(format!(
                "{} x {} = {} {}",
                line.item().name(),
                line.quantity(),
                line.line_cost(),
                CURRENCY_LABEL
            ));
        }
        lines.push(rule);
        lines.push(format!("Subtotal: {} {}", bill.subtotal(), CURRENCY_LABEL));
        lines.push(format!("Discount: {}%", bill.discount_percent()));
        lines.push(format!("VAT: {}%", bill.vat_percent()));
        lines.push(format!("Total: {} {}", bill.total(), CURRENCY_LABEL));

        lines.join("\n")
    }
}

/// A generated receipt: its key (reference number and date) plus the text.
///
/// Receipts are write-once. There are no setters; a new bill means a new
/// receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    reference_no: ReferenceNo,
    #[ts(as = "String")]
    date: NaiveDate,
    text: String,
}

impl Receipt {
    /// Formats `order` and `bill` into a new receipt.
    pub fn generate(
        order: &Order,
        bill: &BillResult,
        reference_no: ReferenceNo,
        date: NaiveDate,
    ) -> Self {
        let text = ReceiptFormatter::format(order, bill, &reference_no, date);
        Receipt {
            reference_no,
            date,
            text,
        }
    }

    pub fn reference_no(&self) -> &ReferenceNo {
        &self.reference_no
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The exact receipt text, as displayed and saved.
    pub fn text(&self) -> &str {
        &self.text
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bill::BillCalculator;
    use crate::catalog::smak_menu;
    use crate::money::Money;
    use crate::types::MenuItem;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn scenario_order() -> Order {
        let mut order = Order::new();
        order
            .add_item(smak_menu().lookup("Chicken Burger").unwrap(), 2)
            .unwrap();
        order
            .add_item(smak_menu().lookup("French Fries").unwrap(), 1)
            .unwrap();
        order
    }

    #[test]
    fn test_scenario_receipt_is_line_exact() {
        let order = scenario_order();
        let bill = BillCalculator::new(10.0, 5.0).unwrap().calculate(&order).unwrap();

        let text = ReceiptFormatter::format(&order, &bill, &ReferenceNo::new("BILL4821"), date());

        let expected = "\
Reference No: BILL4821
Date: 18/10/2026
----------------------------------------
Chicken Burger x 2 = 320 Tk
French Fries x 1 = 80 Tk
----------------------------------------
Subtotal: 400 Tk
Discount: 10%
VAT: 5%
Total: 378 Tk";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_order_receipt() {
        let order = Order::new();
        let bill = BillCalculator::new(0.0, 0.0).unwrap().calculate(&order).unwrap();
        let text = ReceiptFormatter::format(&order, &bill, &ReferenceNo::new("BILL1000"), date());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[2], lines[3]);
        assert_eq!(lines[2].len(), 40);
        assert_eq!(lines[4], "Subtotal: 0 Tk");
        assert_eq!(lines[7], "Total: 0 Tk");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_zero_quantity_lines_are_not_printed() {
        let mut order = Order::new();
        order.add_item(smak_menu().lookup("Soft Drink").unwrap(), 0).unwrap();
        order.add_item(smak_menu().lookup("French Fries").unwrap(), 1).unwrap();
        let bill = BillCalculator::new(0.0, 0.0).unwrap().calculate(&order).unwrap();

        let text = ReceiptFormatter::format(&order, &bill, &ReferenceNo::new("BILL1234"), date());

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "French Fries x 1 = 80 Tk");
        assert_eq!(lines[4], lines[2]);
        assert!(!text.contains("Soft Drink"));
    }

    #[test]
    fn test_fractional_amounts_and_rates() {
        let lassi = MenuItem::new("Lassi", "45.5".parse().unwrap()).unwrap();
        let mut order = Order::new();
        order.add_item(&lassi, 3).unwrap();
        let bill = BillCalculator::new(2.5, 7.5).unwrap().calculate(&order).unwrap();

        let text = ReceiptFormatter::format(&order, &bill, &ReferenceNo::new("BILL2000"), date());
        assert!(text.contains("\nLassi x 3 = 136.5 Tk\n"));
        assert!(text.contains("\nDiscount: 2.5%\n"));
        assert!(text.contains("\nVAT: 7.5%\n"));
        assert_eq!(bill.subtotal(), "136.5".parse::<Money>().unwrap());
    }

    #[test]
    fn test_receipt_keeps_key_and_text() {
        let order = scenario_order();
        let bill = BillCalculator::new(10.0, 5.0).unwrap().calculate(&order).unwrap();
        let receipt = Receipt::generate(&order, &bill, ReferenceNo::new("BILL4821"), date());

        assert_eq!(receipt.reference_no().as_str(), "BILL4821");
        assert_eq!(receipt.date(), date());
        assert_eq!(
            receipt.text(),
            ReceiptFormatter::format(&order, &bill, &ReferenceNo::new("BILL4821"), date())
        );
    }

    #[test]
    fn test_format_is_deterministic() {
        let order = scenario_order();
        let bill = BillCalculator::new(10.0, 5.0).unwrap().calculate(&order).unwrap();
        let reference = ReferenceNo::new("BILL9999");
        assert_eq!(
            ReceiptFormatter::format(&order, &bill, &reference, date()),
            ReceiptFormatter::format(&order, &bill, &reference, date())
        );
    }
}
