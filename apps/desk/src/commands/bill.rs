//! # Bill Commands
//!
//! Turns the order panel into a receipt.
//!
//! ## Generate Bill Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    generate_bill                                        │
//! │                                                                         │
//! │  BillForm (raw text)                                                    │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  1. For each row: lookup item, parse quantity ──► "abc"? InvalidInput  │
//! │     qty < 0 ──► InvalidQuantity   qty == 0 ──► skipped                 │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  2. Parse VAT, then discount ──► "abc"? InvalidInput                   │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  3. BillCalculator ──► negative/NaN/inf? InvalidPercentage             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  4. Reference number + today's date ──► Receipt                        │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  5. Session keeps the receipt for save_bill                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any failure leaves the session untouched: the previous bill (if any) is
//! still the one that gets saved.

use chrono::{Local, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use smak_core::receipt::RECEIPT_DATE_FORMAT;
use smak_core::{BillCalculator, BillResult, MenuCatalog, Order, Receipt, ReferenceNo};
use tracing::{debug, info, warn};

use crate::error::{DeskError, DeskResult};
use crate::state::{DeskConfig, SessionState};

/// Lowest and highest numeric part of a reference number.
const REFERENCE_RANGE: std::ops::RangeInclusive<u16> = 1000..=9999;

/// One quantity box as typed by the cashier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityInput {
    pub item: String,
    pub quantity: String,
}

impl QuantityInput {
    pub fn new(item: impl Into<String>, quantity: impl Into<String>) -> Self {
        QuantityInput {
            item: item.into(),
            quantity: quantity.into(),
        }
    }
}

/// Raw contents of the order panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillForm {
    /// Rows in menu order
    pub quantities: Vec<QuantityInput>,
    pub vat: String,
    pub discount: String,
}

/// What the receipt panel shows after a successful bill.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillView {
    pub reference_no: String,

    /// DD/MM/YYYY
    pub date: String,

    pub text: String,

    pub totals: BillResult,
}

impl BillView {
    pub fn new(receipt: &Receipt, totals: BillResult) -> Self {
        BillView {
            reference_no: receipt.reference_no().to_string(),
            date: receipt.date().format(RECEIPT_DATE_FORMAT).to_string(),
            text: receipt.text().to_string(),
            totals,
        }
    }
}

/// Generates a bill stamped with today's date and a random reference number.
pub fn generate_bill(
    catalog: &MenuCatalog,
    config: &DeskConfig,
    session: &SessionState,
    form: &BillForm,
) -> DeskResult<BillView> {
    let today = Local::now().date_naive();
    generate_bill_with(catalog, config, session, form, today, &mut rand::thread_rng())
}

/// [`generate_bill`] with the date and random source supplied by the caller.
pub fn generate_bill_with<R: Rng>(
    catalog: &MenuCatalog,
    config: &DeskConfig,
    session: &SessionState,
    form: &BillForm,
    date: NaiveDate,
    rng: &mut R,
) -> DeskResult<BillView> {
    debug!(rows = form.quantities.len(), "generate_bill command");

    let (order, bill) = price_form(catalog, form).inspect_err(|err| {
        warn!(code = ?err.code, message = %err.message, "Bill rejected");
    })?;
    let reference_no = generate_reference_no(&config.reference_prefix, rng);
    let receipt = Receipt::generate(&order, &bill, reference_no, date);

    info!(
        reference_no = %receipt.reference_no(),
        lines = order.len(),
        total = %bill.total(),
        "Bill generated"
    );

    let view = BillView::new(&receipt, bill);
    session.with_session_mut(|s| s.replace(receipt, bill));

    Ok(view)
}

/// Builds `<prefix><1000..=9999>`, e.g. `BILL4821`.
///
/// Numbers are not unique; two bills may share one.
pub fn generate_reference_no<R: Rng>(prefix: &str, rng: &mut R) -> ReferenceNo {
    ReferenceNo::new(format!("{}{}", prefix, rng.gen_range(REFERENCE_RANGE)))
}

fn price_form(catalog: &MenuCatalog, form: &BillForm) -> DeskResult<(Order, BillResult)> {
    let order = build_order(catalog, &form.quantities)?;
    let vat = parse_percentage("VAT", &form.vat)?;
    let discount = parse_percentage("Discount", &form.discount)?;

    let bill = BillCalculator::new(discount, vat)?.calculate(&order)?;
    Ok((order, bill))
}

fn build_order(catalog: &MenuCatalog, rows: &[QuantityInput]) -> DeskResult<Order> {
    let mut order = Order::new();
    for row in rows {
        let item = catalog.lookup(&row.item)?;
        let quantity = parse_quantity(item.name(), &row.quantity)?;
        if quantity == 0 {
            continue;
        }
        order.add_item(item, quantity)?;
    }
    Ok(order)
}

fn parse_quantity(item: &str, raw: &str) -> DeskResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        DeskError::invalid_input(format!(
            "Quantity for {} must be a whole number (got '{}')",
            item, raw
        ))
    })
}

fn parse_percentage(label: &str, raw: &str) -> DeskResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| DeskError::invalid_input(format!("{} must be a number (got '{}')", label, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use smak_core::{smak_menu, Money};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn form(quantities: [&str; 4], vat: &str, discount: &str) -> BillForm {
        let names = ["Chicken Burger", "Beef Burger", "French Fries", "Soft Drink"];
        BillForm {
            quantities: names
                .iter()
                .zip(quantities)
                .map(|(name, qty)| QuantityInput::new(*name, qty))
                .collect(),
            vat: vat.to_string(),
            discount: discount.to_string(),
        }
    }

    fn run(form: &BillForm, session: &SessionState) -> DeskResult<BillView> {
        let mut rng = StdRng::seed_from_u64(7);
        generate_bill_with(
            smak_menu(),
            &DeskConfig::default(),
            session,
            form,
            date(),
            &mut rng,
        )
    }

    #[test]
    fn test_generates_scenario_bill() {
        let session = SessionState::new();
        let view = run(&form(["2", "0", "1", "0"], "5", "10"), &session).unwrap();

        assert_eq!(view.totals.total(), Money::from_whole(378));
        assert_eq!(view.date, "18/10/2026");
        assert!(view.reference_no.starts_with("BILL"));
        assert!(view.text.starts_with(&format!("Reference No: {}\n", view.reference_no)));
        assert!(view.text.contains("\nChicken Burger x 2 = 320 Tk\nFrench Fries x 1 = 80 Tk\n"));
        assert!(!view.text.contains("Beef Burger"));
        assert!(view.text.ends_with("Total: 378 Tk"));

        let stored = session.with_session(|s| s.current_receipt().unwrap().text().to_string());
        assert_eq!(stored, view.text);
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let session = SessionState::new();
        let view = run(&form([" 1 ", "0", "0", "+2"], " 0 ", "0.0"), &session).unwrap();
        assert_eq!(view.totals.subtotal(), Money::from_whole(200));
    }

    #[test]
    fn test_all_zero_quantities_give_empty_bill() {
        let session = SessionState::new();
        let view = run(&form(["0", "0", "0", "0"], "15", "0"), &session).unwrap();
        assert!(view.totals.total().is_zero());
        assert!(view.text.contains("Subtotal: 0 Tk"));
    }

    #[test]
    fn test_non_numeric_quantity_is_invalid_input() {
        let session = SessionState::new();
        let err = run(&form(["two", "0", "0", "0"], "0", "0"), &session).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("Chicken Burger"));

        let err = run(&form(["", "0", "0", "0"], "0", "0"), &session).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        let err = run(&form(["1.5", "0", "0", "0"], "0", "0"), &session).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_negative_quantity_is_rejected() {
        let session = SessionState::new();
        let err = run(&form(["0", "-2", "0", "0"], "0", "0"), &session).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert!(err.message.contains("Beef Burger"));
    }

    #[test]
    fn test_bad_percentages() {
        let session = SessionState::new();

        let err = run(&form(["1", "0", "0", "0"], "five", "0"), &session).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.starts_with("VAT"));

        let err = run(&form(["1", "0", "0", "0"], "0", "-5"), &session).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPercentage);

        let err = run(&form(["1", "0", "0", "0"], "NaN", "0"), &session).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPercentage);
    }

    #[test]
    fn test_unknown_item_is_not_found() {
        let session = SessionState::new();
        let bad = BillForm {
            quantities: vec![QuantityInput::new("Pizza", "1")],
            vat: "0".to_string(),
            discount: "0".to_string(),
        };
        let err = run(&bad, &session).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_failure_keeps_previous_bill() {
        let session = SessionState::new();
        let first = run(&form(["1", "0", "0", "0"], "0", "0"), &session).unwrap();

        run(&form(["x", "0", "0", "0"], "0", "0"), &session).unwrap_err();

        let stored = session.with_session(|s| s.current_receipt().unwrap().text().to_string());
        assert_eq!(stored, first.text);
    }

    #[test]
    fn test_reference_numbers_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let reference = generate_reference_no("BILL", &mut rng);
            let digits = reference.as_str().strip_prefix("BILL").unwrap();
            let n: u16 = digits.parse().unwrap();
            assert!(REFERENCE_RANGE.contains(&n));
        }
    }

    #[test]
    fn test_reference_numbers_are_reproducible_with_seed() {
        let a = generate_reference_no("INV", &mut StdRng::seed_from_u64(1));
        let b = generate_reference_no("INV", &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
        assert!(a.as_str().starts_with("INV"));
    }

    #[test]
    fn test_view_serialization() {
        let session = SessionState::new();
        let view = run(&form(["2", "0", "1", "0"], "5", "10"), &session).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["date"], "18/10/2026");
        assert_eq!(json["totals"]["total"], "378");
        assert!(json["referenceNo"].as_str().unwrap().starts_with("BILL"));
    }
}
