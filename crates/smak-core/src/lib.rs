//! # smak-core: Pure Billing Logic for the Smak Desk
//!
//! This crate is the **heart** of the billing desk. It contains the menu,
//! order, bill and receipt logic as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Smak Billing Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Window Layer (external)                         │   │
//! │  │   Quantity boxes ──► Generate Bill ──► Receipt panel ──► Save   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    smak-desk commands                           │   │
//! │  │    get_menu, generate_bill, save_bill                           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ smak-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   order   │  │   bill    │  │  receipt  │  │   │
//! │  │   │ MenuItem  │  │ OrderLine │  │ Discount  │  │  Layout   │  │   │
//! │  │   │  lookup   │  │ subtotal  │  │   VAT     │  │   text    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO RANDOMNESS • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Value types (MenuItem, Percentage, ReferenceNo)
//! - [`money`] - Money type with exact decimal arithmetic
//! - [`catalog`] - The fixed menu
//! - [`order`] - Order lines and subtotal
//! - [`bill`] - Discount and VAT calculation
//! - [`receipt`] - Receipt text layout
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use smak_core::{smak_menu, BillCalculator, Order, Receipt, ReferenceNo};
//!
//! let menu = smak_menu();
//! let mut order = Order::new();
//! order.add_item(menu.lookup("Chicken Burger")?, 2)?;
//! order.add_item(menu.lookup("French Fries")?, 1)?;
//!
//! let bill = BillCalculator::new(10.0, 5.0)?.calculate(&order)?;
//! assert_eq!(bill.total().to_string(), "378");
//!
//! let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let receipt = Receipt::generate(&order, &bill, ReferenceNo::new("BILL4821"), date);
//! assert!(receipt.text().contains("Chicken Burger x 2 = 320 Tk"));
//! # Ok::<(), smak_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bill;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use bill::{BillCalculator, BillResult};
pub use catalog::{smak_menu, MenuCatalog};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{Order, OrderLine};
pub use receipt::{Receipt, ReceiptFormatter};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency label printed after every amount on the receipt.
pub const CURRENCY_LABEL: &str = "Tk";

/// Width of the dashed rule separating receipt sections.
pub const RECEIPT_RULE_WIDTH: usize = 40;
