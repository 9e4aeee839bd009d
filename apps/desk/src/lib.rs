//! # Smak Desk Library
//!
//! Everything the billing window needs behind its buttons. The window
//! toolkit itself lives outside this crate; it owns a [`Desk`] and calls
//! into it.
//!
//! ## Module Organization
//! ```text
//! smak_desk/
//! ├── lib.rs          ◄─── You are here (startup & Desk handle)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Last generated bill
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── menu.rs     ◄─── Order panel rows
//! │   ├── bill.rs     ◄─── Generate Bill
//! │   ├── receipt.rs  ◄─── Save Bill
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── Error type for commands
//! ```
//!
//! ## Example
//! ```rust
//! use smak_desk::commands::bill::{BillForm, QuantityInput};
//! use smak_desk::{Desk, DeskConfig};
//!
//! let desk = Desk::new(DeskConfig::default());
//! let form = BillForm {
//!     quantities: vec![QuantityInput::new("Soft Drink", "3")],
//!     vat: "0".to_string(),
//!     discount: "0".to_string(),
//! };
//! let view = desk.generate_bill(&form)?;
//! assert!(view.text.ends_with("Total: 60 Tk"));
//! # Ok::<(), smak_desk::DeskError>(())
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::{Path, PathBuf};

use smak_core::{smak_menu, BillResult, MenuCatalog};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use error::{DeskError, DeskResult, ErrorCode};
pub use state::{BillingSession, DeskConfig, SessionState};

use commands::bill::{BillForm, BillView};
use commands::menu::MenuEntry;

/// Handle owned by the window layer.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Desk Startup                                      │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • SMAK_* environment variables over defaults                        │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • MenuCatalog: the fixed Smak menu                                  │
/// │     • SessionState: no bill yet                                         │
/// │     • DeskConfig: as loaded                                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone)]
pub struct Desk {
    catalog: &'static MenuCatalog,
    config: DeskConfig,
    session: SessionState,
}

impl Desk {
    /// Creates a desk over the Smak menu with an empty session.
    pub fn new(config: DeskConfig) -> Self {
        Desk {
            catalog: smak_menu(),
            config,
            session: SessionState::new(),
        }
    }

    /// Runs the full startup sequence: logging, configuration, state.
    pub fn start() -> Self {
        init_tracing();
        let desk = Desk::new(DeskConfig::from_env());
        info!(
            store = %desk.config.store_name,
            receipts_dir = %desk.config.receipts_dir.display(),
            "Smak desk started"
        );
        desk
    }

    pub fn catalog(&self) -> &MenuCatalog {
        self.catalog
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn menu(&self) -> Vec<MenuEntry> {
        commands::menu::get_menu(self.catalog)
    }

    pub fn generate_bill(&self, form: &BillForm) -> DeskResult<BillView> {
        commands::bill::generate_bill(self.catalog, &self.config, &self.session, form)
    }

    /// Whether "Save Bill" has anything to save.
    pub fn has_bill(&self) -> bool {
        self.session.with_session(|s| s.has_bill())
    }

    /// Totals of the bill currently on screen.
    pub fn last_bill(&self) -> Option<BillResult> {
        self.session.with_session(|s| s.current().map(|g| g.bill))
    }

    pub fn save_bill(&self, path: impl AsRef<Path>) -> DeskResult<PathBuf> {
        commands::receipt::save_bill(&self.session, path)
    }

    /// Where the save dialog should start, or `NoBill` before the first bill.
    pub fn suggested_receipt_path(&self) -> DeskResult<PathBuf> {
        let receipt = self
            .session
            .with_session(|s| s.current_receipt().cloned())
            .ok_or_else(DeskError::no_bill)?;
        commands::receipt::suggested_receipt_path(&self.config, &receipt)
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=smak=trace` - Show trace for smak crates only
/// - Default: INFO, DEBUG for smak crates
///
/// Keeps the host's subscriber if one is already installed.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,smak=debug"));

    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        debug!(%err, "Tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commands::bill::QuantityInput;

    fn desk_in(dir: &Path) -> Desk {
        Desk::new(DeskConfig {
            receipts_dir: dir.join("receipts"),
            ..DeskConfig::default()
        })
    }

    fn burger_form() -> BillForm {
        BillForm {
            quantities: vec![
                QuantityInput::new("Chicken Burger", "2"),
                QuantityInput::new("Beef Burger", "0"),
                QuantityInput::new("French Fries", "1"),
                QuantityInput::new("Soft Drink", "0"),
            ],
            vat: "5".to_string(),
            discount: "10".to_string(),
        }
    }

    #[test]
    fn test_generate_then_save_to_suggested_path() {
        let dir = tempfile::tempdir().unwrap();
        let desk = desk_in(dir.path());

        let view = desk.generate_bill(&burger_form()).unwrap();
        let suggested = desk.suggested_receipt_path().unwrap();
        assert_eq!(
            suggested.file_name().unwrap().to_str().unwrap(),
            format!("{}.txt", view.reference_no)
        );

        let saved = desk.save_bill(&suggested).unwrap();
        assert_eq!(std::fs::read_to_string(saved).unwrap(), view.text);
    }

    #[test]
    fn test_last_bill_follows_generated_bill() {
        let desk = Desk::new(DeskConfig::default());
        assert!(!desk.has_bill());
        assert!(desk.last_bill().is_none());

        let view = desk.generate_bill(&burger_form()).unwrap();

        assert!(desk.has_bill());
        assert_eq!(desk.last_bill(), Some(view.totals));
        assert_eq!(view.totals.total(), smak_core::Money::from_whole(378));
    }

    #[test]
    fn test_nothing_to_save_before_first_bill() {
        let dir = tempfile::tempdir().unwrap();
        let desk = desk_in(dir.path());

        assert_eq!(desk.suggested_receipt_path().unwrap_err().code, ErrorCode::NoBill);
        assert_eq!(
            desk.save_bill(dir.path().join("x.txt")).unwrap_err().code,
            ErrorCode::NoBill
        );
    }

    #[test]
    fn test_menu_matches_catalog() {
        let desk = Desk::new(DeskConfig::default());
        assert_eq!(desk.menu().len(), desk.catalog().len());
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing();
        init_tracing();
    }
}
