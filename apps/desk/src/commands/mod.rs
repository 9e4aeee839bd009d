//! # Desk Commands Module
//!
//! All commands exposed to the window layer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── menu.rs     ◄─── Order panel rows
//! ├── bill.rs     ◄─── Generate Bill
//! ├── receipt.rs  ◄─── Save Bill
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Window layer                                                           │
//! │  ────────────                                                           │
//! │  "Generate Bill" button ──► BillForm { quantities, vat, discount }     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust                                                                   │
//! │  ────                                                                   │
//! │  fn generate_bill(                                                      │
//! │      catalog: &MenuCatalog,    ◄── only the state it needs             │
//! │      config: &DeskConfig,                                               │
//! │      session: &SessionState,                                            │
//! │      form: &BillForm,                                                   │
//! │  ) -> Result<BillView, DeskError>                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Receipt panel shows view.text, or a message box shows the error       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod bill;
pub mod config;
pub mod menu;
pub mod receipt;
