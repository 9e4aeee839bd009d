//! # State Module
//!
//! Desk state, split into focused types the way commands consume them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │   MenuCatalog    │  │   SessionState   │  │   DeskConfig     │      │
//! │  │   (smak-core)    │  │                  │  │                  │      │
//! │  │                  │  │  Arc<Mutex<      │  │  store_name      │      │
//! │  │  &'static, fixed │  │   BillingSession │  │  reference_prefix│      │
//! │  │  at startup      │  │  >>              │  │  receipts_dir    │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • MenuCatalog: immutable                                              │
//! │  • SessionState: Protected by Arc<Mutex<T>>                            │
//! │  • DeskConfig: Read-only after initialization                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::DeskConfig;
pub use session::{BillingSession, GeneratedBill, SessionState};
