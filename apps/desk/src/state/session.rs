//! # Billing Session State
//!
//! Holds the most recently generated bill until the next one replaces it.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Billing Session                                      │
//! │                                                                         │
//! │  Cashier Action           Command                 Session Change        │
//! │  ──────────────           ───────                 ──────────────        │
//! │                                                                         │
//! │  Generate Bill ──────────► generate_bill() ─────► current = Some(bill) │
//! │                                                                         │
//! │  Generate again ─────────► generate_bill() ─────► current replaced     │
//! │                                                                         │
//! │  Save Bill ──────────────► save_bill() ─────────► (read only)          │
//! │                                                                         │
//! │  Bad input ──────────────► generate_bill() ─────► (unchanged)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use smak_core::{BillResult, Receipt};

/// A bill that has been shown to the cashier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBill {
    pub receipt: Receipt,
    pub bill: BillResult,
}

/// The last generated bill, if any.
#[derive(Debug, Clone, Default)]
pub struct BillingSession {
    current: Option<GeneratedBill>,
}

impl BillingSession {
    pub fn new() -> Self {
        BillingSession::default()
    }

    /// Stores a new bill, dropping the previous one.
    pub fn replace(&mut self, receipt: Receipt, bill: BillResult) {
        self.current = Some(GeneratedBill { receipt, bill });
    }

    pub fn current(&self) -> Option<&GeneratedBill> {
        self.current.as_ref()
    }

    pub fn current_receipt(&self) -> Option<&Receipt> {
        self.current.as_ref().map(|g| &g.receipt)
    }

    pub fn has_bill(&self) -> bool {
        self.current.is_some()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

/// Shared billing session.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<BillingSession>>` so a window toolkit that dispatches
/// callbacks from several threads can hold a clone. A poisoned lock still
/// yields the session; it only ever holds a finished bill.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    session: Arc<Mutex<BillingSession>>,
}

impl SessionState {
    /// Creates an empty session state.
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let has_bill = session_state.with_session(|s| s.has_bill());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BillingSession) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BillingSession) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}
