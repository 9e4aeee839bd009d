//! # Receipt Commands
//!
//! Saving the current bill to a text file.
//!
//! The saved file holds exactly the text shown in the receipt panel. A path
//! without an extension gets `.txt`, matching the save dialog's default.

use std::fs;
use std::path::{Path, PathBuf};

use smak_core::Receipt;
use tracing::{debug, info};

use crate::error::{DeskError, DeskResult};
use crate::state::{DeskConfig, SessionState};

/// Extension given to receipts saved without one.
pub const RECEIPT_EXTENSION: &str = "txt";

/// Writes the current bill to `path`.
///
/// ## Returns
/// - The path actually written (with `.txt` added if needed)
/// - `NoBill` if no bill was generated yet
/// - `SaveFailure` if the file cannot be written
pub fn save_bill(session: &SessionState, path: impl AsRef<Path>) -> DeskResult<PathBuf> {
    let path = with_receipt_extension(path.as_ref());
    debug!(path = %path.display(), "save_bill command");

    let text = session
        .with_session(|s| s.current_receipt().map(|r| r.text().to_string()))
        .ok_or_else(DeskError::no_bill)?;

    fs::write(&path, text).map_err(|e| DeskError::save_failure(&e))?;

    info!(path = %path.display(), "Bill saved");
    Ok(path)
}

/// Default location offered by the save dialog: `<receipts_dir>/<reference>.txt`.
///
/// Creates the receipts folder if it is missing.
pub fn suggested_receipt_path(config: &DeskConfig, receipt: &Receipt) -> DeskResult<PathBuf> {
    fs::create_dir_all(&config.receipts_dir).map_err(|e| DeskError::save_failure(&e))?;

    let file_name = format!("{}.{}", receipt.reference_no(), RECEIPT_EXTENSION);
    Ok(config.receipts_dir.join(file_name))
}

fn with_receipt_extension(path: &Path) -> PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().is_none() {
        path.set_extension(RECEIPT_EXTENSION);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::NaiveDate;
    use smak_core::{smak_menu, BillCalculator, Order, ReferenceNo};

    fn session_with_bill() -> (SessionState, Receipt) {
        let mut order = Order::new();
        order
            .add_item(smak_menu().lookup("Chicken Burger").unwrap(), 2)
            .unwrap();
        order
            .add_item(smak_menu().lookup("French Fries").unwrap(), 1)
            .unwrap();
        let bill = BillCalculator::new(10.0, 5.0).unwrap().calculate(&order).unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let receipt = Receipt::generate(&order, &bill, ReferenceNo::new("BILL4821"), date);

        let session = SessionState::new();
        let stored = receipt.clone();
        session.with_session_mut(|s| s.replace(stored, bill));
        (session, receipt)
    }

    #[test]
    fn test_save_writes_exact_text() {
        let dir = tempfile::tempdir().unwrap();
        let (session, receipt) = session_with_bill();

        let path = save_bill(&session, dir.path().join("bill.txt")).unwrap();

        assert_eq!(path, dir.path().join("bill.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), receipt.text());
    }

    #[test]
    fn test_save_adds_txt_extension() {
        let dir = tempfile::tempdir().unwrap();
        let (session, _) = session_with_bill();

        let path = save_bill(&session, dir.path().join("table-4")).unwrap();

        assert_eq!(path, dir.path().join("table-4.txt"));
        assert!(path.exists());
    }

    #[test]
    fn test_save_keeps_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let (session, _) = session_with_bill();

        let path = save_bill(&session, dir.path().join("bill.log")).unwrap();
        assert_eq!(path, dir.path().join("bill.log"));
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("bill.txt");
        fs::write(&target, "old contents that are longer than nothing").unwrap();
        let (session, receipt) = session_with_bill();

        save_bill(&session, &target).unwrap();
        assert_eq!(fs::read_to_string(&target).unwrap(), receipt.text());
    }

    #[test]
    fn test_save_without_bill_is_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("bill.txt");

        let err = save_bill(&SessionState::new(), &target).unwrap_err();

        assert_eq!(err.code, ErrorCode::NoBill);
        assert!(err.is_warning());
        assert!(!target.exists());
    }

    #[test]
    fn test_save_to_missing_folder_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (session, _) = session_with_bill();

        let err = save_bill(&session, dir.path().join("missing").join("bill.txt")).unwrap_err();
        assert_eq!(err.code, ErrorCode::SaveFailure);
    }

    #[test]
    fn test_suggested_path_uses_reference_number() {
        let dir = tempfile::tempdir().unwrap();
        let config = DeskConfig {
            receipts_dir: dir.path().join("receipts"),
            ..DeskConfig::default()
        };
        let (_, receipt) = session_with_bill();

        let path = suggested_receipt_path(&config, &receipt).unwrap();

        assert_eq!(path, dir.path().join("receipts").join("BILL4821.txt"));
        assert!(config.receipts_dir.is_dir());
    }
}
