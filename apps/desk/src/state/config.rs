//! # Configuration State
//!
//! Stores desk configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SMAK_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Desk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeskConfig {
    /// Store name (window title)
    pub store_name: String,

    /// Prefix of every reference number, e.g. "BILL" in "BILL4821"
    pub reference_prefix: String,

    /// Folder the save dialog opens in
    pub receipts_dir: PathBuf,
}

impl Default for DeskConfig {
    /// ## Default Values
    /// - Store: "Smak Restaurant"
    /// - Prefix: "BILL"
    /// - Receipts: `<app data>/receipts`, or `./receipts` when the platform
    ///   has no app data folder
    fn default() -> Self {
        DeskConfig {
            store_name: "Smak Restaurant".to_string(),
            reference_prefix: "BILL".to_string(),
            receipts_dir: default_receipts_dir(),
        }
    }
}

impl DeskConfig {
    /// Creates a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SMAK_STORE_NAME`: Override store name
    /// - `SMAK_REFERENCE_PREFIX`: Override reference number prefix
    /// - `SMAK_RECEIPTS_DIR`: Override receipts folder
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    /// Empty values are ignored.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = DeskConfig::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(store_name) = var("SMAK_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(prefix) = var("SMAK_REFERENCE_PREFIX") {
            config.reference_prefix = prefix.trim().to_string();
        }

        if let Some(dir) = var("SMAK_RECEIPTS_DIR") {
            config.receipts_dir = PathBuf::from(dir);
        }

        config
    }
}

/// Platform receipts folder.
///
/// - **macOS**: `~/Library/Application Support/com.smak.billing/receipts`
/// - **Windows**: `%APPDATA%\smak\billing\data\receipts`
/// - **Linux**: `~/.local/share/billing/receipts`
fn default_receipts_dir() -> PathBuf {
    ProjectDirs::from("com", "smak", "billing")
        .map(|dirs| dirs.data_dir().join("receipts"))
        .unwrap_or_else(|| PathBuf::from("receipts"))
}
