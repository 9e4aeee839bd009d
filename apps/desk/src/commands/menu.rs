//! # Menu Commands
//!
//! Supplies the rows of the order panel: one label and one quantity box
//! per menu item, in menu order.

use serde::Serialize;
use smak_core::{MenuCatalog, MenuItem, Money, CURRENCY_LABEL};
use tracing::debug;

/// One row of the order panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    /// Item name, also the key sent back in the bill form
    pub name: String,

    pub unit_price: Money,

    /// Display label, e.g. "Chicken Burger (160 Tk)"
    pub label: String,
}

impl From<&MenuItem> for MenuEntry {
    fn from(item: &MenuItem) -> Self {
        MenuEntry {
            name: item.name().to_string(),
            unit_price: item.unit_price(),
            label: format!("{} ({} {})", item.name(), item.unit_price(), CURRENCY_LABEL),
        }
    }
}

/// Lists the menu for the order panel.
pub fn get_menu(catalog: &MenuCatalog) -> Vec<MenuEntry> {
    debug!(items = catalog.len(), "get_menu command");
    catalog.items().iter().map(MenuEntry::from).collect()
}
