//! # Menu Catalog
//!
//! The fixed set of items a customer can order, keyed by name.
//!
//! The catalog is built once at startup and never changes afterwards. The
//! desk lists items in the order they were defined, so the catalog keeps
//! that order instead of hashing by name.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::MenuItem;

/// An immutable, ordered collection of menu items with unique names.
#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

static SMAK_MENU: Lazy<MenuCatalog> = Lazy::new(|| MenuCatalog {
    items: vec![
        MenuItem::fixed("Chicken Burger", 160),
        MenuItem::fixed("Beef Burger", 180),
        MenuItem::fixed("French Fries", 80),
        MenuItem::fixed("Soft Drink", 20),
    ],
});

/// Returns the restaurant's menu, initialised on first use.
///
/// ## Example
/// ```rust
/// use smak_core::catalog::smak_menu;
/// use smak_core::money::Money;
///
/// let burger = smak_menu().lookup("Chicken Burger").unwrap();
/// assert_eq!(burger.unit_price(), Money::from_whole(160));
/// ```
pub fn smak_menu() -> &'static MenuCatalog {
    &SMAK_MENU
}

impl MenuCatalog {
    /// Builds a catalog, rejecting duplicate names.
    pub fn new(items: impl IntoIterator<Item = MenuItem>) -> CoreResult<Self> {
        let items: Vec<MenuItem> = items.into_iter().collect();

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.name()) {
                return Err(ValidationError::Duplicate {
                    field: "menu item".to_string(),
                    value: item.name().to_string(),
                }
                .into());
            }
        }

        Ok(MenuCatalog { items })
    }

    /// Finds an item by its exact name.
    pub fn lookup(&self, name: &str) -> CoreResult<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.name() == name)
            .ok_or_else(|| CoreError::ItemNotFound(name.to_string()))
    }

    /// Items in definition order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
