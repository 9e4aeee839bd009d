//! # Config Commands
//!
//! Commands for retrieving desk configuration.

use tracing::debug;

use crate::state::DeskConfig;

/// Gets the current desk configuration.
///
/// ## When Used
/// - App startup (window title from the store name)
/// - Save dialog (initial folder)
///
/// ## Returns
/// Complete configuration (read-only)
pub fn get_config(config: &DeskConfig) -> DeskConfig {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_copy_of_config() {
        let config = DeskConfig {
            store_name: "Smak Banani".to_string(),
            ..DeskConfig::default()
        };
        assert_eq!(get_config(&config), config);
    }
}
