//! The mock menu shipped inside the binary.

use std::path::PathBuf;

use crate::error::{MenuError, Result};
use crate::models::MenuData;

/// Mock menu compiled into the binary.
const BUNDLED_MENU: &str = include_str!("../../assets/menu-mock-data.json");

/// The menu shipped with the application. Only fails if the embedded JSON
/// is broken.
pub fn bundled() -> Result<MenuData> {
    serde_json::from_str(BUNDLED_MENU).map_err(|source| MenuError::Parse {
        path: PathBuf::from("assets/menu-mock-data.json"),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_menu_parses() {
        let data: MenuData = serde_json::from_str(BUNDLED_MENU).unwrap();
        assert!(!data.categories.is_empty());
        assert!(!data.menu_items.is_empty());
        assert_eq!(bundled().unwrap(), data);
    }

    #[test]
    fn bundled_menu_has_inactive_and_unavailable_entries() {
        let data = bundled().unwrap();
        assert!(data.categories.iter().any(|c| !c.is_active));
        assert!(data.menu_items.iter().any(|i| !i.is_available));
    }
}
