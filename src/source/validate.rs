//! Startup sanity checks over a loaded menu.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Id, MenuData};

/// Data problems worth reporting at startup. None of them stop rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Two categories share an id; lookups use the first one.
    DuplicateCategory(Id),
    /// Two items share an id.
    DuplicateItem(Id),
    /// Item points at a category that does not exist.
    DanglingCategory { item: Id, category: Id },
    /// Prices are expected to be non-negative.
    NegativePrice { item: Id, price: f64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::DuplicateCategory(id) => write!(f, "duplicate category id {id}"),
            Diagnostic::DuplicateItem(id) => write!(f, "duplicate item id {id}"),
            Diagnostic::DanglingCategory { item, category } => {
                write!(f, "item {item} references unknown category {category}")
            }
            Diagnostic::NegativePrice { item, price } => {
                write!(f, "item {item} has negative price {price}")
            }
        }
    }
}

/// Collect every [`Diagnostic`] for `data`, in data order. An empty result
/// means the menu is clean.
pub fn validate(data: &MenuData) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let mut categories = HashSet::new();
    for category in &data.categories {
        if !categories.insert(&category.id) {
            diagnostics.push(Diagnostic::DuplicateCategory(category.id.clone()));
        }
    }

    let mut items = HashSet::new();
    for item in &data.menu_items {
        if !items.insert(&item.id) {
            diagnostics.push(Diagnostic::DuplicateItem(item.id.clone()));
        }
        if !categories.contains(&item.category_id) {
            diagnostics.push(Diagnostic::DanglingCategory {
                item: item.id.clone(),
                category: item.category_id.clone(),
            });
        }
        if item.price_euro < 0.0 {
            diagnostics.push(Diagnostic::NegativePrice {
                item: item.id.clone(),
                price: item.price_euro,
            });
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MenuItem};
    use crate::source::bundled;

    #[test]
    fn bundled_menu_is_clean() {
        assert!(validate(&bundled().unwrap()).is_empty());
    }

    #[test]
    fn reports_each_problem() {
        let category = Category {
            id: Id::Int(1),
            name: "Soups".into(),
            description: None,
            display_order: 1.0,
            is_active: true,
        };
        let item = MenuItem {
            id: Id::Int(1),
            category_id: Id::Int(1),
            name: "Leek".into(),
            description: String::new(),
            price_euro: 4.0,
            display_order: 1.0,
            is_available: true,
        };
        let data = MenuData {
            categories: vec![category.clone(), category],
            menu_items: vec![
                item.clone(),
                MenuItem {
                    category_id: Id::Int(9),
                    price_euro: -1.0,
                    ..item
                },
            ],
        };

        let diagnostics = validate(&data);
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::DuplicateCategory(Id::Int(1)),
                Diagnostic::DuplicateItem(Id::Int(1)),
                Diagnostic::DanglingCategory {
                    item: Id::Int(1),
                    category: Id::Int(9)
                },
                Diagnostic::NegativePrice {
                    item: Id::Int(1),
                    price: -1.0
                },
            ]
        );
        assert_eq!(
            diagnostics[2].to_string(),
            "item 1 references unknown category 9"
        );
    }
}
