//! Live search over menu items.

use std::borrow::Cow;

use crate::models::MenuData;

/// Reduce `data` to the items whose name or description contains `query`
/// (case-insensitive). A blank query hands back the dataset itself so the
/// caller can restore the grouped view; categories are always passed through.
pub fn filter<'a>(data: &'a MenuData, query: &str) -> Cow<'a, MenuData> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Cow::Borrowed(data);
    }

    let menu_items = data
        .menu_items
        .iter()
        .filter(|item| item.matches(&needle))
        .cloned()
        .collect();

    Cow::Owned(MenuData {
        categories: data.categories.clone(),
        menu_items,
    })
}

/// Whether a query should switch rendering into the flat search layout.
pub fn is_search_query(query: &str) -> bool {
    !query.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Id, MenuItem};

    fn item(id: i64, category: i64, name: &str, description: &str) -> MenuItem {
        MenuItem {
            id: Id::Int(id),
            category_id: Id::Int(category),
            name: name.into(),
            description: description.into(),
            price_euro: 5.0,
            display_order: id as f64,
            is_available: true,
        }
    }

    fn sample() -> MenuData {
        MenuData {
            categories: vec![Category {
                id: Id::Int(1),
                name: "Salads".into(),
                description: None,
                display_order: 1.0,
                is_active: true,
            }],
            menu_items: vec![
                item(1, 1, "Grilled Chicken Caesar Salad", "Romaine and parmesan"),
                item(2, 1, "Greek Salad", "Feta, olives, CHICKEN optional"),
                item(3, 1, "Tomato Soup", "Basil"),
            ],
        }
    }

    #[test]
    fn blank_query_is_identity() {
        let data = sample();
        for query in ["", "   ", "\t\n"] {
            let view = filter(&data, query);
            assert!(matches!(view, Cow::Borrowed(_)));
            assert_eq!(*view, data);
        }
    }

    #[test]
    fn matches_name_or_description_case_insensitively() {
        let data = sample();
        let view = filter(&data, "  ChIcKeN ");
        let ids: Vec<_> = view.menu_items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids, vec![Id::Int(1), Id::Int(2)]);
    }

    #[test]
    fn categories_pass_through_and_source_is_untouched() {
        let data = sample();
        let before = data.clone();
        let view = filter(&data, "salads");
        // Category names never match; no item mentions "salads".
        assert!(view.menu_items.is_empty());
        assert_eq!(view.categories, data.categories);
        assert_eq!(data, before);
    }

    #[test]
    fn search_query_detection() {
        assert!(!is_search_query(" "));
        assert!(is_search_query(" a "));
    }
}
