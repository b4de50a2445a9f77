//! Builds the presentation tree for a menu, grouped by category or flat.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::models::{cmp_order, Category, MenuData, MenuItem};

use super::document::Document;
use super::tree::{item_count, Action, Indicator, ItemBlock, Node};

/// Layout used when building the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Collapsible panels grouped by category.
    Normal,
    /// One flat list of items, no category headers.
    Search,
}

impl RenderMode {
    pub fn for_query(query: &str) -> Self {
        if crate::filter::is_search_query(query) {
            RenderMode::Search
        } else {
            RenderMode::Normal
        }
    }
}

/// Produce the nodes for `data` without touching any container.
pub fn build(data: &MenuData, mode: RenderMode) -> Vec<Node> {
    match mode {
        RenderMode::Normal => build_grouped(data),
        RenderMode::Search => build_flat(data),
    }
}

/// Replace the contents of `container_id` with a fresh tree. A missing
/// container is logged and left alone; nothing is cleared in that case.
/// Returns the number of item blocks committed.
pub fn render_into(
    document: &mut Document,
    container_id: &str,
    data: &MenuData,
    mode: RenderMode,
) -> Option<usize> {
    let Some(container) = document.container_mut(container_id) else {
        warn!(container_id, "menu container not found; skipping render");
        return None;
    };

    let nodes = build(data, mode);
    let items = item_count(&nodes);
    container.clear();
    container.append(nodes);
    debug!(?mode, items, "menu rendered");
    Some(items)
}

fn build_grouped(data: &MenuData) -> Vec<Node> {
    let mut categories: Vec<&Category> = data
        .categories
        .iter()
        .filter(|category| category.is_active)
        .collect();
    categories.sort_by(|a, b| cmp_categories(a, b));

    let mut nodes = Vec::new();
    for category in categories {
        let mut items: Vec<&MenuItem> = data
            .menu_items
            .iter()
            .filter(|item| item.category_id == category.id && item.is_available)
            .collect();
        if items.is_empty() {
            continue;
        }
        items.sort_by(|a, b| cmp_items(a, b));

        nodes.push(Node::CategoryHeader {
            category_id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            indicator: Indicator::Collapsed,
            action: Action::ToggleCategory(category.id.clone()),
        });
        nodes.push(Node::ItemsPanel {
            category_id: category.id.clone(),
            hidden: true,
            items: items.into_iter().map(ItemBlock::from).collect(),
        });
    }
    nodes
}

fn build_flat(data: &MenuData) -> Vec<Node> {
    let mut items: Vec<(Option<&Category>, &MenuItem)> = data
        .menu_items
        .iter()
        .filter(|item| item.is_available)
        .map(|item| (data.category(&item.category_id), item))
        .collect();

    items.sort_by(|(cat_a, a), (cat_b, b)| {
        let by_category = match (cat_a, cat_b) {
            (Some(x), Some(y)) => cmp_categories(x, y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_category.then_with(|| cmp_items(a, b))
    });

    if items.is_empty() {
        return vec![Node::Empty {
            message: "No menu items match your search.".to_string(),
        }];
    }

    items
        .into_iter()
        .map(|(_, item)| Node::Item(ItemBlock::from(item)))
        .collect()
}

fn cmp_categories(a: &Category, b: &Category) -> Ordering {
    cmp_order(a.display_order, b.display_order).then_with(|| a.id.cmp(&b.id))
}

fn cmp_items(a: &MenuItem, b: &MenuItem) -> Ordering {
    cmp_order(a.display_order, b.display_order).then_with(|| a.id.cmp(&b.id))
}
