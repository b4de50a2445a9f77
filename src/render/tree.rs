//! Declarative presentation nodes produced by the render engine. Nothing here
//! knows about the terminal; the UI layer reads these nodes and draws them.

use crate::models::{Id, MenuItem};

/// Direction glyph shown next to a category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Collapsed,
    Expanded,
}

impl Indicator {
    pub fn glyph(self) -> &'static str {
        match self {
            Indicator::Collapsed => "▸",
            Indicator::Expanded => "▾",
        }
    }
}

/// Visibility of a category's items panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Collapsed,
    Expanded,
}

impl From<PanelState> for Indicator {
    fn from(state: PanelState) -> Self {
        match state {
            PanelState::Collapsed => Indicator::Collapsed,
            PanelState::Expanded => Indicator::Expanded,
        }
    }
}

/// Interactions attached to nodes. Dispatch goes through the session, keyed by
/// the category id stored here, so re-rendering never leaves stale handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleCategory(Id),
}

/// One rendered menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBlock {
    pub item_id: Id,
    pub name: String,
    pub description: String,
    /// Already formatted, e.g. `€8.50`.
    pub price: String,
}

impl From<&MenuItem> for ItemBlock {
    fn from(item: &MenuItem) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.display_price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Collapsible header for a category in the grouped layout.
    CategoryHeader {
        category_id: Id,
        name: String,
        description: Option<String>,
        indicator: Indicator,
        action: Action,
    },
    /// Items belonging to the header with the same `category_id`.
    ItemsPanel {
        category_id: Id,
        hidden: bool,
        items: Vec<ItemBlock>,
    },
    /// Flat item used by the search layout.
    Item(ItemBlock),
    /// Placeholder when a search matches nothing.
    Empty { message: String },
}

impl Node {
    pub fn is_category_header(&self) -> bool {
        matches!(self, Node::CategoryHeader { .. })
    }

    pub fn action(&self) -> Option<&Action> {
        match self {
            Node::CategoryHeader { action, .. } => Some(action),
            _ => None,
        }
    }
}

/// Count the item blocks in a node list, hidden panels included.
pub fn item_count(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            Node::ItemsPanel { items, .. } => items.len(),
            Node::Item(_) => 1,
            _ => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_follows_panel_state() {
        assert_eq!(Indicator::from(PanelState::Collapsed), Indicator::Collapsed);
        assert_eq!(Indicator::from(PanelState::Expanded), Indicator::Expanded);
        assert_ne!(Indicator::Collapsed.glyph(), Indicator::Expanded.glyph());
    }

    #[test]
    fn counts_items_in_panels_and_flat_blocks() {
        let block = ItemBlock {
            item_id: Id::Int(1),
            name: "Soup".into(),
            description: String::new(),
            price: "€4.00".into(),
        };
        let nodes = vec![
            Node::ItemsPanel {
                category_id: Id::Int(1),
                hidden: true,
                items: vec![block.clone(), block.clone()],
            },
            Node::Item(block),
            Node::Empty {
                message: "nothing".into(),
            },
        ];
        assert_eq!(item_count(&nodes), 3);
    }
}
