//! The materialization target: containers and search inputs addressable by a
//! stable id. The render engine is the only writer of container contents.

use std::collections::HashMap;

use crate::models::Id;

use super::tree::{Indicator, Node, PanelState};

/// Ordered list of presentation nodes currently on screen.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Container {
    nodes: Vec<Node>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn append(&mut self, nodes: Vec<Node>) {
        self.nodes.extend(nodes);
    }

    /// Flip the panel for `category_id` and swap its header glyph to match.
    /// The new state is derived from the panel as it is now, not from any
    /// remembered flag. Returns `None` if no such panel exists.
    pub(crate) fn toggle_panel(&mut self, category_id: &Id) -> Option<PanelState> {
        let hidden = self.nodes.iter_mut().find_map(|node| match node {
            Node::ItemsPanel {
                category_id: id,
                hidden,
                ..
            } if id == category_id => Some(hidden),
            _ => None,
        })?;
        *hidden = !*hidden;
        let state = if *hidden {
            PanelState::Collapsed
        } else {
            PanelState::Expanded
        };

        for node in &mut self.nodes {
            if let Node::CategoryHeader {
                category_id: id,
                indicator,
                ..
            } = node
            {
                if id == category_id {
                    *indicator = Indicator::from(state);
                }
            }
        }
        Some(state)
    }

    /// Current state of the panel for `category_id`, if rendered.
    pub fn panel_state(&self, category_id: &Id) -> Option<PanelState> {
        self.nodes.iter().find_map(|node| match node {
            Node::ItemsPanel {
                category_id: id,
                hidden,
                ..
            } if id == category_id => Some(if *hidden {
                PanelState::Collapsed
            } else {
                PanelState::Expanded
            }),
            _ => None,
        })
    }

    /// Glyph currently shown on the header for `category_id`.
    pub fn header_indicator(&self, category_id: &Id) -> Option<Indicator> {
        self.nodes.iter().find_map(|node| match node {
            Node::CategoryHeader {
                category_id: id,
                indicator,
                ..
            } if id == category_id => Some(*indicator),
            _ => None,
        })
    }

    /// Ids of every category panel in render order.
    pub fn panel_ids(&self) -> Vec<Id> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::ItemsPanel { category_id, .. } => Some(category_id.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Text field feeding the search.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchInput {
    pub value: String,
}

/// Registry of presentation targets by id.
#[derive(Debug, Default)]
pub struct Document {
    containers: HashMap<String, Container>,
    inputs: HashMap<String, SearchInput>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with one empty container and one empty search input.
    pub fn with_targets(container_id: &str, input_id: &str) -> Self {
        let mut document = Self::new();
        document.add_container(container_id);
        document.add_input(input_id);
        document
    }

    pub fn add_container(&mut self, id: &str) {
        self.containers.insert(id.to_string(), Container::new());
    }

    pub fn add_input(&mut self, id: &str) {
        self.inputs.insert(id.to_string(), SearchInput::default());
    }

    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.get(id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.get_mut(id)
    }

    pub fn input(&self, id: &str) -> Option<&SearchInput> {
        self.inputs.get(id)
    }

    pub fn input_mut(&mut self, id: &str) -> Option<&mut SearchInput> {
        self.inputs.get_mut(id)
    }
}
