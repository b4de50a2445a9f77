//! Render engine split across logical submodules.

mod document;
mod engine;
mod tree;

pub use document::{Container, Document, SearchInput};
pub use engine::{build, render_into, RenderMode};
pub use tree::{item_count, Action, Indicator, ItemBlock, Node, PanelState};
