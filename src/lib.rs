//! Core library for the menu board: a category-grouped, collapsible menu with
//! live search, rendered to a terminal.
//!
//! The engine is split into a filter step over the immutable [`MenuData`] and
//! a render step that produces declarative [`render::Node`]s into a
//! [`render::Document`]. The `ui` module materializes those nodes with Ratatui.
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod render;
pub mod session;
pub mod source;
pub mod ui;

pub use config::Config;
pub use error::MenuError;
pub use filter::filter;
pub use models::{format_price, Category, Id, MenuData, MenuItem};
pub use render::{render_into, Document, RenderMode};
pub use session::MenuSession;

/// The interactive application entry point and state container.
pub use ui::{print_menu, run_app, App};
