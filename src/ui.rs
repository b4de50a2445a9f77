//! Terminal front-end for the menu. The render engine produces presentation
//! nodes; this module turns them into ratatui widgets (or plain text for
//! `--print`) and feeds key presses back into the session.

mod app;
mod helpers;
mod terminal;

use anyhow::{anyhow, Result};

use crate::render::{Document, PanelState};
use crate::session::MenuSession;

pub use app::App;
pub use terminal::run_app;

/// Render once with every panel open and return the menu as plain text.
pub fn print_menu(
    session: &mut MenuSession,
    document: &mut Document,
    query: Option<&str>,
) -> Result<String> {
    if let Some(query) = query {
        session.on_query_changed(document, query);
    }
    session.set_all_panels(document, PanelState::Expanded);

    let container = document
        .container(session.container_id())
        .ok_or_else(|| anyhow!("menu container '{}' not found", session.container_id()))?;
    Ok(helpers::plain_text(container.nodes()))
}
