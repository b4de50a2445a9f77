use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::render::{Action, ItemBlock, Node};

/// One selectable line group in the menu list.
pub(crate) enum Row<'a> {
    Header {
        name: &'a str,
        description: Option<&'a str>,
        glyph: &'static str,
        action: &'a Action,
    },
    Item {
        block: &'a ItemBlock,
        nested: bool,
    },
    Empty(&'a str),
}

impl Row<'_> {
    pub(crate) fn action(&self) -> Option<&Action> {
        match self {
            Row::Header { action, .. } => Some(action),
            _ => None,
        }
    }
}

/// Flatten the presentation tree into the rows currently visible. Items in
/// hidden panels are skipped.
pub(crate) fn visible_rows(nodes: &[Node]) -> Vec<Row<'_>> {
    let mut rows = Vec::new();
    for node in nodes {
        match node {
            Node::CategoryHeader {
                name,
                description,
                indicator,
                action,
                ..
            } => rows.push(Row::Header {
                name,
                description: description.as_deref(),
                glyph: indicator.glyph(),
                action,
            }),
            Node::ItemsPanel { hidden, items, .. } => {
                if !hidden {
                    rows.extend(items.iter().map(|block| Row::Item {
                        block,
                        nested: true,
                    }));
                }
            }
            Node::Item(block) => rows.push(Row::Item {
                block,
                nested: false,
            }),
            Node::Empty { message } => rows.push(Row::Empty(message)),
        }
    }
    rows
}

/// Styled lines for a row. Selected rows are highlighted by the list widget.
pub(crate) fn row_lines(row: &Row<'_>) -> Vec<Line<'static>> {
    match row {
        Row::Header {
            name,
            description,
            glyph,
            ..
        } => {
            let mut spans = vec![
                Span::styled(format!("{glyph} "), Style::default().fg(Color::Yellow)),
                Span::styled(
                    name.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ];
            if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
                spans.push(Span::styled(
                    format!("  {description}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            vec![Line::from(spans)]
        }
        Row::Item { block, nested } => {
            let indent = if *nested { "    " } else { "  " };
            let mut lines = vec![Line::from(vec![
                Span::raw(format!("{indent}{}", block.name)),
                Span::raw("  "),
                Span::styled(block.price.clone(), Style::default().fg(Color::Green)),
            ])];
            if !block.description.trim().is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("{indent}  {}", block.description),
                    Style::default().fg(Color::Gray),
                )));
            }
            lines
        }
        Row::Empty(message) => vec![Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::DarkGray),
        ))],
    }
}

/// Plain-text rendering of the tree, used for `--print`.
pub(crate) fn plain_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for row in visible_rows(nodes) {
        match row {
            Row::Header {
                name,
                description,
                glyph,
                ..
            } => {
                out.push_str(&format!("{glyph} {name}"));
                if let Some(description) = description {
                    out.push_str(&format!(" - {description}"));
                }
                out.push('\n');
            }
            Row::Item { block, nested } => {
                let indent = if nested { "    " } else { "" };
                out.push_str(&format!("{indent}{}  {}\n", block.name, block.price));
                if !block.description.is_empty() {
                    out.push_str(&format!("{indent}  {}\n", block.description));
                }
            }
            Row::Empty(message) => {
                out.push_str(message);
                out.push('\n');
            }
        }
    }
    out
}

/// Split `area` into search bar, menu list and footer.
pub(crate) fn main_layout(area: Rect, search_height: u16, footer_height: u16) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(search_height),
            Constraint::Min(0),
            Constraint::Length(footer_height),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}
