use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::render::{item_count, Document, Node, PanelState, RenderMode};
use crate::session::MenuSession;

use super::helpers::{main_layout, row_lines, visible_rows, Row};

/// Height of the search bar above the menu.
const SEARCH_HEIGHT: u16 = 3;
/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Rows skipped by PageUp / PageDown.
const PAGE_STEP: isize = 5;

/// Whether keystrokes edit the search box or drive the menu.
enum Mode {
    Normal,
    Searching,
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    session: MenuSession,
    document: Document,
    selected: usize,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    /// Wrap an initialized session and the document it rendered into.
    pub fn new(session: MenuSession, document: Document) -> Self {
        let mut app = Self {
            session,
            document,
            selected: 0,
            mode: Mode::Normal,
            status: None,
        };
        for problem in app.session.missing_targets(&app.document) {
            app.set_status(problem.to_string(), StatusKind::Error);
        }
        app
    }

    fn nodes(&self) -> &[Node] {
        self.document
            .container(self.session.container_id())
            .map(|container| container.nodes())
            .unwrap_or(&[])
    }

    fn query(&self) -> &str {
        self.document
            .input(self.session.input_id())
            .map(|input| input.value.as_str())
            .unwrap_or("")
    }

    fn row_count(&self) -> usize {
        visible_rows(self.nodes()).len()
    }

    /// Process one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.mode {
            Mode::Normal => self.handle_normal_key(code),
            Mode::Searching => {
                self.handle_search_key(code);
                false
            }
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-PAGE_STEP),
            KeyCode::PageDown => self.move_selection(PAGE_STEP),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.row_count().saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_selected(),
            KeyCode::Char('/') | KeyCode::Char('f') => {
                if self.document.input(self.session.input_id()).is_some() {
                    self.clear_status();
                    self.mode = Mode::Searching;
                } else {
                    self.set_status("Search is unavailable.", StatusKind::Error);
                }
            }
            KeyCode::Char('e') => self.set_all(PanelState::Expanded),
            KeyCode::Char('c') => self.set_all(PanelState::Collapsed),
            _ => {}
        }
        false
    }

    /// Keys while the search box has focus. Every edit re-runs the search;
    /// Esc clears it and restores the grouped menu.
    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.clear_search(),
            KeyCode::Enter => self.mode = Mode::Normal,
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Backspace => self.edit_query(|query| {
                query.pop();
            }),
            KeyCode::Char(ch) if !ch.is_control() => self.edit_query(|query| query.push(ch)),
            _ => {}
        }
    }

    /// Clear the search box and restore the grouped menu.
    pub(crate) fn clear_search(&mut self) {
        self.edit_query(|query| query.clear());
        self.mode = Mode::Normal;
    }

    fn edit_query(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(input) = self.document.input_mut(self.session.input_id()) else {
            self.set_status("Search is unavailable.", StatusKind::Error);
            return;
        };
        edit(&mut input.value);

        match self.session.refresh_from_input(&mut self.document) {
            Some(count) => {
                self.selected = 0;
                self.report_count(count);
            }
            None => self.set_status("Menu view is unavailable.", StatusKind::Error),
        }
    }

    fn report_count(&mut self, count: usize) {
        let text = match self.session.mode() {
            RenderMode::Search => {
                let noun = if count == 1 { "match" } else { "matches" };
                format!("{count} {noun} for '{}'.", self.query().trim())
            }
            RenderMode::Normal => format!("{count} items on the menu."),
        };
        self.set_status(text, StatusKind::Info);
    }

    fn activate_selected(&mut self) {
        let action = visible_rows(self.nodes())
            .get(self.selected)
            .and_then(Row::action)
            .cloned();
        if let Some(action) = action {
            self.session.dispatch(&mut self.document, &action);
            self.ensure_in_bounds();
        }
    }

    fn set_all(&mut self, target: PanelState) {
        self.session.set_all_panels(&mut self.document, target);
        self.ensure_in_bounds();
    }

    fn move_selection(&mut self, offset: isize) {
        let len = self.row_count();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let new = (self.selected as isize + offset).clamp(0, len as isize - 1);
        self.selected = new as usize;
    }

    fn ensure_in_bounds(&mut self) {
        let len = self.row_count();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let [search_area, menu_area, footer_area] =
            main_layout(frame.area(), SEARCH_HEIGHT, FOOTER_HEIGHT);
        self.draw_search_bar(frame, search_area);
        self.draw_menu(frame, menu_area);
        self.draw_footer(frame, footer_area);
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect) {
        let focused = matches!(self.mode, Mode::Searching);
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title("Search")
            .border_style(border_style);
        let inner = block.inner(area);
        let paragraph = Paragraph::new(Span::raw(format!("Search: {}", self.query()))).block(block);
        frame.render_widget(paragraph, area);

        if focused {
            let cursor_x = inner.x + "Search: ".len() as u16 + self.query().chars().count() as u16;
            frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect) {
        let title = match self.session.mode() {
            RenderMode::Normal => "Menu",
            RenderMode::Search => "Search results",
        };
        let block = Block::default().borders(Borders::ALL).title(title);

        let rows = visible_rows(self.nodes());
        if rows.is_empty() {
            let message = Paragraph::new("Nothing on the menu right now.").block(block);
            frame.render_widget(message, area);
            return;
        }

        let items: Vec<ListItem> = rows.iter().map(|row| ListItem::new(row_lines(row))).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
        let mut state = ListState::default();
        state.select(Some(self.selected.min(rows.len() - 1)));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let help = match self.mode {
            Mode::Normal => {
                "↑/↓ move • Enter toggle • / search • e expand all • c collapse all • q quit"
            }
            Mode::Searching => "Type to filter • Backspace delete • Enter keep • Esc clear",
        };
        let mut lines = vec![Line::from(Span::styled(help, Style::default().fg(Color::Gray)))];
        match &self.status {
            Some(status) => lines.push(Line::from(Span::styled(
                status.text.clone(),
                status.kind.style(),
            ))),
            None => lines.push(Line::from(format!(
                "{} items in view.",
                item_count(self.nodes())
            ))),
        }
        let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::source::bundled;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app() -> App {
        let config = Config::default();
        let mut document = Document::with_targets(&config.container_id, &config.search_input_id);
        let session = MenuSession::init(Some(bundled().unwrap()), &mut document, &config).unwrap();
        App::new(session, document)
    }

    fn type_query(app: &mut App, query: &str) {
        app.handle_key(KeyCode::Char('/'));
        for ch in query.chars() {
            app.handle_key(KeyCode::Char(ch));
        }
    }

    #[test]
    fn starts_collapsed_with_one_row_per_category() {
        let app = app();
        // Salads, Wraps, Soups, Desserts, Drinks; specials are inactive.
        assert_eq!(app.row_count(), 5);
    }

    #[test]
    fn enter_on_header_expands_panel() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        // Salads has two available items.
        assert_eq!(app.row_count(), 7);
        app.handle_key(KeyCode::Char(' '));
        assert_eq!(app.row_count(), 5);
    }

    #[test]
    fn typing_searches_and_escape_restores() {
        let mut app = app();
        type_query(&mut app, "chicken");
        assert_eq!(app.session.mode(), RenderMode::Search);
        assert_eq!(app.row_count(), 3);
        assert!(!app.nodes().iter().any(Node::is_category_header));

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.query(), "");
        assert_eq!(app.session.mode(), RenderMode::Normal);
        assert_eq!(app.row_count(), 5);
    }

    #[test]
    fn backspace_to_empty_returns_to_grouped_view() {
        let mut app = app();
        type_query(&mut app, "x");
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.session.mode(), RenderMode::Normal);
        assert!(matches!(app.mode, Mode::Searching));
    }

    #[test]
    fn q_quits_only_outside_search() {
        let mut app = app();
        type_query(&mut app, "q");
        assert_eq!(app.query(), "q");
        app.handle_key(KeyCode::Enter);
        assert!(app.handle_key(KeyCode::Char('q')));
    }

    #[test]
    fn expand_all_then_collapse_all() {
        let mut app = app();
        app.handle_key(KeyCode::End);
        app.handle_key(KeyCode::Char('e'));
        assert_eq!(app.row_count(), 5 + 10);
        app.handle_key(KeyCode::Char('c'));
        assert_eq!(app.row_count(), 5);
        assert_eq!(app.selected, 4);
    }

    #[test]
    fn draws_without_panicking() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        type_query(&mut app, "zzz");
        terminal.draw(|frame| app.draw(frame)).unwrap();
    }
}
