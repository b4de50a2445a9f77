//! Session state for one menu view. The session owns the dataset loaded at
//! startup and never mutates it; every query derives a fresh view and every
//! render replaces the container contents wholesale.

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{MenuError, Result};
use crate::filter::filter;
use crate::models::{Id, MenuData};
use crate::render::{render_into, Action, Document, PanelState, RenderMode};

#[derive(Debug)]
pub struct MenuSession {
    data: MenuData,
    container_id: String,
    input_id: String,
    mode: RenderMode,
}

impl MenuSession {
    /// Take ownership of the dataset and perform the initial grouped render.
    /// Missing data aborts; a missing container or search input is logged and
    /// the session still starts.
    pub fn init(
        data: Option<MenuData>,
        document: &mut Document,
        config: &Config,
    ) -> Result<Self> {
        let Some(data) = data else {
            warn!("menu data missing; menu engine not started");
            return Err(MenuError::MissingData);
        };

        let session = Self {
            data,
            container_id: config.container_id.clone(),
            input_id: config.search_input_id.clone(),
            mode: RenderMode::Normal,
        };

        for problem in session.missing_targets(document) {
            warn!(%problem, "view target unavailable");
        }

        info!(
            categories = session.data.categories.len(),
            items = session.data.menu_items.len(),
            "menu session started"
        );
        render_into(document, &session.container_id, &session.data, session.mode);
        Ok(session)
    }

    /// The dataset as loaded.
    pub fn data(&self) -> &MenuData {
        &self.data
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn input_id(&self) -> &str {
        &self.input_id
    }

    /// Collaborators the session expects but the document lacks.
    pub fn missing_targets(&self, document: &Document) -> Vec<MenuError> {
        let mut missing = Vec::new();
        if document.container(&self.container_id).is_none() {
            missing.push(MenuError::MissingContainer(self.container_id.clone()));
        }
        if document.input(&self.input_id).is_none() {
            missing.push(MenuError::MissingInput(self.input_id.clone()));
        }
        missing
    }

    /// Filter with `query` and re-render. Blank queries restore the grouped
    /// layout. Returns the number of item blocks rendered, or `None` if the
    /// container is missing.
    pub fn on_query_changed(&mut self, document: &mut Document, query: &str) -> Option<usize> {
        let view = filter(&self.data, query);
        let mode = RenderMode::for_query(query);
        debug!(query, matches = view.menu_items.len(), "query changed");
        let rendered = render_into(document, &self.container_id, &view, mode);
        if rendered.is_some() {
            self.mode = mode;
        }
        rendered
    }

    /// Re-run the search using the value currently held by the search input.
    pub fn refresh_from_input(&mut self, document: &mut Document) -> Option<usize> {
        let Some(input) = document.input(&self.input_id) else {
            warn!(input_id = %self.input_id, "search input not found; search disabled");
            return None;
        };
        let query = input.value.clone();
        self.on_query_changed(document, &query)
    }

    /// Flip the items panel for `category_id`. Missing panels are a no-op.
    pub fn toggle_category(
        &self,
        document: &mut Document,
        category_id: &Id,
    ) -> Option<PanelState> {
        let Some(container) = document.container_mut(&self.container_id) else {
            warn!(container_id = %self.container_id, "menu container not found; toggle ignored");
            return None;
        };
        let state = container.toggle_panel(category_id);
        match state {
            Some(state) => debug!(%category_id, ?state, "category toggled"),
            None => debug!(%category_id, "no panel for category"),
        }
        state
    }

    /// Route an action taken from a rendered node.
    pub fn dispatch(&self, document: &mut Document, action: &Action) -> Option<PanelState> {
        match action {
            Action::ToggleCategory(id) => self.toggle_category(document, id),
        }
    }

    /// Put every panel into `target`, toggling only those that differ.
    pub fn set_all_panels(&self, document: &mut Document, target: PanelState) -> usize {
        let Some(container) = document.container(&self.container_id) else {
            return 0;
        };
        let pending: Vec<Id> = container
            .panel_ids()
            .into_iter()
            .filter(|id| container.panel_state(id) != Some(target))
            .collect();
        pending
            .iter()
            .filter(|id| self.toggle_category(document, id).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MenuItem};
    use crate::render::{item_count, Node};

    fn config() -> Config {
        Config::default()
    }

    fn data() -> MenuData {
        MenuData {
            categories: vec![
                Category {
                    id: Id::Int(1),
                    name: "Salads".into(),
                    description: Some("Fresh".into()),
                    display_order: 1.0,
                    is_active: true,
                },
                Category {
                    id: Id::Int(2),
                    name: "Wraps".into(),
                    description: None,
                    display_order: 2.0,
                    is_active: true,
                },
            ],
            menu_items: vec![
                MenuItem {
                    id: Id::Int(1),
                    category_id: Id::Int(1),
                    name: "Grilled Chicken Caesar Salad".into(),
                    description: "Romaine".into(),
                    price_euro: 8.5,
                    display_order: 1.0,
                    is_available: true,
                },
                MenuItem {
                    id: Id::Int(2),
                    category_id: Id::Int(2),
                    name: "Grilled Chicken Wrap".into(),
                    description: "Tortilla".into(),
                    price_euro: 7.0,
                    display_order: 1.0,
                    is_available: true,
                },
            ],
        }
    }

    fn document(config: &Config) -> Document {
        Document::with_targets(&config.container_id, &config.search_input_id)
    }

    fn nodes<'a>(document: &'a Document, session: &MenuSession) -> &'a [Node] {
        document.container(session.container_id()).unwrap().nodes()
    }

    #[test]
    fn init_without_data_fails() {
        let config = config();
        let mut document = document(&config);
        let err = MenuSession::init(None, &mut document, &config).unwrap_err();
        assert!(matches!(err, MenuError::MissingData));
        assert!(document.container(&config.container_id).unwrap().nodes().is_empty());
    }

    #[test]
    fn init_renders_grouped_view() {
        let config = config();
        let mut document = document(&config);
        let session = MenuSession::init(Some(data()), &mut document, &config).unwrap();
        assert_eq!(session.mode(), RenderMode::Normal);
        assert_eq!(nodes(&document, &session).len(), 4);
    }

    #[test]
    fn query_switches_modes_and_back() {
        let config = config();
        let mut document = document(&config);
        let mut session = MenuSession::init(Some(data()), &mut document, &config).unwrap();

        assert_eq!(session.on_query_changed(&mut document, "wrap"), Some(1));
        assert_eq!(session.mode(), RenderMode::Search);
        assert!(!nodes(&document, &session).iter().any(Node::is_category_header));

        assert_eq!(session.on_query_changed(&mut document, "  "), Some(2));
        assert_eq!(session.mode(), RenderMode::Normal);
        assert_eq!(session.data(), &data());
    }

    #[test]
    fn search_input_drives_refresh() {
        let config = config();
        let mut document = document(&config);
        let mut session = MenuSession::init(Some(data()), &mut document, &config).unwrap();
        document.input_mut(session.input_id()).unwrap().value = "caesar".into();
        assert_eq!(session.refresh_from_input(&mut document), Some(1));
        assert_eq!(item_count(nodes(&document, &session)), 1);
    }

    #[test]
    fn missing_targets_are_reported_not_fatal() {
        let config = config();
        let mut document = Document::new();
        let mut session = MenuSession::init(Some(data()), &mut document, &config).unwrap();
        assert_eq!(session.missing_targets(&document).len(), 2);
        assert_eq!(session.on_query_changed(&mut document, "chicken"), None);
        assert_eq!(session.refresh_from_input(&mut document), None);
        assert_eq!(session.toggle_category(&mut document, &Id::Int(1)), None);
    }

    #[test]
    fn dispatch_toggles_and_rerender_resets() {
        let config = config();
        let mut document = document(&config);
        let mut session = MenuSession::init(Some(data()), &mut document, &config).unwrap();
        let action = nodes(&document, &session)[0].action().cloned().unwrap();

        assert_eq!(session.dispatch(&mut document, &action), Some(PanelState::Expanded));
        session.on_query_changed(&mut document, "");
        let container = document.container(session.container_id()).unwrap();
        assert_eq!(container.panel_state(&Id::Int(1)), Some(PanelState::Collapsed));
    }

    #[test]
    fn expand_and_collapse_all() {
        let config = config();
        let mut document = document(&config);
        let session = MenuSession::init(Some(data()), &mut document, &config).unwrap();
        session.toggle_category(&mut document, &Id::Int(2));

        assert_eq!(session.set_all_panels(&mut document, PanelState::Expanded), 1);
        assert_eq!(session.set_all_panels(&mut document, PanelState::Collapsed), 2);
        assert_eq!(session.set_all_panels(&mut document, PanelState::Collapsed), 0);
    }
}
