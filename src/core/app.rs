//! Application root: owns every page component and wires them together
//!
//! Startup mirrors the page: the router activates the tab named by the
//! fragment, then the loader fetches and renders the roadmap once.

use crate::core::error::Result;
use crate::core::events::{EventHub, Key, Target, UiEvent};
use crate::core::history::NavigationHistory;
use crate::core::loader::{DataSource, LoadOutcome, Loader};
use crate::core::modal::{Modal, ModalState};
use crate::core::models::{CourseId, Roadmap};
use crate::core::render::{Container, PageView, TabView};
use crate::core::router::TabRouter;
use crate::core::viewport::{SharedViewport, Viewport};
use crate::config::Config;
use std::cell::RefCell;
use std::rc::Rc;

/// Page title used in rendered documents
pub const PAGE_TITLE: &str = "Front-End Development Roadmap";

/// Settings the page components need from the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    /// Tab identifiers in display order
    pub tabs: Vec<String>,
    /// Tab shown when the fragment is empty
    pub default_tab: String,
    /// Tab whose panel holds the roadmap container
    pub roadmap_tab: String,
    /// Base against which the document location is resolved
    pub source_base: String,
    /// Document location
    pub source_location: String,
}

impl From<&Config> for AppSettings {
    fn from(config: &Config) -> Self {
        Self {
            tabs: config.site.tabs.clone(),
            default_tab: config.site.default_tab.clone(),
            roadmap_tab: config.site.roadmap_tab.clone(),
            source_base: config.source.base.clone(),
            source_location: config.source.location.clone(),
        }
    }
}

/// Debugging view of the running page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Document from the last successful load
    pub roadmap: Option<Roadmap>,
    /// Active tab id
    pub active_tab: String,
    /// Detail view state
    pub modal: ModalState,
    /// Scroll state
    pub viewport: Viewport,
}

/// The page
pub struct App {
    settings: AppSettings,
    hub: EventHub,
    viewport: SharedViewport,
    router: Rc<RefCell<TabRouter>>,
    modal: Rc<RefCell<Modal>>,
    loader: Loader,
}

impl App {
    /// Build the page at the given address fragment (`""` when absent)
    #[must_use]
    pub fn new(settings: AppSettings, fragment: &str) -> Self {
        let viewport = Viewport::shared();
        let router = TabRouter::new(
            &settings.tabs,
            &settings.default_tab,
            NavigationHistory::new(fragment),
            Rc::clone(&viewport),
        );
        let modal = Modal::shared(Rc::clone(&viewport));

        Self {
            settings,
            hub: EventHub::new(),
            viewport,
            router: Rc::new(RefCell::new(router)),
            modal,
            loader: Loader::new(),
        }
    }

    /// Activate the initial tab and load the document from the configured location
    ///
    /// An unresolvable location fails the load the same way a bad fetch does.
    pub async fn start(&mut self) -> LoadOutcome {
        TabRouter::init(&self.router, &self.hub);
        self.loader
            .load_location(
                &self.settings.source_base,
                &self.settings.source_location,
                &self.modal,
                &self.hub,
            )
            .await
    }

    /// Activate the initial tab and load the document from `source`
    pub async fn start_with<S: DataSource>(&mut self, source: &S) -> LoadOutcome {
        TabRouter::init(&self.router, &self.hub);
        self.loader.load(source, &self.modal, &self.hub).await
    }

    /// Deliver an interaction to the components; returns the handlers invoked
    pub fn dispatch(&self, event: &UiEvent) -> usize {
        self.hub.dispatch(event)
    }

    /// Click a tab button
    pub fn click_tab(&self, tab_id: &str) {
        self.dispatch(&UiEvent::Click(Target::TabButton(tab_id.to_string())));
    }

    /// Click a rendered course item
    pub fn click_course(&self, id: CourseId) {
        self.dispatch(&UiEvent::Click(Target::CourseItem(id)));
    }

    /// Press a key
    pub fn press_key(&self, key: Key) {
        self.dispatch(&UiEvent::KeyDown(key));
    }

    /// Browser back button
    pub fn back(&self) -> Option<String> {
        let fragment = self.router.borrow_mut().back()?;
        Some(fragment)
    }

    /// Browser forward button
    pub fn forward(&self) -> Option<String> {
        let fragment = self.router.borrow_mut().forward()?;
        Some(fragment)
    }

    /// Active tab id
    #[must_use]
    pub fn active_tab(&self) -> String {
        self.router.borrow().active_tab().to_string()
    }

    /// Whether the tab button with this id is active
    #[must_use]
    pub fn is_tab_active(&self, tab_id: &str) -> bool {
        self.router.borrow().is_button_active(tab_id)
    }

    /// Current address fragment
    #[must_use]
    pub fn fragment(&self) -> String {
        self.router.borrow().history().current_fragment().to_string()
    }

    /// Detail view state
    #[must_use]
    pub fn modal_state(&self) -> ModalState {
        self.modal.borrow().state().clone()
    }

    /// The roadmap container
    #[must_use]
    pub const fn container(&self) -> &Container {
        self.loader.container()
    }

    /// The loader, for its course table and last loaded document
    #[must_use]
    pub const fn loader(&self) -> &Loader {
        &self.loader
    }

    /// Current scroll state
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        *self.viewport.borrow()
    }

    /// Number of live event handlers on the page
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.hub.listener_count()
    }

    /// Debugging view of the page state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            roadmap: self.loader.last_loaded().cloned(),
            active_tab: self.active_tab(),
            modal: self.modal_state(),
            viewport: self.viewport(),
        }
    }

    /// Render the whole page in its current state
    ///
    /// # Errors
    /// Returns an error if a template fails to render
    pub fn page_html(&self) -> Result<String> {
        let router = self.router.borrow();
        let modal = self.modal.borrow();
        let tabs = router
            .tabs()
            .iter()
            .map(|id| {
                TabView::new(
                    id,
                    router.is_button_active(id),
                    *id == self.settings.roadmap_tab,
                )
            })
            .collect();

        PageView {
            title: PAGE_TITLE.to_string(),
            tabs,
            container: self.container().html()?,
            details: modal.details_html()?,
            modal_open: modal.is_open(),
            scroll_locked: self.viewport.borrow().scroll_locked,
        }
        .html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> AppSettings {
        AppSettings {
            tabs: vec![
                "home".to_string(),
                "roadmap".to_string(),
                "about".to_string(),
            ],
            default_tab: "home".to_string(),
            roadmap_tab: "roadmap".to_string(),
            source_base: String::new(),
            source_location: "does-not-exist.json".to_string(),
        }
    }

    #[test]
    fn test_new_app_has_no_listeners_and_nothing_active() {
        let app = App::new(settings(), "#about");
        assert_eq!(app.listener_count(), 0);
        assert_eq!(app.active_tab(), "");
        assert_eq!(app.fragment(), "about");
    }

    #[tokio::test]
    async fn test_start_with_missing_file_fails_gracefully() {
        let mut app = App::new(settings(), "");
        let outcome = app.start().await;

        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert_eq!(app.active_tab(), "home");
        assert!(app.container().error_message().is_some());
        assert!(app.snapshot().roadmap.is_none());
    }

    #[tokio::test]
    async fn test_tab_clicks_work_even_when_load_fails() {
        let mut app = App::new(settings(), "");
        app.start().await;

        app.click_tab("about");
        assert!(app.is_tab_active("about"));
        assert_eq!(app.fragment(), "about");
        assert_eq!(app.back().as_deref(), Some(""));
        assert!(app.is_tab_active("home"));
    }
}
