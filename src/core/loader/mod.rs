//! Roadmap loading
//!
//! The loader fetches the document once per page, renders it into its
//! container, and initializes the detail view. Any failure leaves the static
//! error message in the container; there is no retry.

pub mod source;

pub use source::{DataSource, FileSource, HttpSource, SourceLocator, DEFAULT_LOCATION};

use crate::core::error::{Result, RoadmapError};
use crate::core::events::EventHub;
use crate::core::modal::Modal;
use crate::core::models::Roadmap;
use crate::core::render::{Container, Renderer};
use crate::{error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// Result of a [`Loader::load`] call
#[derive(Debug)]
pub enum LoadOutcome {
    /// The document was rendered
    Loaded {
        /// Number of specialization cards
        specializations: usize,
        /// Number of course items across all cards
        courses: usize,
    },
    /// The document could not be fetched or understood; the error message is shown
    Failed(RoadmapError),
    /// `load` already ran for this loader; nothing was fetched
    AlreadyAttempted,
}

impl LoadOutcome {
    /// Whether the document was rendered
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Fetches, keeps, and renders the roadmap document
#[derive(Debug, Default)]
pub struct Loader {
    container: Container,
    renderer: Renderer,
    last_loaded: Option<Roadmap>,
    attempted: bool,
}

impl Loader {
    /// Loader with an empty container showing the loading placeholder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the document from `source` and render it. Runs at most once.
    ///
    /// On success the roadmap is kept for [`last_loaded`](Self::last_loaded),
    /// rendered, and `modal` gets its dismissal handlers. On failure the
    /// container shows the static error message and the error is logged.
    pub async fn load<S: DataSource>(
        &mut self,
        source: &S,
        modal: &Rc<RefCell<Modal>>,
        hub: &EventHub,
    ) -> LoadOutcome {
        if !self.begin(&source.describe()) {
            return LoadOutcome::AlreadyAttempted;
        }

        info!("Loading roadmap from {}", source.describe());
        let fetched = source.fetch().await;
        self.complete(fetched, modal, hub)
    }

    /// Resolve `location` against `base` and load from it. Runs at most once.
    ///
    /// A location that cannot be resolved is a load failure like any other:
    /// the container shows the static error message.
    pub async fn load_location(
        &mut self,
        base: &str,
        location: &str,
        modal: &Rc<RefCell<Modal>>,
        hub: &EventHub,
    ) -> LoadOutcome {
        match SourceLocator::resolve(base, location) {
            Ok(source) => self.load(&source, modal, hub).await,
            Err(err) => {
                if !self.begin(location) {
                    return LoadOutcome::AlreadyAttempted;
                }
                self.complete(Err(err), modal, hub)
            }
        }
    }

    /// Mark the single load as taken; `false` if it already was
    fn begin(&mut self, described: &str) -> bool {
        if self.attempted {
            warn!("Roadmap already loaded for this page; ignoring load of {described}");
            return false;
        }
        self.attempted = true;
        true
    }

    /// Completion step of a fetch: parse, render, or show the error
    fn complete(
        &mut self,
        fetched: Result<String>,
        modal: &Rc<RefCell<Modal>>,
        hub: &EventHub,
    ) -> LoadOutcome {
        match fetched.and_then(|body| Roadmap::from_json(&body)) {
            Ok(roadmap) => {
                let specializations = roadmap.specializations.len();
                let courses = roadmap.course_count();
                self.renderer
                    .render(&roadmap.specializations, &mut self.container, modal, hub);
                self.last_loaded = Some(roadmap);
                Modal::init(modal, hub);
                info!("Roadmap loaded: {specializations} specializations, {courses} courses");
                LoadOutcome::Loaded {
                    specializations,
                    courses,
                }
            }
            Err(err) => {
                error!("Error loading roadmap: {err}");
                self.container.show_load_error();
                LoadOutcome::Failed(err)
            }
        }
    }

    /// Document from the last successful load
    #[must_use]
    pub const fn last_loaded(&self) -> Option<&Roadmap> {
        self.last_loaded.as_ref()
    }

    /// Whether `load` has run
    #[must_use]
    pub const fn attempted(&self) -> bool {
        self.attempted
    }

    /// The roadmap container
    #[must_use]
    pub const fn container(&self) -> &Container {
        &self.container
    }

    /// The renderer and its course table
    #[must_use]
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoadFailure;
    use crate::core::render::LOAD_ERROR_MESSAGE;
    use crate::core::viewport::Viewport;
    use std::cell::Cell;

    /// In-memory source that counts fetches
    struct StaticSource {
        body: std::result::Result<&'static str, u16>,
        fetches: Cell<usize>,
    }

    impl StaticSource {
        fn ok(body: &'static str) -> Self {
            Self {
                body: Ok(body),
                fetches: Cell::new(0),
            }
        }

        fn status(code: u16) -> Self {
            Self {
                body: Err(code),
                fetches: Cell::new(0),
            }
        }
    }

    impl DataSource for StaticSource {
        async fn fetch(&self) -> Result<String> {
            self.fetches.set(self.fetches.get() + 1);
            match self.body {
                Ok(body) => Ok(body.to_string()),
                Err(status) => Err(LoadFailure::Status {
                    location: self.describe(),
                    status,
                }
                .into()),
            }
        }

        fn describe(&self) -> String {
            "memory://roadmap.json".to_string()
        }
    }

    const DOC: &str = r#"{"specializations":[{"name":"HTML","description":"d","courses":[{"name":"Intro","description":"x"}]}]}"#;

    fn parts() -> (Rc<RefCell<Modal>>, EventHub) {
        (Modal::shared(Viewport::shared()), EventHub::new())
    }

    #[tokio::test]
    async fn test_successful_load_renders_and_initializes_modal() {
        let (modal, hub) = parts();
        let mut loader = Loader::new();
        let outcome = loader.load(&StaticSource::ok(DOC), &modal, &hub).await;

        assert!(matches!(
            outcome,
            LoadOutcome::Loaded {
                specializations: 1,
                courses: 1
            }
        ));
        assert_eq!(loader.container().cards().len(), 1);
        assert!(modal.borrow().is_initialized());
        assert_eq!(loader.last_loaded().unwrap().specializations[0].name, "HTML");
    }

    #[tokio::test]
    async fn test_status_failure_shows_error_message() {
        let (modal, hub) = parts();
        let mut loader = Loader::new();
        let outcome = loader.load(&StaticSource::status(500), &modal, &hub).await;

        assert!(matches!(outcome, LoadOutcome::Failed(_)));
        assert_eq!(loader.container().error_message(), Some(LOAD_ERROR_MESSAGE));
        assert!(loader.last_loaded().is_none());
        assert!(!modal.borrow().is_initialized());
    }

    #[tokio::test]
    async fn test_malformed_payload_shows_error_message() {
        let (modal, hub) = parts();
        let mut loader = Loader::new();
        let outcome = loader.load(&StaticSource::ok("<html>"), &modal, &hub).await;

        match outcome {
            LoadOutcome::Failed(RoadmapError::Load(LoadFailure::Malformed(_))) => {}
            other => panic!("expected malformed failure, got {other:?}"),
        }
        assert_eq!(loader.container().error_message(), Some(LOAD_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_second_load_does_not_fetch() {
        let (modal, hub) = parts();
        let source = StaticSource::ok(DOC);
        let mut loader = Loader::new();

        loader.load(&source, &modal, &hub).await;
        let second = loader.load(&source, &modal, &hub).await;

        assert!(matches!(second, LoadOutcome::AlreadyAttempted));
        assert_eq!(source.fetches.get(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_is_terminal() {
        let (modal, hub) = parts();
        let mut loader = Loader::new();
        loader.load(&StaticSource::status(404), &modal, &hub).await;
        let retry = loader.load(&StaticSource::ok(DOC), &modal, &hub).await;

        assert!(matches!(retry, LoadOutcome::AlreadyAttempted));
        assert!(loader.container().error_message().is_some());
    }

    #[tokio::test]
    async fn test_unresolvable_location_shows_error_message() {
        let (modal, hub) = parts();
        let mut loader = Loader::new();
        let outcome = loader.load_location("", "http://", &modal, &hub).await;

        assert!(matches!(
            outcome,
            LoadOutcome::Failed(RoadmapError::Load(LoadFailure::Location { .. }))
        ));
        assert!(loader.attempted());
        assert_eq!(loader.container().error_message(), Some(LOAD_ERROR_MESSAGE));

        let retry = loader.load_location("", "roadmap.json", &modal, &hub).await;
        assert!(matches!(retry, LoadOutcome::AlreadyAttempted));
    }
}
