//! Course detail view: a single shared overlay
//!
//! States are `Closed` and `Open(course)`. Showing while open replaces the
//! displayed course. The close button, the overlay and the Escape key (only
//! while open) all close it. Opening locks page scrolling; closing releases it.

use crate::core::error::Result;
use crate::core::events::{EventHub, Key, Subscription, Target, UiEvent};
use crate::core::models::Course;
use crate::core::viewport::SharedViewport;
use askama::Template;
use std::cell::RefCell;
use std::rc::Rc;

/// Display state of the detail view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    /// Nothing shown
    #[default]
    Closed,
    /// Showing the given course
    Open(Course),
}

/// What the detail view displays for a course
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetail {
    /// Course name
    pub title: String,
    /// Full description
    pub description: String,
    /// Video link block, present iff the course has a non-empty video URL
    pub video_url: Option<String>,
    /// Lecture list block, shown iff non-empty
    pub lectures: Vec<String>,
}

impl From<&Course> for CourseDetail {
    fn from(course: &Course) -> Self {
        Self {
            title: course.name.clone(),
            description: course.description.clone(),
            video_url: course.video_url.clone().filter(|url| !url.is_empty()),
            lectures: course.lectures().to_vec(),
        }
    }
}

#[derive(Template)]
#[template(path = "course_detail.html")]
struct CourseDetailTemplate<'a> {
    detail: &'a CourseDetail,
}

/// The detail overlay
#[derive(Debug)]
pub struct Modal {
    state: ModalState,
    viewport: SharedViewport,
    subscriptions: Vec<Subscription>,
}

impl Modal {
    /// Create a closed detail view bound to the page viewport
    #[must_use]
    pub fn new(viewport: SharedViewport) -> Self {
        Self {
            state: ModalState::Closed,
            viewport,
            subscriptions: Vec::new(),
        }
    }

    /// Create a shared handle for the components that open and close it
    #[must_use]
    pub fn shared(viewport: SharedViewport) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(viewport)))
    }

    /// Register the three dismissal paths. Re-initializing replaces the
    /// previous registrations instead of adding to them.
    pub fn init(this: &Rc<RefCell<Self>>, hub: &EventHub) {
        let weak = Rc::downgrade(this);
        let subscription = hub.subscribe(move |event| {
            let Some(modal) = weak.upgrade() else {
                return;
            };
            let dismiss = match event {
                UiEvent::Click(Target::ModalClose | Target::ModalOverlay) => true,
                UiEvent::KeyDown(Key::Escape) => modal.borrow().is_open(),
                _ => false,
            };
            if dismiss {
                modal.borrow_mut().hide();
            }
        });

        let mut modal = this.borrow_mut();
        modal.subscriptions.clear();
        modal.subscriptions.push(subscription);
    }

    /// Whether dismissal handlers are registered
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Open (or refresh) the view with `course`
    pub fn show(&mut self, course: Course) {
        self.state = ModalState::Open(course);
        self.viewport.borrow_mut().scroll_locked = true;
    }

    /// Close the view and release the scroll lock
    pub fn hide(&mut self) {
        self.state = ModalState::Closed;
        self.viewport.borrow_mut().scroll_locked = false;
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &ModalState {
        &self.state
    }

    /// Whether a course is shown
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    /// Course currently shown
    #[must_use]
    pub const fn course(&self) -> Option<&Course> {
        match &self.state {
            ModalState::Open(course) => Some(course),
            ModalState::Closed => None,
        }
    }

    /// Display blocks for the course currently shown
    #[must_use]
    pub fn detail(&self) -> Option<CourseDetail> {
        self.course().map(CourseDetail::from)
    }

    /// Markup for the details container; empty while closed
    ///
    /// # Errors
    /// Returns an error if the template fails to render
    pub fn details_html(&self) -> Result<String> {
        match self.detail() {
            Some(detail) => Ok(CourseDetailTemplate { detail: &detail }.render()?),
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::Viewport;

    fn course() -> Course {
        Course::new("Intro".to_string(), "x".to_string())
    }

    fn setup() -> (EventHub, SharedViewport, Rc<RefCell<Modal>>) {
        let hub = EventHub::new();
        let viewport = Viewport::shared();
        let modal = Modal::shared(Rc::clone(&viewport));
        Modal::init(&modal, &hub);
        (hub, viewport, modal)
    }

    #[test]
    fn test_show_opens_and_locks_scroll() {
        let (_hub, viewport, modal) = setup();
        modal.borrow_mut().show(course());

        assert_eq!(modal.borrow().state(), &ModalState::Open(course()));
        assert!(viewport.borrow().scroll_locked);
    }

    #[test]
    fn test_each_dismissal_path_closes() {
        for event in [
            UiEvent::Click(Target::ModalClose),
            UiEvent::Click(Target::ModalOverlay),
            UiEvent::KeyDown(Key::Escape),
        ] {
            let (hub, viewport, modal) = setup();
            modal.borrow_mut().show(course());
            hub.dispatch(&event);

            assert_eq!(modal.borrow().state(), &ModalState::Closed, "{event:?}");
            assert!(!viewport.borrow().scroll_locked);
        }
    }

    #[test]
    fn test_other_keys_do_not_close() {
        let (hub, _viewport, modal) = setup();
        modal.borrow_mut().show(course());
        hub.dispatch(&UiEvent::KeyDown(Key::Enter));
        assert!(modal.borrow().is_open());
    }

    #[test]
    fn test_show_while_open_replaces_content() {
        let (_hub, _viewport, modal) = setup();
        modal.borrow_mut().show(course());
        let other = Course::new("Forms".to_string(), "y".to_string());
        modal.borrow_mut().show(other.clone());
        assert_eq!(modal.borrow().course(), Some(&other));
    }

    #[test]
    fn test_init_twice_registers_once() {
        let (hub, _viewport, modal) = setup();
        Modal::init(&modal, &hub);
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn test_detail_blocks() {
        let plain = CourseDetail::from(&course());
        assert!(plain.video_url.is_none());
        assert!(plain.lectures.is_empty());

        let full = CourseDetail::from(
            &course()
                .with_video("https://youtu.be/abc")
                .with_lectures(["Tags", "Attributes"]),
        );
        assert_eq!(full.video_url.as_deref(), Some("https://youtu.be/abc"));
        assert_eq!(full.lectures, ["Tags", "Attributes"]);
    }

    #[test]
    fn test_details_html_omits_absent_blocks() {
        let (_hub, _viewport, modal) = setup();
        assert_eq!(modal.borrow().details_html().unwrap(), "");

        modal.borrow_mut().show(course());
        let html = modal.borrow().details_html().unwrap();
        assert!(html.contains("<h2>Intro</h2>"));
        assert!(html.contains("<p class=\"course-detail-description\">x</p>"));
        assert!(!html.contains("course-video"));
        assert!(!html.contains("lectures-list"));
    }

    #[test]
    fn test_details_html_with_video_and_lectures_escapes_text() {
        let (_hub, _viewport, modal) = setup();
        modal.borrow_mut().show(
            Course::new("<b>Bold</b>".to_string(), "x".to_string())
                .with_video("https://youtu.be/abc")
                .with_lectures(["A & B"]),
        );
        let html = modal.borrow().details_html().unwrap();
        assert!(html.contains("&lt;b&gt;Bold"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("class=\"video-link\""));
        assert!(html.contains("<li>A &amp; B</li>"));
    }

    #[test]
    fn test_empty_video_url_has_no_video_block() {
        let (_hub, _viewport, modal) = setup();
        modal.borrow_mut().show(course().with_video(""));

        assert!(modal.borrow().detail().unwrap().video_url.is_none());
        let html = modal.borrow().details_html().unwrap();
        assert!(!html.contains("course-video"));
        assert!(!html.contains("href=\"\""));
    }
}
