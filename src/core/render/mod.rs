//! Roadmap rendering
//!
//! Turns specializations into cards inside the container and wires a
//! selection handler per course item. Courses are kept in an in-memory table
//! keyed by [`CourseId`]; the markup only carries the id, so selection never
//! decodes anything out of the page.

pub mod card;
pub mod icons;
pub mod page;

pub use card::{Card, Container, ContainerContent, CourseItem, LOAD_ERROR_MESSAGE};
pub use icons::{icon_for, FALLBACK_ICON};
pub use page::{PageView, TabView};

use crate::core::events::{EventHub, Subscription, Target, UiEvent};
use crate::core::modal::Modal;
use crate::core::models::{Course, CourseId, Specialization};
use crate::debug;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Builds cards and owns the course table behind them
#[derive(Debug, Default)]
pub struct Renderer {
    courses: BTreeMap<CourseId, Rc<Course>>,
    subscriptions: Vec<Subscription>,
}

impl Renderer {
    /// Create a renderer with nothing rendered
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the container content with one card per specialization.
    ///
    /// Handlers and table entries from the previous render are dropped first.
    /// Each course item gets its own handler that opens `modal` with that course.
    pub fn render(
        &mut self,
        specializations: &[Specialization],
        container: &mut Container,
        modal: &Rc<RefCell<Modal>>,
        hub: &EventHub,
    ) {
        self.subscriptions.clear();
        self.courses.clear();
        container.clear();

        let mut cards = Vec::with_capacity(specializations.len());
        for (index, specialization) in specializations.iter().enumerate() {
            let card = Card::build(index, specialization);
            for (item, course) in card.items.iter().zip(&specialization.courses) {
                let course = Rc::new(course.clone());
                self.subscriptions
                    .push(Self::select_handler(item.id, Rc::clone(&course), modal, hub));
                self.courses.insert(item.id, course);
            }
            cards.push(card);
        }

        debug!(
            "Rendered {} cards with {} course items",
            cards.len(),
            self.courses.len()
        );
        container.replace_with_cards(cards);
    }

    fn select_handler(
        id: CourseId,
        course: Rc<Course>,
        modal: &Rc<RefCell<Modal>>,
        hub: &EventHub,
    ) -> Subscription {
        let modal = Rc::downgrade(modal);
        hub.subscribe(move |event| {
            if event != &UiEvent::Click(Target::CourseItem(id)) {
                return;
            }
            if let Some(modal) = modal.upgrade() {
                modal.borrow_mut().show(Course::clone(&course));
            }
        })
    }

    /// Full course behind a rendered item
    #[must_use]
    pub fn resolve(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(&id).map(|course| &**course)
    }

    /// Number of live selection handlers
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.subscriptions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::modal::ModalState;
    use crate::core::viewport::Viewport;

    fn specs() -> Vec<Specialization> {
        let mut html = Specialization::new("HTML".to_string(), "d".to_string());
        html.add_course(Course::new("Intro".to_string(), "x".to_string()));
        let mut css = Specialization::new("CSS".to_string(), "e".to_string());
        css.add_course(Course::new("Selectors".to_string(), "s".to_string()));
        css.add_course(
            Course::new("Grid".to_string(), "g".to_string())
                .with_video("https://v")
                .with_lectures(["Tracks"]),
        );
        vec![html, css]
    }

    fn setup() -> (EventHub, Rc<RefCell<Modal>>, Container, Renderer) {
        (
            EventHub::new(),
            Modal::shared(Viewport::shared()),
            Container::new(),
            Renderer::new(),
        )
    }

    #[test]
    fn test_card_and_item_counts_follow_document() {
        let (hub, modal, mut container, mut renderer) = setup();
        let specs = specs();
        renderer.render(&specs, &mut container, &modal, &hub);

        assert_eq!(container.cards().len(), specs.len());
        for (card, spec) in container.cards().iter().zip(&specs) {
            assert_eq!(card.title, spec.name);
            assert_eq!(card.items.len(), spec.courses.len());
        }
        assert_eq!(renderer.handler_count(), 3);
    }

    #[test]
    fn test_resolve_returns_source_course() {
        let (hub, modal, mut container, mut renderer) = setup();
        let specs = specs();
        renderer.render(&specs, &mut container, &modal, &hub);

        for card in container.cards() {
            for item in &card.items {
                let expected = &specs[item.id.specialization].courses[item.id.course];
                assert_eq!(renderer.resolve(item.id), Some(expected));
            }
        }
        assert!(renderer.resolve(CourseId::new(9, 9)).is_none());
    }

    #[test]
    fn test_click_opens_modal_with_that_course() {
        let (hub, modal, mut container, mut renderer) = setup();
        let specs = specs();
        renderer.render(&specs, &mut container, &modal, &hub);

        hub.dispatch(&UiEvent::Click(Target::CourseItem(CourseId::new(1, 1))));
        assert_eq!(
            modal.borrow().state(),
            &ModalState::Open(specs[1].courses[1].clone())
        );
    }

    #[test]
    fn test_rerender_drops_previous_handlers() {
        let (hub, modal, mut container, mut renderer) = setup();
        renderer.render(&specs(), &mut container, &modal, &hub);
        renderer.render(&specs()[..1], &mut container, &modal, &hub);

        assert_eq!(hub.listener_count(), 1);
        assert_eq!(container.cards().len(), 1);
        hub.dispatch(&UiEvent::Click(Target::CourseItem(CourseId::new(1, 0))));
        assert!(!modal.borrow().is_open());
    }

    #[test]
    fn test_render_empty_list() {
        let (hub, modal, mut container, mut renderer) = setup();
        renderer.render(&[], &mut container, &modal, &hub);
        assert_eq!(container.content(), &ContainerContent::Cards(Vec::new()));
        assert_eq!(hub.listener_count(), 0);
    }
}
