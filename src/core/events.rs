//! Event subscription for page interactions
//!
//! Components register handlers on an [`EventHub`] and keep the returned
//! [`Subscription`]. Dropping or disposing the subscription removes the
//! handler, so a re-render can discard the listeners of the nodes it replaced.
//! The hub is single-threaded: everything runs on the caller's thread.

use crate::core::models::CourseId;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Something on the page that can be clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A tab button carrying its `data-tab` identifier
    TabButton(String),
    /// A rendered course item
    CourseItem(CourseId),
    /// The detail view's close button
    ModalClose,
    /// The dimmed background behind the detail view
    ModalOverlay,
}

/// Keys the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Escape key
    Escape,
    /// Enter key
    Enter,
    /// Any other key, by name
    Other(String),
}

impl Key {
    /// Map a key name (as reported by a keyboard event) to a key
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "Enter" => Self::Enter,
            other => Self::Other(other.to_string()),
        }
    }
}

/// An interaction delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Activation of a target
    Click(Target),
    /// A key press anywhere on the document
    KeyDown(Key),
    /// History navigation landed on the given fragment (without `#`, may be empty)
    PopState(String),
}

type Handler = Rc<RefCell<dyn FnMut(&UiEvent)>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.handlers.iter().any(|(handler_id, _)| *handler_id == id)
    }
}

/// Registry of page event handlers
#[derive(Clone, Default)]
pub struct EventHub {
    registry: Rc<RefCell<Registry>>,
}

impl EventHub {
    /// Create an empty hub
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it stays active until the subscription is disposed or dropped
    #[must_use = "dropping the subscription removes the handler immediately"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(&UiEvent) + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        let handler: Handler = Rc::new(RefCell::new(handler));
        registry.handlers.push((id, handler));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver an event to every handler registered at the time of the call.
    ///
    /// Handlers removed by an earlier handler during the same dispatch are
    /// skipped. A handler that re-enters `dispatch` is not invoked recursively.
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &UiEvent) -> usize {
        let snapshot: Vec<(u64, Handler)> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(id, handler)| (*id, Rc::clone(handler)))
            .collect();

        let mut invoked = 0;
        for (id, handler) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            if let Ok(mut handler) = handler.try_borrow_mut() {
                handler(event);
                invoked += 1;
            }
        }
        invoked
    }

    /// Number of live handlers
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

/// Handle to a registered handler; removes it on drop
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    /// Remove the handler now
    pub fn dispose(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if let Ok(mut registry) = registry.try_borrow_mut() {
                registry.handlers.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_reaches_subscribers() {
        let hub = EventHub::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let _sub = hub.subscribe(move |_| counter.set(counter.get() + 1));

        assert_eq!(hub.dispatch(&UiEvent::KeyDown(Key::Enter)), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_dispose_removes_handler() {
        let hub = EventHub::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let sub = hub.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(hub.listener_count(), 1);

        sub.dispose();
        assert_eq!(hub.listener_count(), 0);
        assert_eq!(hub.dispatch(&UiEvent::Click(Target::ModalClose)), 0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_drop_removes_handler() {
        let hub = EventHub::new();
        {
            let _sub = hub.subscribe(|_| {});
            assert_eq!(hub.listener_count(), 1);
        }
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_hub_is_harmless() {
        let sub = {
            let hub = EventHub::new();
            hub.subscribe(|_| {})
        };
        sub.dispose();
    }

    #[test]
    fn test_handler_disposed_by_earlier_handler_is_skipped() {
        let hub = EventHub::new();
        let victim_hits = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let slot_for_killer = Rc::clone(&slot);
        let _killer = hub.subscribe(move |_| {
            slot_for_killer.borrow_mut().take();
        });
        let counter = Rc::clone(&victim_hits);
        *slot.borrow_mut() = Some(hub.subscribe(move |_| counter.set(counter.get() + 1)));

        assert_eq!(hub.dispatch(&UiEvent::KeyDown(Key::Escape)), 1);
        assert_eq!(victim_hits.get(), 0);
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("Enter"), Key::Enter);
        assert_eq!(Key::from_name("a"), Key::Other("a".to_string()));
    }
}
