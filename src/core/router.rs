//! Tab routing synchronized with the navigation fragment
//!
//! Exactly one tab is active at a time. Its button and its content panel
//! share the tab identifier. Clicking a button records the change in history;
//! history navigation (popstate) switches tabs without recording anything.

use crate::core::events::{EventHub, Subscription, Target, UiEvent};
use crate::core::history::{normalize_fragment, NavigationHistory};
use crate::core::viewport::SharedViewport;
use crate::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// Tab identifier used when the address carries no fragment
pub const DEFAULT_TAB: &str = "home";

/// Maps tab identifiers to the active button and panel
#[derive(Debug)]
pub struct TabRouter {
    tabs: Vec<String>,
    default_tab: String,
    active: String,
    history: NavigationHistory,
    viewport: SharedViewport,
    subscriptions: Vec<Subscription>,
}

impl TabRouter {
    /// Create a router for the configured tabs.
    ///
    /// The default tab is added in front when the list does not contain it.
    /// Nothing is active until [`init`](Self::init) or a switch.
    #[must_use]
    pub fn new(
        tabs: &[String],
        default_tab: &str,
        history: NavigationHistory,
        viewport: SharedViewport,
    ) -> Self {
        let mut ids: Vec<String> = Vec::with_capacity(tabs.len() + 1);
        for tab in tabs {
            let tab = tab.trim();
            if !tab.is_empty() && !ids.iter().any(|t| t == tab) {
                ids.push(tab.to_string());
            }
        }
        if !ids.iter().any(|t| t == default_tab) {
            ids.insert(0, default_tab.to_string());
        }

        Self {
            tabs: ids,
            default_tab: default_tab.to_string(),
            active: String::new(),
            history,
            viewport,
            subscriptions: Vec::new(),
        }
    }

    /// Wire button clicks and history navigation, then activate the tab named
    /// by the current fragment (or the default) without touching history.
    pub fn init(this: &Rc<RefCell<Self>>, hub: &EventHub) {
        let weak = Rc::downgrade(this);
        let subscription = hub.subscribe(move |event| {
            let Some(router) = weak.upgrade() else {
                return;
            };
            match event {
                UiEvent::Click(Target::TabButton(tab_id)) => {
                    router.borrow_mut().switch_tab(tab_id, true);
                }
                UiEvent::PopState(fragment) => router.borrow_mut().on_pop_state(fragment),
                _ => {}
            }
        });

        let mut router = this.borrow_mut();
        router.subscriptions.clear();
        router.subscriptions.push(subscription);
        let initial = router.history.current_fragment().to_string();
        router.switch_tab(&initial, false);
    }

    /// Activate a tab, optionally recording it in history, and scroll to top.
    ///
    /// An empty id selects the default tab. Unknown ids are logged and fall
    /// back to the default tab. Returns the id that ended up active.
    pub fn switch_tab(&mut self, tab_id: &str, update_history: bool) -> &str {
        let requested = normalize_fragment(tab_id);
        let resolved = if requested.is_empty() {
            self.default_tab.clone()
        } else if self.is_known(requested) {
            requested.to_string()
        } else {
            warn!(
                "Unknown tab '{requested}', falling back to '{}'",
                self.default_tab
            );
            self.default_tab.clone()
        };

        if update_history {
            self.history.push(&resolved);
        }
        debug!("Switching to tab '{resolved}'");
        self.active = resolved;
        self.viewport.borrow_mut().scroll_to_top();
        &self.active
    }

    /// Respond to history navigation landing on `fragment`
    pub fn on_pop_state(&mut self, fragment: &str) {
        self.switch_tab(fragment, false);
    }

    /// Go back one history entry and switch accordingly
    pub fn back(&mut self) -> Option<String> {
        let fragment = self.history.back()?.to_string();
        self.on_pop_state(&fragment);
        Some(fragment)
    }

    /// Go forward one history entry and switch accordingly
    pub fn forward(&mut self) -> Option<String> {
        let fragment = self.history.forward()?.to_string();
        self.on_pop_state(&fragment);
        Some(fragment)
    }

    /// Whether `tab_id` is one of the configured tabs
    #[must_use]
    pub fn is_known(&self, tab_id: &str) -> bool {
        self.tabs.iter().any(|t| t == tab_id)
    }

    /// Currently active tab id (empty before the first switch)
    #[must_use]
    pub fn active_tab(&self) -> &str {
        &self.active
    }

    /// Whether the button carrying `data-tab = tab_id` is marked active
    #[must_use]
    pub fn is_button_active(&self, tab_id: &str) -> bool {
        !self.active.is_empty() && self.active == tab_id
    }

    /// Whether the content panel with `id = tab_id` is visible
    #[must_use]
    pub fn is_panel_active(&self, tab_id: &str) -> bool {
        self.is_button_active(tab_id)
    }

    /// Configured tab ids in display order
    #[must_use]
    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    /// Navigation history backing the fragment
    #[must_use]
    pub const fn history(&self) -> &NavigationHistory {
        &self.history
    }
}
