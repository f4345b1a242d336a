//! Page-level scroll state shared by the router and the detail view

use std::cell::RefCell;
use std::rc::Rc;

/// Scroll position and scroll lock of the page body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Vertical scroll offset in pixels
    pub scroll_top: u32,
    /// Whether page scrolling is suppressed (detail view open)
    pub scroll_locked: bool,
}

impl Viewport {
    /// Shared handle for components that touch the viewport
    #[must_use]
    pub fn shared() -> SharedViewport {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Jump back to the top of the page
    pub fn scroll_to_top(&mut self) {
        self.scroll_top = 0;
    }
}

/// Viewport handle shared between components
pub type SharedViewport = Rc<RefCell<Viewport>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_to_top_resets_offset() {
        let mut viewport = Viewport {
            scroll_top: 300,
            scroll_locked: true,
        };
        viewport.scroll_to_top();
        assert_eq!(viewport.scroll_top, 0);
        assert!(viewport.scroll_locked);
    }
}
