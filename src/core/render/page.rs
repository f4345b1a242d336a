//! Whole-page markup: tab bar, panels, roadmap container and detail overlay

use crate::core::error::Result;
use askama::Template;

/// A tab button and its panel as they appear on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    /// Identifier shared by `data-tab` and the panel id
    pub id: String,
    /// Button text
    pub label: String,
    /// Whether button and panel carry the `active` class
    pub active: bool,
    /// Whether the roadmap container lives in this panel
    pub holds_roadmap: bool,
}

impl TabView {
    /// Build a tab view, deriving the label from the id ("about-us" → "About Us")
    #[must_use]
    pub fn new(id: &str, active: bool, holds_roadmap: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label_for(id),
            active,
            holds_roadmap,
        }
    }
}

fn label_for(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inputs for the page template
#[derive(Template, Debug)]
#[template(path = "page.html")]
pub struct PageView {
    /// Document title
    pub title: String,
    /// Tabs in display order
    pub tabs: Vec<TabView>,
    /// Inner markup of the roadmap container
    pub container: String,
    /// Inner markup of the detail view
    pub details: String,
    /// Whether the detail view is shown
    pub modal_open: bool,
    /// Whether page scrolling is locked
    pub scroll_locked: bool,
}

impl PageView {
    /// Render the full document
    ///
    /// # Errors
    /// Returns an error if the template fails to render
    pub fn html(&self) -> Result<String> {
        Ok(self.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(label_for("home"), "Home");
        assert_eq!(label_for("about-us"), "About Us");
        assert_eq!(label_for("tools_and_workflow"), "Tools And Workflow");
    }

    #[test]
    fn test_page_marks_active_tab_and_embeds_container() {
        let page = PageView {
            title: "Roadmap".to_string(),
            tabs: vec![
                TabView::new("home", false, false),
                TabView::new("roadmap", true, true),
            ],
            container: "<div class=\"specialization-card\"></div>".to_string(),
            details: String::new(),
            modal_open: false,
            scroll_locked: false,
        };
        let html = page.html().unwrap();

        assert!(html.contains("<button class=\"tab-btn active\" data-tab=\"roadmap\">Roadmap</button>"));
        assert!(html.contains("<button class=\"tab-btn\" data-tab=\"home\">Home</button>"));
        assert!(html.contains("<section id=\"roadmap\" class=\"tab-content active\">"));
        assert!(html.contains("<div class=\"specialization-card\"></div>"));
        assert!(html.contains("class=\"modal\""));
        assert!(!html.contains("overflow: hidden"));
    }

    #[test]
    fn test_open_modal_locks_body() {
        let page = PageView {
            title: "Roadmap".to_string(),
            tabs: vec![TabView::new("home", true, false)],
            container: String::new(),
            details: "<h2>Intro</h2>".to_string(),
            modal_open: true,
            scroll_locked: true,
        };
        let html = page.html().unwrap();

        assert!(html.contains("class=\"modal active\""));
        assert!(html.contains("style=\"overflow: hidden\""));
        assert!(html.contains("<h2>Intro</h2>"));
        assert!(!html.contains("roadmap-container"));
    }
}
