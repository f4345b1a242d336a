//! Card and container view models and their markup

use super::icons::icon_for;
use crate::core::error::Result;
use crate::core::models::{CourseId, Specialization};
use askama::Template;
use std::fmt::Write;

/// Message shown in the container when the roadmap cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load roadmap data. Please refresh the page.";

/// Summary line of a course inside a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseItem {
    /// Identity used to resolve the full course on selection
    pub id: CourseId,
    /// Course name
    pub name: String,
    /// Description preview
    pub preview: String,
}

/// One rendered specialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Position in the document, drives the staggered animation
    pub index: usize,
    /// Specialization name
    pub title: String,
    /// Icon class resolved from the name
    pub icon: &'static str,
    /// Specialization description
    pub description: String,
    /// Course summaries in document order
    pub items: Vec<CourseItem>,
}

impl Card {
    /// Build the card for the specialization at `index`
    #[must_use]
    pub fn build(index: usize, specialization: &Specialization) -> Self {
        let items = specialization
            .courses
            .iter()
            .enumerate()
            .map(|(c, course)| CourseItem {
                id: CourseId::new(index, c),
                name: course.name.clone(),
                preview: course.description.clone(),
            })
            .collect();

        Self {
            index,
            title: specialization.name.clone(),
            icon: icon_for(&specialization.name),
            description: specialization.description.clone(),
            items,
        }
    }

    /// CSS animation delay, a tenth of a second per preceding card
    #[must_use]
    pub fn animation_delay(&self) -> String {
        format!("{}.{}s", self.index / 10, self.index % 10)
    }

    /// Markup for this card
    ///
    /// # Errors
    /// Returns an error if the template fails to render
    pub fn html(&self) -> Result<String> {
        Ok(CardTemplate { card: self }.render()?)
    }
}

#[derive(Template)]
#[template(path = "card.html")]
struct CardTemplate<'a> {
    card: &'a Card,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    message: &'a str,
}

#[derive(Template)]
#[template(path = "loading.html")]
struct LoadingTemplate;

/// What the roadmap container currently holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContainerContent {
    /// Initial placeholder before the loader finishes
    #[default]
    Loading,
    /// Rendered specialization cards
    Cards(Vec<Card>),
    /// Static error message after a failed load
    Error(String),
}

/// The roadmap container element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    content: ContainerContent,
}

impl Container {
    /// Create a container showing the loading placeholder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with the given cards
    pub fn replace_with_cards(&mut self, cards: Vec<Card>) {
        self.content = ContainerContent::Cards(cards);
    }

    /// Replace everything with the static load error message
    pub fn show_load_error(&mut self) {
        self.content = ContainerContent::Error(LOAD_ERROR_MESSAGE.to_string());
    }

    /// Remove all content
    pub fn clear(&mut self) {
        self.content = ContainerContent::Cards(Vec::new());
    }

    /// Current content
    #[must_use]
    pub const fn content(&self) -> &ContainerContent {
        &self.content
    }

    /// Rendered cards, empty unless the container holds cards
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match &self.content {
            ContainerContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    /// Error message, if the container shows one
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.content {
            ContainerContent::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Inner markup of the container
    ///
    /// # Errors
    /// Returns an error if a template fails to render
    pub fn html(&self) -> Result<String> {
        match &self.content {
            ContainerContent::Loading => Ok(LoadingTemplate.render()?),
            ContainerContent::Error(message) => Ok(ErrorTemplate { message }.render()?),
            ContainerContent::Cards(cards) => {
                let mut html = String::new();
                for card in cards {
                    let _ = writeln!(html, "{}", card.html()?);
                }
                Ok(html)
            }
        }
    }
}
