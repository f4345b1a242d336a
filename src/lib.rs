//! Library for the roadmap browser
//! Loads a roadmap document and models the tabbed page, cards, and course detail view

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::app::{App, AppSettings, Snapshot};
pub use crate::core::error::{LoadFailure, Result, RoadmapError};
pub use crate::core::models::{Course, CourseId, Roadmap, Specialization};
