//! Data models for the roadmap document

pub mod course;
pub mod roadmap;
pub mod specialization;

pub use course::{Course, CourseId};
pub use roadmap::Roadmap;
pub use specialization::Specialization;
