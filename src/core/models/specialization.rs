//! Specialization model

use super::Course;
use serde::{Deserialize, Serialize};

/// A named topic grouping several courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialization {
    /// Display name, also used for icon lookup
    pub name: String,

    /// Short description shown on the card
    pub description: String,

    /// Courses in display order
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Specialization {
    /// Create an empty specialization
    #[must_use]
    pub const fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            courses: Vec::new(),
        }
    }

    /// Append a course, keeping document order
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_course_keeps_order() {
        let mut spec = Specialization::new("CSS".to_string(), "Styling".to_string());
        spec.add_course(Course::new("Selectors".to_string(), "a".to_string()));
        spec.add_course(Course::new("Grid".to_string(), "b".to_string()));

        let names: Vec<_> = spec.courses.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Selectors", "Grid"]);
    }

    #[test]
    fn test_missing_courses_key_defaults_to_empty() {
        let spec: Specialization =
            serde_json::from_str(r#"{"name":"React","description":"UI"}"#).unwrap();
        assert!(spec.courses.is_empty());
    }
}
