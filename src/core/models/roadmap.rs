//! Roadmap document model (the data source root)

use super::{Course, CourseId, Specialization};
use crate::core::error::{Result, RoadmapError};
use serde::{Deserialize, Serialize};

/// Root of the roadmap JSON document: `{ "specializations": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    /// Specializations in display order
    pub specializations: Vec<Specialization>,
}

impl Roadmap {
    /// Parse and validate a roadmap document
    ///
    /// # Errors
    /// Returns a malformed-document load failure if the JSON does not match the
    /// schema, or a validation error if a name is blank.
    pub fn from_json(json: &str) -> Result<Self> {
        let roadmap: Self = serde_json::from_str(json)?;
        roadmap.validate()?;
        Ok(roadmap)
    }

    /// Serialize back to pretty JSON
    ///
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the values serde cannot: names must not be blank
    ///
    /// # Errors
    /// Returns `RoadmapError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        for (s, spec) in self.specializations.iter().enumerate() {
            if spec.name.trim().is_empty() {
                return Err(RoadmapError::Validation {
                    path: format!("specializations[{s}].name"),
                    message: "specialization name must not be blank".to_string(),
                });
            }
            for (c, course) in spec.courses.iter().enumerate() {
                if course.name.trim().is_empty() {
                    return Err(RoadmapError::Validation {
                        path: format!("specializations[{s}].courses[{c}].name"),
                        message: format!("course name must not be blank in '{}'", spec.name),
                    });
                }
            }
        }
        Ok(())
    }

    /// Look up a course by its rendered identity
    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.specializations
            .get(id.specialization)
            .and_then(|spec| spec.courses.get(id.course))
    }

    /// Find the first course with an exactly matching name
    #[must_use]
    pub fn find_course(&self, name: &str) -> Option<(CourseId, &Course)> {
        self.courses().find(|(_, course)| course.name == name)
    }

    /// Iterate over every course with its identity, in document order
    pub fn courses(&self) -> impl Iterator<Item = (CourseId, &Course)> {
        self.specializations
            .iter()
            .enumerate()
            .flat_map(|(s, spec)| {
                spec.courses
                    .iter()
                    .enumerate()
                    .map(move |(c, course)| (CourseId::new(s, c), course))
            })
    }

    /// Total number of courses across all specializations
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.specializations.iter().map(|s| s.courses.len()).sum()
    }
}
