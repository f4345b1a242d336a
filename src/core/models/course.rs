//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single learning unit inside a specialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course name (e.g., "HTML Crash Course")
    pub name: String,

    /// Full description shown in the detail view; cards show it as a preview
    pub description: String,

    /// Optional link to a course video
    #[serde(rename = "videoUrl", default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    /// Optional ordered list of lecture titles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lectures: Option<Vec<String>>,
}

impl Course {
    /// Create a course without video or lectures
    #[must_use]
    pub const fn new(name: String, description: String) -> Self {
        Self {
            name,
            description,
            video_url: None,
            lectures: None,
        }
    }

    /// Attach a video link
    #[must_use]
    pub fn with_video(mut self, url: impl Into<String>) -> Self {
        self.video_url = Some(url.into());
        self
    }

    /// Attach a lecture list
    #[must_use]
    pub fn with_lectures<I, S>(mut self, lectures: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lectures = Some(lectures.into_iter().map(Into::into).collect());
        self
    }

    /// Whether the detail view should show the video block
    #[must_use]
    pub fn has_video(&self) -> bool {
        self.video_url.as_deref().is_some_and(|url| !url.is_empty())
    }

    /// Lecture titles, empty when none were given
    #[must_use]
    pub fn lectures(&self) -> &[String] {
        self.lectures.as_deref().unwrap_or_default()
    }
}

/// Identity of a rendered course item: specialization index and course index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId {
    /// Position of the owning specialization in the document
    pub specialization: usize,
    /// Position of the course within its specialization
    pub course: usize,
}

impl CourseId {
    /// Create an id from its two positions
    #[must_use]
    pub const fn new(specialization: usize, course: usize) -> Self {
        Self {
            specialization,
            course,
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.specialization, self.course)
    }
}

impl FromStr for CourseId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (spec, course) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid course id: '{s}'"))?;
        let specialization = spec
            .parse()
            .map_err(|_| format!("Invalid specialization index in course id: '{s}'"))?;
        let course = course
            .parse()
            .map_err(|_| format!("Invalid course index in course id: '{s}'"))?;
        Ok(Self::new(specialization, course))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("Intro".to_string(), "x".to_string());

        assert_eq!(course.name, "Intro");
        assert_eq!(course.description, "x");
        assert!(!course.has_video());
        assert!(course.lectures().is_empty());
    }

    #[test]
    fn test_empty_video_url_is_no_video() {
        let course = Course::new("Intro".to_string(), "x".to_string()).with_video("");
        assert!(!course.has_video());
        assert!(course.clone().with_video("https://youtu.be/x").has_video());
    }

    #[test]
    fn test_deserialize_camel_case_video_url() {
        let course: Course = serde_json::from_str(
            r#"{"name":"Flexbox","description":"Layouts","videoUrl":"https://youtu.be/x","lectures":["One","Two"]}"#,
        )
        .unwrap();

        assert_eq!(course.video_url.as_deref(), Some("https://youtu.be/x"));
        assert_eq!(course.lectures(), ["One", "Two"]);
    }

    #[test]
    fn test_absent_optionals_are_not_serialized() {
        let course = Course::new("Intro".to_string(), "x".to_string());
        let json = serde_json::to_string(&course).unwrap();
        assert_eq!(json, r#"{"name":"Intro","description":"x"}"#);
    }

    #[test]
    fn test_empty_lecture_list_survives_serialization() {
        let course = Course::new("Intro".to_string(), "x".to_string()).with_lectures(Vec::<String>::new());
        let json = serde_json::to_string(&course).unwrap();
        let back: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(back, course);
        assert_eq!(back.lectures, Some(Vec::new()));
    }

    #[test]
    fn test_course_id_format_and_parse() {
        let id = CourseId::new(3, 12);
        assert_eq!(id.to_string(), "3-12");
        assert_eq!("3-12".parse::<CourseId>().unwrap(), id);
    }

    #[test]
    fn test_course_id_rejects_garbage() {
        assert!("".parse::<CourseId>().is_err());
        assert!("3".parse::<CourseId>().is_err());
        assert!("a-1".parse::<CourseId>().is_err());
        assert!("1-b".parse::<CourseId>().is_err());
        assert!("-1-2".parse::<CourseId>().is_err());
    }
}
