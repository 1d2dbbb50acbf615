//! Course Entity
//!
//! A named unit of content with an ordered list of lessons.

use serde::{Deserialize, Serialize};

/// Stable course identifier
pub type CourseId = u32;

/// A catalog course. Never mutated after the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier
    pub id: CourseId,
    pub title: String,
    pub description: String,
    /// Short label shown in place of an image on the course card
    pub image: String,
    /// Lesson titles in display order; a lesson's index is its position here
    pub lessons: Vec<String>,
}

impl Course {
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_deserialization() {
        let json = r#"{"id": 7, "title": "T", "description": "D", "image": "I", "lessons": ["a", "b"]}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, 7);
        assert_eq!(course.lesson_count(), 2);
        assert_eq!(course.lessons[1], "b");
    }
}
