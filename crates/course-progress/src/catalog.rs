//! Course Catalog
//!
//! Read-only lookup over the courses supplied at startup.

use std::collections::HashSet;

use crate::domain::{Course, CourseId, DomainError, DomainResult};

/// Immutable, ordered list of courses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate course ids
    pub fn new(courses: Vec<Course>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id) {
                return Err(DomainError::Config(format!("duplicate course id {}", course.id)));
            }
        }
        Ok(Self { courses })
    }

    /// Courses in display order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn find_by_id(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    pub fn lesson_count(&self, id: CourseId) -> Option<usize> {
        self.find_by_id(id).map(Course::lesson_count)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
