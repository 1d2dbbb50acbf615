//! Progress Entities
//!
//! Per-course completion state and the course-id keyed mapping that is
//! persisted as a single JSON document.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::course::CourseId;
use super::error::{DomainError, DomainResult};

/// Completion state of one course.
///
/// `completed` is only ever set by the explicit "mark completed" action and
/// implies that `completed_lessons` covers every lesson of the course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    /// Zero-based indices of checked lessons
    #[serde(default)]
    pub completed_lessons: BTreeSet<usize>,
    /// Explicit whole-course completion flag
    #[serde(default)]
    pub completed: bool,
}

impl ProgressEntry {
    /// True iff every index in `[0, lesson_count)` is checked
    pub fn covers(&self, lesson_count: usize) -> bool {
        (0..lesson_count).all(|index| self.completed_lessons.contains(&index))
    }
}

/// All progress entries, keyed by course id.
///
/// A course without an entry is untouched: nothing checked, not completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
    entries: BTreeMap<CourseId, ProgressEntry>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, course_id: CourseId) -> Option<&ProgressEntry> {
        self.entries.get(&course_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the explicit completion flag is set for a course
    pub fn is_marked_completed(&self, course_id: CourseId) -> bool {
        self.entry(course_id).is_some_and(|entry| entry.completed)
    }

    /// Whether a given lesson is checked
    pub fn is_lesson_completed(&self, course_id: CourseId, lesson_index: usize) -> bool {
        self.entry(course_id)
            .is_some_and(|entry| entry.completed_lessons.contains(&lesson_index))
    }

    /// Number of checked lessons for a course
    pub fn completed_count(&self, course_id: CourseId) -> usize {
        self.entry(course_id)
            .map_or(0, |entry| entry.completed_lessons.len())
    }

    /// True iff every lesson index in `[0, lesson_count)` is checked
    pub fn is_fully_completed(&self, course_id: CourseId, lesson_count: usize) -> bool {
        match self.entry(course_id) {
            Some(entry) => entry.covers(lesson_count),
            None => lesson_count == 0,
        }
    }

    /// Check or uncheck one lesson.
    ///
    /// Re-checking a checked lesson and unchecking an unchecked one are no-ops.
    /// Clears `completed` once the checked set stops covering the course.
    pub fn toggle_lesson(
        &mut self,
        course_id: CourseId,
        lesson_index: usize,
        checked: bool,
        lesson_count: usize,
    ) -> DomainResult<()> {
        if lesson_index >= lesson_count {
            return Err(DomainError::InvalidInput(format!(
                "lesson {} out of range for course {} ({} lessons)",
                lesson_index, course_id, lesson_count
            )));
        }

        let entry = self.entries.entry(course_id).or_default();
        if checked {
            entry.completed_lessons.insert(lesson_index);
        } else {
            entry.completed_lessons.remove(&lesson_index);
        }

        if entry.completed && !entry.covers(lesson_count) {
            entry.completed = false;
        }
        Ok(())
    }

    /// Check every lesson and set the completion flag
    pub fn mark_completed(&mut self, course_id: CourseId, lesson_count: usize) {
        let entry = self.entries.entry(course_id).or_default();
        entry.completed_lessons = (0..lesson_count).collect();
        entry.completed = true;
    }

    /// Drop indices outside each course's lesson range and clear completion
    /// flags the remaining set no longer backs.
    ///
    /// `lesson_count` returns `None` for courses missing from the catalog;
    /// their entries are kept as they are.
    pub fn sanitize(&mut self, lesson_count: impl Fn(CourseId) -> Option<usize>) -> usize {
        let mut repaired = 0;
        for (course_id, entry) in self.entries.iter_mut() {
            let Some(count) = lesson_count(*course_id) else {
                continue;
            };
            let before = entry.clone();
            entry.completed_lessons.retain(|index| *index < count);
            if entry.completed && !entry.covers(count) {
                entry.completed = false;
            }
            if *entry != before {
                repaired += 1;
            }
        }
        repaired
    }

    pub fn to_json(&self) -> DomainResult<String> {
        serde_json::to_string(self).map_err(|e| DomainError::Storage(e.to_string()))
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw).map_err(|e| DomainError::Storage(e.to_string()))
    }
}
