//! Progress Store
//!
//! Owns the in-memory `Progress` and flushes it to a `KeyValueStore` after
//! every mutation.

use log::{debug, info, warn};

use super::KeyValueStore;
use crate::catalog::Catalog;
use crate::domain::{CourseId, DomainResult, Progress};

pub struct ProgressStore<S: KeyValueStore> {
    backend: S,
    key: String,
    progress: Progress,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Load progress from `key`.
    ///
    /// Missing, unreadable or malformed data yields an empty store; the
    /// failure is logged and never returned.
    pub fn load(backend: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let progress = read_progress(&backend, &key);
        Self { backend, key, progress }
    }

    /// Discard in-memory state and read it back from storage
    pub fn reload(&mut self) {
        self.progress = read_progress(&self.backend, &self.key);
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Check or uncheck a lesson, then persist
    pub fn toggle_lesson(
        &mut self,
        course_id: CourseId,
        lesson_index: usize,
        checked: bool,
        lesson_count: usize,
    ) -> DomainResult<()> {
        self.progress
            .toggle_lesson(course_id, lesson_index, checked, lesson_count)?;
        debug!(
            "course {} lesson {} -> {}",
            course_id,
            lesson_index,
            if checked { "checked" } else { "unchecked" }
        );
        self.persist();
        Ok(())
    }

    /// Check every lesson and set the completion flag, then persist
    pub fn mark_course_completed(&mut self, course_id: CourseId, lesson_count: usize) {
        self.progress.mark_completed(course_id, lesson_count);
        info!("course {} marked completed", course_id);
        self.persist();
    }

    pub fn is_course_fully_completed(&self, course_id: CourseId, lesson_count: usize) -> bool {
        self.progress.is_fully_completed(course_id, lesson_count)
    }

    /// Bring in-memory entries back in line with the catalog.
    ///
    /// Storage is left untouched; repairs reach it with the next mutation.
    pub fn sanitize(&mut self, catalog: &Catalog) {
        let repaired = self.progress.sanitize(|id| catalog.lesson_count(id));
        if repaired > 0 {
            warn!("repaired {} stale progress entries", repaired);
        }
    }

    fn persist(&self) {
        let result = self
            .progress
            .to_json()
            .and_then(|json| self.backend.set(&self.key, &json));
        if let Err(e) = result {
            warn!("failed to save progress under '{}': {}", self.key, e);
        }
    }
}

fn read_progress<S: KeyValueStore>(backend: &S, key: &str) -> Progress {
    match backend.get(key) {
        Ok(Some(raw)) => Progress::from_json(&raw).unwrap_or_else(|e| {
            warn!("ignoring malformed progress under '{}': {}", key, e);
            Progress::new()
        }),
        Ok(None) => Progress::new(),
        Err(e) => {
            warn!("failed to read progress under '{}': {}", key, e);
            Progress::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::storage::MemoryStore;

    const KEY: &str = "userProgress";

    /// Backend whose writes always fail
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> DomainResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> DomainResult<()> {
            Err(DomainError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let store = ProgressStore::load(MemoryStore::new(), KEY);
        assert!(store.progress().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["not json", "[1,2,3]", r#"{"1": {"completedLessons": [-1]}}"#, "null"] {
            let store = ProgressStore::load(MemoryStore::with_entry(KEY, raw), KEY);
            assert!(store.progress().is_empty(), "expected empty store for {}", raw);
        }
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let backend = MemoryStore::new();
        let mut store = ProgressStore::load(backend.clone(), KEY);

        store.toggle_lesson(2, 1, true, 4).unwrap();
        assert_eq!(
            backend.get(KEY).unwrap().as_deref(),
            Some(r#"{"2":{"completedLessons":[1],"completed":false}}"#)
        );

        store.mark_course_completed(3, 2);
        let reloaded = ProgressStore::load(backend, KEY);
        assert!(reloaded.progress().is_marked_completed(3));
        assert_eq!(reloaded.progress().completed_count(2), 1);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let backend = MemoryStore::new();
        let mut store = ProgressStore::load(backend.clone(), KEY);
        store.toggle_lesson(1, 0, true, 4).unwrap();
        store.toggle_lesson(1, 3, true, 4).unwrap();
        store.mark_course_completed(2, 4);
        store.toggle_lesson(2, 1, false, 4).unwrap();

        let reloaded = ProgressStore::load(backend, KEY);
        assert_eq!(reloaded.progress(), store.progress());
    }

    #[test]
    fn test_rejected_toggle_does_not_persist() {
        let backend = MemoryStore::new();
        let mut store = ProgressStore::load(backend.clone(), KEY);
        assert!(store.toggle_lesson(1, 10, true, 4).is_err());
        assert_eq!(backend.get(KEY).unwrap(), None);
    }

    #[test]
    fn test_write_failure_keeps_in_memory_state() {
        let mut store = ProgressStore::load(FullStore, KEY);
        store.toggle_lesson(1, 0, true, 4).unwrap();
        assert_eq!(store.progress().completed_count(1), 1);
    }

    #[test]
    fn test_sanitize_does_not_write() {
        let stored = r#"{"1":{"completedLessons":[0,1,2,3,7],"completed":true},"99":{"completedLessons":[0]}}"#;
        let backend = MemoryStore::with_entry(KEY, stored);
        let mut store = ProgressStore::load(backend.clone(), KEY);
        let catalog = Catalog::new(vec![crate::domain::Course {
            id: 1,
            title: "One".to_string(),
            description: String::new(),
            image: String::new(),
            lessons: (0..4).map(|i| format!("Lesson {}", i)).collect(),
        }])
        .unwrap();

        store.sanitize(&catalog);

        assert_eq!(store.progress().completed_count(1), 4);
        assert!(store.progress().is_marked_completed(1));
        assert_eq!(backend.get(KEY).unwrap().as_deref(), Some(stored));
    }

    #[test]
    fn test_reload_discards_unsaved_state() {
        let backend = MemoryStore::new();
        let mut store = ProgressStore::load(backend.clone(), KEY);
        store.toggle_lesson(1, 0, true, 4).unwrap();

        backend.set(KEY, "{}").unwrap();
        store.reload();
        assert!(store.progress().is_empty());
    }
}
