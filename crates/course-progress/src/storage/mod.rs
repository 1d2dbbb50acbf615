//! Storage Layer
//!
//! Key-value persistence behind a small trait so the browser's
//! `localStorage` and an in-memory map are interchangeable.

mod progress_store;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{DomainError, DomainResult};

pub use progress_store::ProgressStore;

/// String-keyed durable storage
///
/// Reads and writes are synchronous; a write has completed when `set` returns.
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// In-memory store. Clones share the same underlying map, which lets a test
/// "reload" by building a second store over the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_clones_share_data() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
        assert_eq!(other.get("missing").unwrap(), None);
    }
}
