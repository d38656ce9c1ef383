use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{validate_key, KeyValueStore, StorageError};

/// In-memory store. Used by tests and for throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with raw values, e.g. deliberately corrupt JSON.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            entries: Mutex::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panic while holding the lock cannot leave a HashMap half-written
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("user_roadmaps").unwrap(), None);

        store.set("user_roadmaps", "[]").unwrap();
        assert_eq!(store.get("user_roadmaps").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.len(), 1);

        store.remove("user_roadmaps").unwrap();
        store.remove("user_roadmaps").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_rejects_invalid_key() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.set("bad key", "1"),
            Err(StorageError::InvalidKey(_))
        ));
    }
}
