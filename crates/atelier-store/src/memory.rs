//! In-memory store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::{KeyValueStore, StoreError};

/// A store that keeps all values in process memory.
///
/// Nothing survives the process; useful for tests and for hosts that
/// have no durable storage available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A poisoned lock only means a writer panicked mid-insert; the
        // map itself is still usable.
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.slots().get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.slots().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.slots().remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.slots().contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_delete() {
        let store = MemoryStore::new();

        store.set_raw("k", b"v").unwrap();
        assert_eq!(store.get_raw("k").unwrap(), Some(b"v".to_vec()));
        assert!(store.exists("k").unwrap());

        store.delete("k").unwrap();
        assert_eq!(store.get_raw("k").unwrap(), None);
        assert!(!store.exists("k").unwrap());
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let store = MemoryStore::new();
        store.set_raw("k", b"one").unwrap();
        store.set_raw("k", b"two").unwrap();
        assert_eq!(store.get_raw("k").unwrap(), Some(b"two".to_vec()));
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let store = MemoryStore::new();
        assert!(store.delete("missing").is_ok());
    }
}
