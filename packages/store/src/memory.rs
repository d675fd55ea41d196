use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::db::KeyValueStore;
use crate::error::StoreError;

/// In-memory KeyValueStore for testing and native fallback.
///
/// Clones share the same map, so a test can keep a handle on the backend
/// while a [`crate::Store`] owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.slots
            .lock()
            .map_err(|e| StoreError::Backend(format!("lock poisoned: {e}")))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_overwrite() {
        let store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.set("k", "w").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));
    }

    #[test]
    fn test_clones_share_state() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
    }
}
