//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! writes straight into `window.localStorage`, so the database survives page
//! reloads and is scoped to the page's origin.
//!
//! The handle is looked up on every call rather than cached: `web_sys::Storage`
//! is not `Send`, and the lookup is a cheap property read.
//!
//! ## Errors
//!
//! A missing `window` (e.g. a worker context), disabled storage, or a quota
//! failure on `setItem` all surface as [`StoreError::Backend`] with the
//! JavaScript error rendered by its `Debug` impl.

use crate::db::KeyValueStore;
use crate::error::StoreError;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Backend("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Backend(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Backend("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{e:?}")))
    }
}
