//! # Store — durable load/save of the single ReceitaHub [`Database`]
//!
//! The whole application state is one JSON document kept under one key of a
//! [`KeyValueStore`]. [`Store`] owns that key and is the only thing that reads
//! or writes it; use cases receive a `&Store` and never touch the backend.
//!
//! ## [`KeyValueStore`] trait
//!
//! Two synchronous methods, `get`/`set`, over string keys and string values.
//! Implementations live in sibling modules ([`crate::memory`],
//! [`crate::file_store`], and `local_storage` on the web).
//!
//! ## Load policy
//!
//! | Slot content | Result |
//! |--------------|--------|
//! | absent, empty, or whitespace | fresh [`Database`] |
//! | valid document | parsed [`Database`], session re-resolved against `users` |
//! | malformed JSON or wrong shape | raw text copied to `<key>.corrupt`, fresh [`Database`] |
//!
//! A failed copy to `<key>.corrupt` is logged and otherwise ignored; the fresh
//! [`Database`] is returned either way.
//!
//! A session whose user id no longer exists in `users` is cleared and the
//! cleared document is written back immediately.
//!
//! ## Writes
//!
//! [`Store::save`] rewrites the whole document. Mutating use cases go through
//! [`Store::update`], which loads, applies a closure, and saves only when the
//! closure succeeds. The read-modify-write is not atomic across two `Store`
//! instances sharing a backend: the last writer wins.

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::models::{Database, Id};

/// Key the web client has always used in `localStorage`.
pub const DEFAULT_KEY: &str = "receitaHubDB";

/// Synchronous string key-value backend.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The database slot on top of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct Store<K: KeyValueStore> {
    kv: K,
    key: String,
}

impl<K: KeyValueStore> Store<K> {
    /// Store under [`DEFAULT_KEY`].
    pub fn new(kv: K) -> Self {
        Self::with_key(kv, DEFAULT_KEY)
    }

    pub fn with_key(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// Key that receives the last document that failed to parse.
    pub fn quarantine_key(&self) -> String {
        format!("{}.corrupt", self.key)
    }

    /// Read the database, creating a fresh one if the slot is empty.
    pub fn load(&self) -> Result<Database, StoreError> {
        let raw = match self.kv.get(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                debug!(key = %self.key, "empty slot, starting fresh database");
                return Ok(Database::default());
            }
        };

        let mut db = match serde_json::from_str::<Database>(&raw) {
            Ok(db) => db,
            Err(e) => {
                let quarantine = self.quarantine_key();
                warn!(
                    key = %self.key,
                    %quarantine,
                    error = %e,
                    "malformed database, moving it aside and starting fresh"
                );
                if let Err(e) = self.kv.set(&quarantine, &raw) {
                    warn!(%quarantine, error = %e, "could not keep malformed database");
                }
                return Ok(Database::default());
            }
        };
        debug!(
            key = %self.key,
            bytes = raw.len(),
            users = db.users.len(),
            recipes = db.recipes.len(),
            "loaded database"
        );

        if heal_session(&mut db) {
            self.save(&db)?;
        }
        Ok(db)
    }

    /// Serialize and overwrite the whole slot.
    pub fn save(&self, db: &Database) -> Result<(), StoreError> {
        let raw = serde_json::to_string(db)?;
        debug!(key = %self.key, bytes = raw.len(), "saving database");
        self.kv.set(&self.key, &raw)
    }

    /// Load, mutate, and save. Nothing is written if `f` fails.
    pub fn update<T, E>(&self, f: impl FnOnce(&mut Database) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let mut db = self.load()?;
        let out = f(&mut db)?;
        self.save(&db)?;
        Ok(out)
    }

    /// Fresh id for a new record: the current time in milliseconds, bumped
    /// past the largest existing id when the clock has not moved on.
    pub fn next_id(db: &Database) -> Id {
        let now = Utc::now().timestamp_millis();
        match db.max_id() {
            Some(max) if max >= now => max.saturating_add(1),
            _ => now,
        }
    }
}

/// Clear a session that points at an unknown user, or refresh it from the
/// canonical record. Returns `true` when the session was cleared.
fn heal_session(db: &mut Database) -> bool {
    let Some(session) = db.logged_in_user.as_ref() else {
        return false;
    };
    match db.user_by_id(session.id) {
        Some(user) => {
            let user = user.clone();
            db.logged_in_user = Some(user);
            false
        }
        None => {
            warn!(user_id = session.id, "session user no longer exists, logging out");
            db.logged_in_user = None;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::memory::MemoryStore;
    use crate::models::User;

    fn user(id: Id, name: &str) -> User {
        User {
            id,
            username: name.to_string(),
            email: format!("{name}@x.com"),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn test_empty_slot_gives_fresh_database() {
        let kv = MemoryStore::new();
        let store = Store::new(kv.clone());
        assert_eq!(store.load().unwrap(), Database::default());

        kv.set(DEFAULT_KEY, "   ").unwrap();
        assert_eq!(store.load().unwrap(), Database::default());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let store = Store::new(MemoryStore::new());
        let mut db = Database::default();
        db.users.push(user(1, "ana"));
        db.logged_in_user = Some(user(1, "ana"));

        store.save(&db).unwrap();
        assert_eq!(store.load().unwrap(), db);
    }

    #[test]
    fn test_malformed_document_is_quarantined() {
        let kv = MemoryStore::new();
        let store = Store::new(kv.clone());
        kv.set(DEFAULT_KEY, "{not json").unwrap();

        let db = store.load().unwrap();
        assert_eq!(db, Database::default());
        assert_eq!(
            kv.get(&store.quarantine_key()).unwrap().as_deref(),
            Some("{not json")
        );
        // Original slot is left alone until the next write.
        assert_eq!(kv.get(DEFAULT_KEY).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_wrong_shape_is_quarantined() {
        let kv = MemoryStore::new();
        let store = Store::new(kv.clone());
        kv.set(DEFAULT_KEY, r#"{"users": 3, "recipes": []}"#).unwrap();

        assert_eq!(store.load().unwrap(), Database::default());
        assert!(kv.get(&store.quarantine_key()).unwrap().is_some());
    }

    #[test]
    fn test_stale_session_is_cleared_and_persisted() {
        let kv = MemoryStore::new();
        let store = Store::new(kv.clone());
        let mut db = Database::default();
        db.users.push(user(1, "ana"));
        db.logged_in_user = Some(user(99, "ghost"));
        store.save(&db).unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.logged_in_user.is_none());

        let raw = kv.get(DEFAULT_KEY).unwrap().unwrap();
        let persisted: Database = serde_json::from_str(&raw).unwrap();
        assert!(persisted.logged_in_user.is_none());
    }

    #[test]
    fn test_session_is_refreshed_from_users() {
        let store = Store::new(MemoryStore::new());
        let mut db = Database::default();
        db.users.push(user(1, "ana"));
        let mut stale_copy = user(1, "ana");
        stale_copy.username = "old-name".to_string();
        db.logged_in_user = Some(stale_copy);
        store.save(&db).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.logged_in_user.unwrap().username, "ana");
    }

    #[test]
    fn test_update_skips_save_on_error() {
        let store = Store::new(MemoryStore::new());
        let result: Result<(), AppError> = store.update(|db| {
            db.users.push(user(1, "ana"));
            Err(AppError::InvalidCredentials)
        });
        assert!(result.is_err());
        assert!(store.load().unwrap().users.is_empty());
    }

    #[test]
    fn test_next_id_is_monotonic() {
        let mut db = Database::default();
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        db.users.push(user(far_future, "ana"));
        assert_eq!(Store::<MemoryStore>::next_id(&db), far_future + 1);

        let empty = Database::default();
        assert!(Store::<MemoryStore>::next_id(&empty) > 0);
    }

    /// Backend that refuses every write to a `.corrupt` key.
    #[derive(Clone, Default)]
    struct FullQuarantine {
        inner: MemoryStore,
    }

    impl KeyValueStore for FullQuarantine {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if key.ends_with(".corrupt") {
                return Err(StoreError::Backend("QuotaExceededError".to_string()));
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn test_failed_quarantine_still_starts_fresh() {
        let kv = FullQuarantine::default();
        let store = Store::new(kv.clone());
        kv.inner.set(DEFAULT_KEY, "{broken").unwrap();

        assert_eq!(store.load().unwrap(), Database::default());

        // The next mutation replaces the broken document.
        store
            .update(|db| {
                db.users.push(user(1, "ana"));
                Ok::<_, StoreError>(())
            })
            .unwrap();
        assert_eq!(store.load().unwrap().users, vec![user(1, "ana")]);
    }

    #[test]
    fn test_next_id_saturates_at_max() {
        let mut db = Database::default();
        db.users.push(user(Id::MAX, "ana"));
        assert_eq!(Store::<MemoryStore>::next_id(&db), Id::MAX);
    }

    #[test]
    fn test_custom_key() {
        let kv = MemoryStore::new();
        let store = Store::with_key(kv.clone(), "other");
        store.save(&Database::default()).unwrap();
        assert!(kv.get("other").unwrap().is_some());
        assert!(kv.get(DEFAULT_KEY).unwrap().is_none());
        assert_eq!(store.quarantine_key(), "other.corrupt");
    }
}
