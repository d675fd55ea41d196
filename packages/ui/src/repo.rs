//! Shared store constructor for all platforms.
//!
//! Returns a [`store::Store`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Desktop** (native): JSON files via [`store::FileStore`] under the data directory

use store::ReceitaHubConfig;

/// Directory holding the desktop database and `receitahub.toml`.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("receitahub")
}

/// Read `receitahub.toml` from the data directory, falling back to defaults.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub fn load_config() -> ReceitaHubConfig {
    let path = data_dir().join(ReceitaHubConfig::filename());
    let Ok(text) = std::fs::read_to_string(&path) else {
        return ReceitaHubConfig::default();
    };
    ReceitaHubConfig::from_toml(&text).unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
        ReceitaHubConfig::default()
    })
}

/// The web build has no config file.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub fn load_config() -> ReceitaHubConfig {
    ReceitaHubConfig::default()
}

/// Create a platform-appropriate store.
pub fn make_store() -> store::Store<impl store::KeyValueStore> {
    let key = load_config().storage.key;
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Store::with_key(store::LocalStorage::new(), key)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::Store::with_key(store::FileStore::new(data_dir()), key)
    }
}
