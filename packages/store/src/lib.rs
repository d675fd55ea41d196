pub mod accounts;
pub mod config;
pub mod db;
pub mod error;
pub mod file_store;
pub mod image;
pub mod models;
pub mod recipes;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use accounts::{current_user, login, logout, register};
pub use config::ReceitaHubConfig;
pub use db::{KeyValueStore, Store, DEFAULT_KEY};
pub use error::{AppError, Field, StoreError};
pub use file_store::FileStore;
pub use models::{Database, Id, Recipe, RecipeDraft, Registration, User};
pub use recipes::{get_recipe, list_recipes, publish_recipe};
