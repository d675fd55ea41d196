//! # Client configuration — `receitahub.toml`
//!
//! Optional TOML file read by the desktop build from its data directory
//! (`<data_dir>/receitahub/receitahub.toml`). The web build always uses the
//! defaults.
//!
//! ## Structure
//!
//! ```toml
//! [storage]
//! key = "receitaHubDB"    # slot holding the database document
//!
//! [images]
//! max_bytes = 5242880     # largest accepted recipe picture
//! ```
//!
//! All structs derive `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

use crate::db::DEFAULT_KEY;

/// Top-level configuration stored in `receitahub.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceitaHubConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub images: ImagesConfig,
}

/// Where the database document lives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    DEFAULT_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { key: default_key() }
    }
}

/// Limits for recipe pictures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

fn default_max_bytes() -> usize {
    5 * 1024 * 1024
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
        }
    }
}

impl ReceitaHubConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "receitahub.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
