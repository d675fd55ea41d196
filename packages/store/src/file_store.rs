//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in
//! its own file. It is used on desktop to retain the database across app
//! restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── receitaHubDB.json          # the database document
//! └── receitaHubDB.corrupt.json  # last document that failed to parse, if any
//! ```
//!
//! ## Platform data directories
//!
//! The desktop build uses `ui::data_dir()`, which joins `receitahub` onto
//! `dirs::data_dir()`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/receitahub/` |
//! | Linux | `~/.local/share/receitahub/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\receitahub\` |

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::db::KeyValueStore;
use crate::error::StoreError;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        // Temp file renamed into place; readers never see a partial document.
        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}
