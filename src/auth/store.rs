//! Persisted session storage.
//!
//! [`SessionStore`] is the read side of a key/value store shaped like browser
//! local storage. Lookups are synchronous; a store that cannot be read behaves
//! as if the key were absent.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::defaults;

/// Read access to persisted session entries.
pub trait SessionStore: Send + Sync {
    /// Raw value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
}

/// In-process session store.
///
/// The owning auth component writes entries with [`set_item`](Self::set_item);
/// the client only reads them.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item(&self, key: impl Into<String>, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.into(), value.into());
        }
    }

    pub fn remove_item(&self, key: &str) -> Option<String> {
        self.entries.write().ok()?.remove(key)
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }
}

/// Directory-backed session store: one `<key>.json` file per entry.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`, or `None` when the key cannot name a file inside
    /// the store directory.
    pub fn path_for(&self, key: &str) -> Option<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return None;
        }
        Some(
            self.dir
                .join(format!("{key}.{}", defaults::session::FILE_EXTENSION)),
        )
    }
}

impl SessionStore for FileSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::debug!(target: "api_fetch::auth", path=%path.display(), err=%e, "session file unreadable");
                None
            }
        }
    }
}
