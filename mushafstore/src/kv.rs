//! Key-value store abstraction
//!
//! The reading core never touches ambient global state: everything that
//! persists goes through an injected [`KeyValueStore`]. Production code uses
//! [`FileStore`] (one file per key under a store directory); tests use
//! [`MemoryStore`].

use crate::error::{Error, Result};
use dirs::home_dir;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Default store directory name under the user's home
pub const DEFAULT_STORE_DIR: &str = ".mushaf";

/// A synchronous string key-value store.
///
/// Reads and writes are synchronous and brief; the environment is logically
/// single-threaded so no locking protocol is provided. Two processes writing
/// the same key can clobber each other — a documented limitation.
pub trait KeyValueStore {
    /// Get the value for a key, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set the value for a key, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// All keys currently present, in no particular order.
    ///
    /// [`FileStore`] returns sanitized key names; callers matching on a
    /// prefix must use one that sanitization leaves unchanged.
    fn keys(&self) -> Result<Vec<String>>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.lock().unwrap().keys().cloned().collect())
    }
}

/// File-backed store: one `{key}.json` file per key.
///
/// Keys are sanitized so that arbitrary cache keys (which may contain `/` or
/// `:`) map to valid file names.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            debug!(dir = %dir.display(), "Created store directory");
        }
        if !dir.is_dir() {
            return Err(Error::Directory(format!(
                "{} is not a directory",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    /// Create a store at the default location (`~/.mushaf`).
    pub fn default_location() -> Result<Self> {
        let home =
            home_dir().ok_or_else(|| Error::Directory("home directory not found".into()))?;
        Self::new(home.join(DEFAULT_STORE_DIR))
    }

    /// Store directory in use.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            })
            .collect();
        self.dir.join(format!("{}.json", safe))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        fs::write(&path, value)?;
        debug!(key, path = %path.display(), "Wrote store entry");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let name = entry?.file_name();
            if let Some(key) = name.to_string_lossy().strip_suffix(".json") {
                keys.push(key.to_string());
            }
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert!(store.get("k").unwrap().is_none());
    }

    #[test]
    fn file_store_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.set("quran-preferences", "{\"theme\":\"dark\"}").unwrap();
        assert_eq!(
            store.get("quran-preferences").unwrap().as_deref(),
            Some("{\"theme\":\"dark\"}")
        );

        store.remove("quran-preferences").unwrap();
        assert!(store.get("quran-preferences").unwrap().is_none());
    }

    #[test]
    fn file_store_sanitizes_keys() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.set("quran_cache_surah_1_{\"wbw\":true}", "x").unwrap();
        assert_eq!(
            store
                .get("quran_cache_surah_1_{\"wbw\":true}")
                .unwrap()
                .as_deref(),
            Some("x")
        );
    }

    #[test]
    fn keys_lists_present_entries() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        store.set("quran-preferences", "{}").unwrap();
        store.set("quran_cache_reciters", "{}").unwrap();

        let mut keys = store.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["quran-preferences", "quran_cache_reciters"]);
    }

    #[test]
    fn removing_absent_key_is_ok() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();
        assert!(store.remove("never-written").is_ok());
    }
}
