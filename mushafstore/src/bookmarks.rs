//! Bookmark persistence
//!
//! Bookmarks are stored as one JSON array under a single key and saved as a
//! full overwrite: callers read-modify-write the whole list. There is no
//! atomic single-item update and no conflict resolution between concurrent
//! writers; the last save wins.

use crate::error::Result;
use crate::kv::KeyValueStore;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

/// Storage key for the bookmark list
pub const BOOKMARKS_KEY: &str = "quran-bookmarks";

/// A bookmarked verse position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Opaque unique id, assigned at creation
    pub id: String,
    pub surah_number: u32,
    pub verse_number: u32,
    /// Creation time, milliseconds since epoch
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl Bookmark {
    /// Create a bookmark for a verse, stamped now.
    pub fn new(surah_number: u32, verse_number: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            surah_number,
            verse_number,
            timestamp: Utc::now().timestamp_millis(),
            note: None,
            tags: None,
        }
    }
}

/// Outcome of a bookmark toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggled {
    /// A bookmark was added; carries its id
    Added(String),
    /// The existing bookmark for that verse was removed
    Removed,
}

/// Bookmark store over an injected key-value backend.
pub struct BookmarkStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> BookmarkStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load all bookmarks. Absent or corrupt data yields an empty list.
    pub fn load(&self) -> Result<Vec<Bookmark>> {
        let Some(raw) = self.store.get(BOOKMARKS_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(list) => Ok(list),
            Err(e) => {
                warn!(error = %e, "Corrupt bookmark list, starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Persist the full list (idempotent overwrite).
    pub fn save(&self, bookmarks: &[Bookmark]) -> Result<()> {
        let json = serde_json::to_string_pretty(bookmarks)?;
        self.store.set(BOOKMARKS_KEY, &json)?;
        debug!(count = bookmarks.len(), "Saved bookmarks");
        Ok(())
    }

    /// Toggle the bookmark for a verse: add if absent, remove if present.
    ///
    /// The relative order of untouched entries is preserved, so toggling the
    /// same verse twice restores the original list.
    pub fn toggle(&self, surah_number: u32, verse_number: u32) -> Result<Toggled> {
        let mut bookmarks = self.load()?;

        let existing = bookmarks
            .iter()
            .position(|b| b.surah_number == surah_number && b.verse_number == verse_number);

        let outcome = match existing {
            Some(index) => {
                bookmarks.remove(index);
                Toggled::Removed
            }
            None => {
                let bookmark = Bookmark::new(surah_number, verse_number);
                let id = bookmark.id.clone();
                bookmarks.push(bookmark);
                Toggled::Added(id)
            }
        };

        self.save(&bookmarks)?;
        Ok(outcome)
    }

    /// Whether a verse is currently bookmarked.
    pub fn is_bookmarked(&self, surah_number: u32, verse_number: u32) -> Result<bool> {
        Ok(self
            .load()?
            .iter()
            .any(|b| b.surah_number == surah_number && b.verse_number == verse_number))
    }
}
