//! Local persistence for Mushaf
//!
//! This crate provides the persistence contracts the reading core depends on:
//!
//! - [`KeyValueStore`]: an injected string key-value abstraction with a
//!   file-backed implementation ([`FileStore`]) and an in-memory fake
//!   ([`MemoryStore`]) for tests
//! - [`PreferenceStore`]: the user preference record with defaults and
//!   merge-on-load semantics
//! - [`BookmarkStore`]: the bookmark list with toggle semantics
//!
//! # Example
//!
//! ```no_run
//! use mushafstore::{FileStore, PreferenceStore, BookmarkStore};
//!
//! # fn main() -> mushafstore::Result<()> {
//! let prefs = PreferenceStore::new(FileStore::default_location()?);
//! let mut settings = prefs.load()?;
//! prefs.set_auto_play_next(&mut settings, false)?;
//!
//! let bookmarks = BookmarkStore::new(FileStore::default_location()?);
//! bookmarks.toggle(2, 255)?;
//! # Ok(())
//! # }
//! ```

pub mod bookmarks;
pub mod error;
pub mod kv;
pub mod preferences;

// Re-exports
pub use bookmarks::{Bookmark, BookmarkStore, Toggled, BOOKMARKS_KEY};
pub use error::{Error, Result};
pub use kv::{FileStore, KeyValueStore, MemoryStore, DEFAULT_STORE_DIR};
pub use preferences::{
    FontSizes, LanguageSelections, PreferenceStore, Preferences, Theme, UiLanguage,
    PREFERENCES_KEY,
};
