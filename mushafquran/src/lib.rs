//! Quran.com content client for Mushaf
//!
//! This crate fetches chapters, verses, translations, and word-by-word
//! breakdowns from the Quran.com v4 API, maps them into stable DTOs, and
//! builds per-verse recitation audio URLs for the everyayah.com hosting
//! scheme. With the default `cache` feature, [`CachedQuranClient`] fronts
//! the API with a 24-hour TTL cache over any [`mushafstore`] backend.
//!
//! # Example
//!
//! ```no_run
//! use mushafquran::{verse_audio_url, FetchOptions, QuranClient, ReadingPosition};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let position = ReadingPosition::parse("/surah/36/12")?;
//!     let client = QuranClient::new()?;
//!     let verse = client
//!         .fetch_verse(position.surah, position.verse, &FetchOptions::default())
//!         .await?;
//!
//!     let url = verse_audio_url("Alafasy_128kbps", position.surah, position.verse)?;
//!     println!("{}\n{}", verse.translations.en.text, url);
//!     Ok(())
//! }
//! ```

pub mod audio;
#[cfg(feature = "cache")]
pub mod cache;
pub mod client;
pub mod error;
pub mod models;
pub mod position;

// Re-exports
pub use audio::{verse_audio_url, EVERYAYAH_BASE_URL};
#[cfg(feature = "cache")]
pub use cache::CachedQuranClient;
pub use client::{ClientBuilder, FetchOptions, QuranClient, SearchOptions, SURAH_COUNT};
pub use error::{Error, Result};
pub use models::{
    Reciter, RevelationType, SearchHit, SearchResults, Surah, SurahName, TafsirPair, TafsirText,
    TranslationPair, TranslationText, Verse, VerseAudio, WordByWord,
};
pub use position::ReadingPosition;
