//! HTTP client for the Quran.com content API
//!
//! This module provides a stateless client for chapter, verse, and search
//! lookups. Responses are not cached here; the [`crate::cache`] wrapper adds
//! the 24-hour freshness window on top.
//!
//! # Example
//!
//! ```no_run
//! use mushafquran::{FetchOptions, QuranClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QuranClient::new()?;
//!     let surah = client.fetch_surah(36, &FetchOptions::default()).await?;
//!     println!("{} has {} verses", surah.name.en, surah.verses_count);
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::{
    ChapterResponse, Reciter, SearchResponse, SearchResults, Surah, Verse, VerseByKeyResponse,
    VersesResponse,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default Quran.com API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.quran.com/api/v4";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mushaf/0.1 (mushafquran)";

/// Number of chapters in the Quran
pub const SURAH_COUNT: u32 = 114;

/// Page size used when walking the paginated verses endpoint
const VERSES_PER_PAGE: u32 = 50;

/// Content options for a surah or verse fetch.
///
/// Serialized into cache keys, so two fetches with the same options share a
/// cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchOptions {
    pub translations_en: Vec<String>,
    pub translations_bn: Vec<String>,
    pub tafsirs_en: Vec<String>,
    pub tafsirs_bn: Vec<String>,
    pub word_by_word: bool,
    /// Recitation id for the per-verse audio attached by the API
    pub reciter: Option<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            translations_en: vec!["en.sahih".to_string()],
            translations_bn: vec!["bn.bengali".to_string()],
            tafsirs_en: vec!["en.tafsir-ibn-kathir".to_string()],
            tafsirs_bn: vec!["bn.bengali-zakaria".to_string()],
            word_by_word: true,
            reciter: None,
        }
    }
}

impl FetchOptions {
    /// All requested translation ids, English before Bengali.
    pub fn translation_ids(&self) -> Vec<&str> {
        self.translations_en
            .iter()
            .chain(self.translations_bn.iter())
            .map(String::as_str)
            .collect()
    }

    /// All requested tafsir ids, English before Bengali.
    pub fn tafsir_ids(&self) -> Vec<&str> {
        self.tafsirs_en
            .iter()
            .chain(self.tafsirs_bn.iter())
            .map(String::as_str)
            .collect()
    }

    /// Stable fragment identifying these options inside a cache key.
    pub fn cache_fragment(&self) -> String {
        // Field order of the struct is the key format; serialization of a
        // plain struct is deterministic.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Options for verse search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub language: String,
    pub page: u32,
    pub size: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            page: 1,
            size: 20,
        }
    }
}

/// Quran.com HTTP client
#[derive(Debug, Clone)]
pub struct QuranClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl QuranClient {
    /// Create a new client with default settings
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a chapter with all of its verses.
    ///
    /// Combines the chapter-info endpoint with the paginated verses-by-chapter
    /// endpoint, walking every page. Numbers outside [1, 114] fail with
    /// [`Error::NotFound`] before any network I/O.
    pub async fn fetch_surah(&self, number: u32, options: &FetchOptions) -> Result<Surah> {
        validate_surah_number(number)?;

        let chapter = self.fetch_chapter_info(number).await?;
        let verses = self.fetch_chapter_verses(number, options).await?;

        debug!(surah = number, verses = verses.len(), "Fetched surah");
        Ok(chapter.into_surah(verses))
    }

    /// Fetch a single verse by its "surah:verse" key.
    pub async fn fetch_verse(
        &self,
        surah: u32,
        verse: u32,
        options: &FetchOptions,
    ) -> Result<Verse> {
        validate_surah_number(surah)?;
        if verse < 1 {
            return Err(Error::InvalidVerse(format!("{surah}:{verse}")));
        }

        let mut url = Url::parse(&format!(
            "{}/verses/by_key/{}:{}",
            self.base_url, surah, verse
        ))?;
        self.append_verse_params(&mut url, options);

        let body: VerseByKeyResponse = self.get_json(url).await?;
        Ok(body.verse.into_verse())
    }

    /// List the known everyayah reciters.
    ///
    /// The list is static: these are the folders the audio URL scheme
    /// addresses, so in practice it never expires.
    pub async fn fetch_reciters(&self) -> Result<Vec<Reciter>> {
        Ok(vec![
            Reciter::new("Alafasy_128kbps", "Mishary Rashid Alafasy", "Murattal"),
            Reciter::new(
                "Abdul_Basit_Mujawwad_128kbps",
                "Abdul Basit (Mujawwad)",
                "Mujawwad",
            ),
            Reciter::new(
                "Abdul_Basit_Murattal_192kbps",
                "Abdul Basit (Murattal)",
                "Murattal",
            ),
            Reciter::new("Husary_128kbps", "Mahmoud Khalil Al-Husary", "Murattal"),
            Reciter::new(
                "Minshawi_Mujawwad_192kbps",
                "Mohamed Siddiq El-Minshawi (Mujawwad)",
                "Mujawwad",
            ),
            Reciter::new(
                "Minshawi_Murattal_128kbps",
                "Mohamed Siddiq El-Minshawi (Murattal)",
                "Murattal",
            ),
        ])
    }

    /// Full-text search across translations.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResults> {
        let mut url = Url::parse(&format!("{}/search", self.base_url))?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("language", &options.language)
            .append_pair("page", &options.page.to_string())
            .append_pair("size", &options.size.to_string());

        let body: SearchResponse = self.get_json(url).await?;
        Ok(SearchResults {
            verses: body
                .search
                .results
                .into_iter()
                .map(|hit| crate::models::SearchHit {
                    verse_key: hit.verse_key,
                    text: hit.text,
                })
                .collect(),
            total: body.search.total_results,
            current_page: body.search.current_page,
        })
    }

    async fn fetch_chapter_info(&self, number: u32) -> Result<crate::models::RawChapter> {
        let mut url = Url::parse(&format!("{}/chapters/{}", self.base_url, number))?;
        url.query_pairs_mut().append_pair("language", "en");

        let body: ChapterResponse = self.get_json(url).await?;
        Ok(body.chapter)
    }

    async fn fetch_chapter_verses(
        &self,
        number: u32,
        options: &FetchOptions,
    ) -> Result<Vec<Verse>> {
        let mut verses = Vec::new();
        let mut page = 1u32;

        loop {
            let mut url = Url::parse(&format!(
                "{}/verses/by_chapter/{}",
                self.base_url, number
            ))?;
            self.append_verse_params(&mut url, options);
            url.query_pairs_mut()
                .append_pair("per_page", &VERSES_PER_PAGE.to_string())
                .append_pair("page", &page.to_string());

            let body: VersesResponse = self.get_json(url).await?;
            verses.extend(body.verses.into_iter().map(|v| v.into_verse()));

            match body.pagination.and_then(|p| p.next_page) {
                Some(next) => page = next,
                None => break,
            }
        }

        Ok(verses)
    }

    fn append_verse_params(&self, url: &mut Url, options: &FetchOptions) {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("language", "en")
            .append_pair("words", if options.word_by_word { "true" } else { "false" })
            .append_pair("translations", &options.translation_ids().join(","))
            .append_pair("tafsirs", &options.tafsir_ids().join(","))
            .append_pair("fields", "text_uthmani,verse_number");
        if let Some(reciter) = &options.reciter {
            pairs.append_pair("audio", reciter);
        }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: Url) -> Result<T> {
        debug!(%url, "Fetching");
        let response = self.client.get(url).timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api(format!("API returned status: {status}")));
        }

        Ok(response.json().await?)
    }
}

pub(crate) fn validate_surah_number(number: u32) -> Result<()> {
    if number < 1 || number > SURAH_COUNT {
        return Err(Error::NotFound(number));
    }
    Ok(())
}

/// Builder for configuring a QuranClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<QuranClient> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?,
        };

        Ok(QuranClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = ClientBuilder::default();
        assert_eq!(builder.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            builder.timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn default_options_request_both_languages() {
        let options = FetchOptions::default();
        assert_eq!(options.translation_ids(), vec!["en.sahih", "bn.bengali"]);
        assert!(options.word_by_word);
    }

    #[test]
    fn verse_params_carry_translations_and_tafsirs() {
        let client = QuranClient::new().unwrap();
        let mut url = Url::parse("https://api.quran.com/api/v4/verses/by_chapter/36").unwrap();
        client.append_verse_params(&mut url, &FetchOptions::default());

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("translations".into(), "en.sahih,bn.bengali".into())));
        assert!(pairs.contains(&(
            "tafsirs".into(),
            "en.tafsir-ibn-kathir,bn.bengali-zakaria".into()
        )));
        assert!(pairs.contains(&("words".into(), "true".into())));
    }

    #[test]
    fn cache_fragment_distinguishes_options() {
        let a = FetchOptions::default();
        let mut b = FetchOptions::default();
        b.word_by_word = false;
        assert_ne!(a.cache_fragment(), b.cache_fragment());
        assert_eq!(a.cache_fragment(), FetchOptions::default().cache_fragment());
    }

    #[tokio::test]
    async fn invalid_surah_number_fails_before_network() {
        let client = QuranClient::builder()
            .base_url("http://127.0.0.1:1") // would fail if contacted
            .build()
            .unwrap();

        assert!(matches!(
            client.fetch_surah(0, &FetchOptions::default()).await,
            Err(Error::NotFound(0))
        ));
        assert!(matches!(
            client.fetch_surah(115, &FetchOptions::default()).await,
            Err(Error::NotFound(115))
        ));
        assert!(matches!(
            client.fetch_verse(200, 1, &FetchOptions::default()).await,
            Err(Error::NotFound(200))
        ));
        assert!(matches!(
            client.fetch_verse(36, 0, &FetchOptions::default()).await,
            Err(Error::InvalidVerse(_))
        ));
    }

    #[tokio::test]
    async fn reciter_list_is_stable_and_addressable() {
        let client = QuranClient::new().unwrap();
        let reciters = client.fetch_reciters().await.unwrap();
        assert_eq!(reciters.len(), 6);
        assert_eq!(reciters[0].identifier, "Alafasy_128kbps");
        assert!(reciters.iter().all(|r| r.available));
    }

    // ========================================================================
    // Integration tests (real API calls)
    //
    // Run with: cargo test -p mushafquran -- --ignored
    // ========================================================================

    #[tokio::test]
    #[ignore = "Integration test - calls real Quran.com API"]
    async fn live_fetch_al_fatihah() {
        let client = QuranClient::new().expect("Failed to create client");
        let surah = client
            .fetch_surah(1, &FetchOptions::default())
            .await
            .expect("Failed to fetch surah");

        assert_eq!(surah.number, 1);
        assert_eq!(surah.verses_count, 7);
        assert_eq!(surah.verses.len(), 7);
        assert!(!surah.verses[0].text_uthmani.is_empty());
    }

    #[tokio::test]
    #[ignore = "Integration test - calls real Quran.com API"]
    async fn live_fetch_long_surah_walks_pagination() {
        let client = QuranClient::new().expect("Failed to create client");
        let surah = client
            .fetch_surah(2, &FetchOptions::default())
            .await
            .expect("Failed to fetch surah");

        // Al-Baqarah spans multiple pages at any page size
        assert_eq!(surah.verses.len(), 286);
    }

    #[tokio::test]
    #[ignore = "Integration test - calls real Quran.com API"]
    async fn live_fetch_verse_by_key() {
        let client = QuranClient::new().expect("Failed to create client");
        let verse = client
            .fetch_verse(36, 12, &FetchOptions::default())
            .await
            .expect("Failed to fetch verse");

        assert_eq!(verse.verse_key, "36:12");
        assert!(!verse.translations.en.text.is_empty());
    }

    #[tokio::test]
    #[ignore = "Integration test - calls real Quran.com API"]
    async fn live_search() {
        let client = QuranClient::new().expect("Failed to create client");
        let results = client
            .search("mercy", &SearchOptions::default())
            .await
            .expect("Search failed");

        assert!(results.total > 0);
        assert!(!results.verses.is_empty());
    }
}
