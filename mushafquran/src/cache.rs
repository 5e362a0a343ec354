//! Cached pass-through client
//!
//! Wraps [`QuranClient`] with a [`TtlCache`]: a fresh cache entry is returned
//! without touching the network, a miss fetches upstream and writes the
//! result back. Cache keys incorporate the fetch options, so changing
//! translation or word-by-word settings never serves stale content shaped for
//! other options.

use crate::client::{FetchOptions, QuranClient, SearchOptions};
use crate::error::Result;
use crate::models::{Reciter, SearchResults, Surah, Verse};
use mushafcache::TtlCache;
use mushafstore::KeyValueStore;
use tracing::debug;

/// Quran client with a TTL-bounded local cache in front of the API.
pub struct CachedQuranClient<S: KeyValueStore> {
    client: QuranClient,
    cache: TtlCache<S>,
}

impl<S: KeyValueStore> CachedQuranClient<S> {
    pub fn new(client: QuranClient, cache: TtlCache<S>) -> Self {
        Self { client, cache }
    }

    /// The wrapped uncached client.
    pub fn inner(&self) -> &QuranClient {
        &self.client
    }

    /// Fetch a surah, serving from cache when fresh.
    pub async fn fetch_surah(&self, number: u32, options: &FetchOptions) -> Result<Surah> {
        let key = format!("surah_{}_{}", number, options.cache_fragment());
        if let Some(hit) = self.cache.get::<Surah>(&key)? {
            debug!(surah = number, "Serving surah from cache");
            return Ok(hit);
        }

        let surah = self.client.fetch_surah(number, options).await?;
        self.cache.set(&key, &surah)?;
        Ok(surah)
    }

    /// Fetch a single verse, serving from cache when fresh.
    pub async fn fetch_verse(
        &self,
        surah: u32,
        verse: u32,
        options: &FetchOptions,
    ) -> Result<Verse> {
        let key = format!("verse_{}_{}_{}", surah, verse, options.cache_fragment());
        if let Some(hit) = self.cache.get::<Verse>(&key)? {
            debug!(surah, verse, "Serving verse from cache");
            return Ok(hit);
        }

        let fetched = self.client.fetch_verse(surah, verse, options).await?;
        self.cache.set(&key, &fetched)?;
        Ok(fetched)
    }

    /// List reciters, serving from cache when fresh.
    pub async fn fetch_reciters(&self) -> Result<Vec<Reciter>> {
        if let Some(hit) = self.cache.get::<Vec<Reciter>>("reciters")? {
            return Ok(hit);
        }

        let reciters = self.client.fetch_reciters().await?;
        self.cache.set("reciters", &reciters)?;
        Ok(reciters)
    }

    /// Search is interactive and never cached.
    pub async fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResults> {
        self.client.search(query, options).await
    }

    /// Drop the cached copy of one surah.
    pub fn invalidate_surah(&self, number: u32, options: &FetchOptions) -> Result<()> {
        let key = format!("surah_{}_{}", number, options.cache_fragment());
        self.cache.invalidate(&key)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RevelationType, SurahName};
    use mushafstore::MemoryStore;

    fn sample_surah() -> Surah {
        Surah {
            number: 36,
            name: SurahName {
                arabic: "يس".to_string(),
                en: "Ya-Sin".to_string(),
                bn: "Ya-Sin".to_string(),
            },
            verses_count: 83,
            revelation_type: RevelationType::Meccan,
            verses: Vec::new(),
            translated_name: "Ya Sin".to_string(),
        }
    }

    fn cached_client() -> CachedQuranClient<MemoryStore> {
        // Unroutable base URL: any network access in these tests is a bug
        let client = QuranClient::builder()
            .base_url("http://127.0.0.1:1")
            .build()
            .unwrap();
        CachedQuranClient::new(client, TtlCache::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn fresh_cache_entry_skips_the_network() {
        let cached = cached_client();
        let options = FetchOptions::default();
        let key = format!("surah_36_{}", options.cache_fragment());
        cached.cache.set(&key, &sample_surah()).unwrap();

        let surah = cached.fetch_surah(36, &options).await.unwrap();
        assert_eq!(surah, sample_surah());
    }

    #[tokio::test]
    async fn different_options_do_not_share_entries() {
        let cached = cached_client();
        let options = FetchOptions::default();
        let key = format!("surah_36_{}", options.cache_fragment());
        cached.cache.set(&key, &sample_surah()).unwrap();

        let mut other = FetchOptions::default();
        other.word_by_word = false;
        // Miss for the other options, so the unroutable fetch fails
        assert!(cached.fetch_surah(36, &other).await.is_err());
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let cached = cached_client();
        let options = FetchOptions::default();
        let key = format!("surah_36_{}", options.cache_fragment());
        cached.cache.set(&key, &sample_surah()).unwrap();
        cached.invalidate_surah(36, &options).unwrap();

        assert!(cached.fetch_surah(36, &options).await.is_err());
    }
}
