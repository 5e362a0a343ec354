//! TTL-bounded JSON cache for remote API responses
//!
//! Entries are stored through any [`KeyValueStore`] as a JSON envelope
//! `{value, timestamp}` under a `quran_cache_` key prefix. A read within the
//! freshness window returns the stored value; an expired or corrupt entry is
//! removed and reads as a miss. The default window is 24 hours.
//!
//! The expiry check takes the evaluation instant explicitly so cache behavior
//! is deterministic under test; [`TtlCache::get`] samples the system clock
//! for callers that don't care.
//!
//! # Example
//!
//! ```no_run
//! use mushafcache::TtlCache;
//! use mushafstore::MemoryStore;
//!
//! # fn main() -> mushafcache::Result<()> {
//! let cache = TtlCache::new(MemoryStore::new());
//! cache.set("reciters", &vec!["Alafasy_128kbps".to_string()])?;
//! let hit: Option<Vec<String>> = cache.get("reciters")?;
//! assert!(hit.is_some());
//! # Ok(())
//! # }
//! ```

use chrono::Utc;
use mushafstore::KeyValueStore;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub mod error;

pub use error::{Error, Result};

/// Key prefix for all cache entries
pub const CACHE_PREFIX: &str = "quran_cache_";

/// Default freshness window: 24 hours
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Stored envelope: the cached value plus its write time
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    value: T,
    /// Milliseconds since epoch
    timestamp: i64,
}

/// TTL cache over an injected key-value backend.
pub struct TtlCache<S: KeyValueStore> {
    store: S,
    ttl: Duration,
}

impl<S: KeyValueStore> TtlCache<S> {
    /// Create a cache with the default 24-hour TTL.
    pub fn new(store: S) -> Self {
        Self::with_ttl(store, DEFAULT_TTL)
    }

    /// Create a cache with a custom TTL.
    pub fn with_ttl(store: S, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Freshness window in use.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Store a value, stamped now.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.set_at(key, value, Utc::now().timestamp_millis())
    }

    /// Store a value with an explicit write time (milliseconds since epoch).
    pub fn set_at<T: Serialize>(&self, key: &str, value: &T, now_ms: i64) -> Result<()> {
        let envelope = Envelope {
            value,
            timestamp: now_ms,
        };
        let json = serde_json::to_string(&envelope)?;
        self.store.set(&self.cache_key(key), &json)?;
        debug!(key, "Cached value");
        Ok(())
    }

    /// Read a value if present and fresh, evaluated against the system clock.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.get_at(key, Utc::now().timestamp_millis())
    }

    /// Read a value if present and fresh at `now_ms`.
    ///
    /// Expired entries are removed. A corrupt envelope is treated as absent
    /// (and removed), never as an error.
    pub fn get_at<T: DeserializeOwned>(&self, key: &str, now_ms: i64) -> Result<Option<T>> {
        let cache_key = self.cache_key(key);
        let Some(raw) = self.store.get(&cache_key)? else {
            return Ok(None);
        };

        let envelope: Envelope<T> = match serde_json::from_str(&raw) {
            Ok(e) => e,
            Err(e) => {
                warn!(key, error = %e, "Corrupt cache envelope, discarding");
                self.store.remove(&cache_key)?;
                return Ok(None);
            }
        };

        let age_ms = now_ms.saturating_sub(envelope.timestamp);
        if age_ms >= self.ttl.as_millis() as i64 {
            debug!(key, age_ms, "Cache entry expired");
            self.store.remove(&cache_key)?;
            return Ok(None);
        }

        debug!(key, age_ms, "Cache hit");
        Ok(Some(envelope.value))
    }

    /// Remove a single entry.
    pub fn invalidate(&self, key: &str) -> Result<()> {
        self.store.remove(&self.cache_key(key))?;
        Ok(())
    }

    /// Remove every cache entry, leaving other keys in the store untouched.
    pub fn clear(&self) -> Result<()> {
        for key in self.store.keys()? {
            if key.starts_with(CACHE_PREFIX) {
                self.store.remove(&key)?;
            }
        }
        Ok(())
    }

    fn cache_key(&self, key: &str) -> String {
        format!("{}{}", CACHE_PREFIX, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mushafstore::MemoryStore;

    #[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
    struct Payload {
        id: String,
        count: u32,
    }

    fn payload() -> Payload {
        Payload {
            id: "surah_36".to_string(),
            count: 83,
        }
    }

    #[test]
    fn set_then_get_within_ttl_is_deep_equal() {
        let cache = TtlCache::new(MemoryStore::new());
        cache.set_at("k", &payload(), 1_000).unwrap();

        let hit: Option<Payload> = cache.get_at("k", 2_000).unwrap();
        assert_eq!(hit, Some(payload()));
    }

    #[test]
    fn expired_entry_reads_absent() {
        let ttl = Duration::from_secs(60);
        let cache = TtlCache::with_ttl(MemoryStore::new(), ttl);
        cache.set_at("k", &payload(), 0).unwrap();

        // One millisecond past the window
        let miss: Option<Payload> = cache.get_at("k", 60_001).unwrap();
        assert!(miss.is_none());

        // Entry was dropped, so it stays a miss even before the window
        let again: Option<Payload> = cache.get_at("k", 1).unwrap();
        assert!(again.is_none());
    }

    #[test]
    fn boundary_age_is_expired() {
        let ttl = Duration::from_secs(60);
        let cache = TtlCache::with_ttl(MemoryStore::new(), ttl);
        cache.set_at("k", &payload(), 0).unwrap();

        let miss: Option<Payload> = cache.get_at("k", 60_000).unwrap();
        assert!(miss.is_none());
    }

    #[test]
    fn corrupt_envelope_is_a_miss() {
        let kv = MemoryStore::new();
        kv.set("quran_cache_k", "{nope").unwrap();

        let cache = TtlCache::new(kv);
        let miss: Option<Payload> = cache.get_at("k", 0).unwrap();
        assert!(miss.is_none());
    }

    #[test]
    fn invalidate_removes_entry() {
        let cache = TtlCache::new(MemoryStore::new());
        cache.set_at("k", &payload(), 0).unwrap();
        cache.invalidate("k").unwrap();

        let miss: Option<Payload> = cache.get_at("k", 1).unwrap();
        assert!(miss.is_none());
    }

    #[test]
    fn clear_spares_non_cache_keys() {
        let kv = MemoryStore::new();
        kv.set("quran-preferences", "{}").unwrap();

        let cache = TtlCache::new(kv);
        cache.set_at("a", &payload(), 0).unwrap();
        cache.set_at("b", &payload(), 0).unwrap();
        cache.clear().unwrap();

        let a: Option<Payload> = cache.get_at("a", 1).unwrap();
        let b: Option<Payload> = cache.get_at("b", 1).unwrap();
        assert!(a.is_none() && b.is_none());
        assert!(cache.store.get("quran-preferences").unwrap().is_some());
    }

    #[test]
    fn keys_are_prefixed() {
        let kv = MemoryStore::new();
        let cache = TtlCache::new(kv);
        cache.set_at("reciters", &payload(), 0).unwrap();
        // Visible through the raw store under the prefixed key only
        // (the cache owns its namespace within the shared store).
        let raw = cache.store.get("quran_cache_reciters").unwrap();
        assert!(raw.is_some());
        assert!(cache.store.get("reciters").unwrap().is_none());
    }
}
