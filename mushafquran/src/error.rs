//! Error types for the Quran.com client

/// Result type alias for Quran content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when fetching Quran content
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// API returned an error status
    #[error("API error: {0}")]
    Api(String),

    /// Chapter number outside [1, 114]
    #[error("Surah not found: {0}")]
    NotFound(u32),

    /// Verse reference is malformed or out of range
    #[error("Invalid verse reference: {0}")]
    InvalidVerse(String),

    /// Reading-position route could not be parsed
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Cache layer failed
    #[cfg(feature = "cache")]
    #[error("Cache error: {0}")]
    Cache(#[from] mushafcache::Error),
}
