//! Error types for the TTL cache

/// Result type alias for cache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the cache
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Backing store failed
    #[error("Store error: {0}")]
    Store(#[from] mushafstore::Error),

    /// A value could not be serialized for caching
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
