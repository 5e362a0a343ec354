//! Error types for the Mushaf local stores

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading or writing local stores
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error while reading or writing a backing file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted JSON could not be parsed
    ///
    /// Callers that load preferences or bookmarks recover from this by
    /// falling back to defaults; it is only surfaced for raw store access.
    #[error("Corrupt persisted JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The store directory could not be resolved or created
    #[error("Store directory unavailable: {0}")]
    Directory(String),
}
