//! Error types for playback control

/// Result type alias for playback operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the audio sink
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The media source could not be loaded
    #[error("Failed to load media source: {0}")]
    Load(String),

    /// The sink rejected a transport command
    #[error("Transport command failed: {0}")]
    Transport(String),
}

/// Errors raised by the playback controller
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The resolved audio URL could not be loaded or played.
    ///
    /// The controller reverts to not-playing and leaves the cursor where it
    /// was; the caller decides whether to surface a retry.
    #[error("Audio load failed for {url}: {source}")]
    AudioLoad {
        url: String,
        #[source]
        source: SinkError,
    },

    /// A requested verse is outside [1, total_verses]
    #[error("Verse {verse} out of range (1..={total})")]
    VerseOutOfRange { verse: u32, total: u32 },

    /// The controller was created for an empty surah
    #[error("Cannot control playback over zero verses")]
    NoVerses,
}
