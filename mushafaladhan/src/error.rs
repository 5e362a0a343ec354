//! Error types for the AlAdhan client

/// Result type alias for AlAdhan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when fetching or evaluating prayer data
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned an error status
    #[error("API error: {0}")]
    Api(String),

    /// Coordinates are missing or out of range
    #[error("Location unavailable: {0}")]
    Location(String),

    /// A timing string from the API could not be parsed as "HH:MM"
    #[error("Unparseable prayer time: {0}")]
    InvalidTime(String),

    /// The schedule is malformed (times not strictly increasing)
    #[error("Invalid prayer schedule: {0}")]
    InvalidSchedule(String),
}
