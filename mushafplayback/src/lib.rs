//! Per-verse playback control for Mushaf
//!
//! This crate owns the playback-progression state machine: the verse cursor,
//! the play/pause toggle, auto-advance on finished audio, and the atomic
//! handoff of the single audio resource between verses.
//!
//! The audio output itself sits behind the [`AudioSink`] trait so the
//! controller can drive a real media element or the recording [`NullSink`]
//! used by tests.
//!
//! # Example
//!
//! ```
//! use mushafplayback::{NullSink, VersePlaybackController};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut controller = VersePlaybackController::new(
//!     NullSink::new(),
//!     83,    // verses in the surah
//!     true,  // auto-advance
//!     Box::new(|verse| {
//!         format!("https://everyayah.com/data/Alafasy_128kbps/036_{verse:03}.mp3")
//!     }),
//! )?;
//!
//! controller.toggle_playback().await?;
//! controller.on_playback_finished().await?; // advances to verse 2
//! assert_eq!(controller.current_verse(), 2);
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod error;
pub mod sink;

// Re-exports
pub use controller::{VersePlaybackController, VerseUrlResolver};
pub use error::{Error, Result, SinkError};
pub use sink::{AudioSink, NullSink, SinkCall};
