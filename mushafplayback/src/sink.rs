//! Audio sink abstraction
//!
//! The audio element is a singleton external resource: at most one verse's
//! audio is loaded at a time. [`AudioSink`] is the seam the controller drives;
//! the handoff contract is that `stop_and_clear` is always issued before
//! loading a new source, so two sources are never active together.

use crate::error::SinkError;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Transport seam to the single audio output.
#[async_trait]
pub trait AudioSink: Send + Sync {
    /// Resolve and load a media source. Completes only once the source is
    /// ready to play.
    async fn load(&self, url: &str) -> Result<(), SinkError>;

    /// Start or resume playback of the loaded source.
    async fn play(&self) -> Result<(), SinkError>;

    /// Pause playback, keeping the source loaded.
    async fn pause(&self) -> Result<(), SinkError>;

    /// Stop playback and clear the loaded source.
    async fn stop_and_clear(&self) -> Result<(), SinkError>;
}

/// Calls observed by [`NullSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Load(String),
    Play,
    Pause,
    StopAndClear,
}

/// Recording sink for tests and dry runs: every call is appended to a log,
/// and the next load or play can be made to fail.
#[derive(Debug, Default)]
pub struct NullSink {
    calls: Mutex<Vec<SinkCall>>,
    fail_next_load: AtomicBool,
    fail_next_play: AtomicBool,
}

impl NullSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `load` call fail with a [`SinkError::Load`].
    pub fn fail_next_load(&self) {
        self.fail_next_load.store(true, Ordering::SeqCst);
    }

    /// Make the next `play` call fail with a [`SinkError::Transport`].
    pub fn fail_next_play(&self) {
        self.fail_next_play.store(true, Ordering::SeqCst);
    }

    /// Snapshot of all calls so far.
    pub fn calls(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: SinkCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl AudioSink for NullSink {
    async fn load(&self, url: &str) -> Result<(), SinkError> {
        self.record(SinkCall::Load(url.to_string()));
        if self.fail_next_load.swap(false, Ordering::SeqCst) {
            return Err(SinkError::Load(url.to_string()));
        }
        Ok(())
    }

    async fn play(&self) -> Result<(), SinkError> {
        self.record(SinkCall::Play);
        if self.fail_next_play.swap(false, Ordering::SeqCst) {
            return Err(SinkError::Transport("play".to_string()));
        }
        Ok(())
    }

    async fn pause(&self) -> Result<(), SinkError> {
        self.record(SinkCall::Pause);
        Ok(())
    }

    async fn stop_and_clear(&self) -> Result<(), SinkError> {
        self.record(SinkCall::StopAndClear);
        Ok(())
    }
}
