//! Verse playback controller
//!
//! Owns the "what verse is currently audible" cursor and reacts to
//! playback-finished and user-navigation events. The cursor is always within
//! [1, total_verses] after any transition, and `is_playing` is false whenever
//! no source has been successfully loaded.

use crate::error::{Error, Result};
use crate::sink::AudioSink;
use tracing::{debug, info, warn};

/// Resolves a verse number to its audio URL for the active surah/reciter.
pub type VerseUrlResolver = Box<dyn Fn(u32) -> String + Send + Sync>;

/// Playback controller for one surah.
pub struct VersePlaybackController<S: AudioSink> {
    sink: S,
    resolve_url: VerseUrlResolver,
    current_verse: u32,
    total_verses: u32,
    /// Index of the highlighted word within the current verse, if any.
    /// Cleared on every verse change.
    word_index: Option<usize>,
    is_playing: bool,
    /// Mirrors the `auto_play_next` preference
    auto_advance: bool,
}

impl<S: AudioSink> VersePlaybackController<S> {
    /// Create a controller positioned at verse 1.
    pub fn new(
        sink: S,
        total_verses: u32,
        auto_advance: bool,
        resolve_url: VerseUrlResolver,
    ) -> Result<Self> {
        if total_verses == 0 {
            return Err(Error::NoVerses);
        }
        Ok(Self {
            sink,
            resolve_url,
            current_verse: 1,
            total_verses,
            word_index: None,
            is_playing: false,
            auto_advance,
        })
    }

    pub fn current_verse(&self) -> u32 {
        self.current_verse
    }

    pub fn total_verses(&self) -> u32 {
        self.total_verses
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn word_index(&self) -> Option<usize> {
        self.word_index
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// Mirror a change of the auto-play preference.
    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
    }

    /// Highlight a word within the current verse.
    pub fn set_word_index(&mut self, index: Option<usize>) {
        self.word_index = index;
    }

    /// Access the underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// User selects a verse. Resets the word cursor; does not start playback.
    ///
    /// If audio is already playing, the source is handed off to the new verse
    /// and playback continues. A failed handoff leaves the cursor on the old
    /// verse, not playing.
    pub async fn select_verse(&mut self, verse: u32) -> Result<()> {
        if verse < 1 || verse > self.total_verses {
            return Err(Error::VerseOutOfRange {
                verse,
                total: self.total_verses,
            });
        }
        if verse == self.current_verse {
            self.word_index = None;
            return Ok(());
        }

        if self.is_playing {
            self.handoff_to(verse).await?;
            if let Err(source) = self.sink.play().await {
                self.is_playing = false;
                return Err(Error::AudioLoad {
                    url: (self.resolve_url)(verse),
                    source,
                });
            }
        }

        self.current_verse = verse;
        self.word_index = None;
        debug!(verse, "Verse selected");
        Ok(())
    }

    /// Flip between playing and paused.
    ///
    /// Starting playback (re)loads the current verse's audio before playing;
    /// a load failure reverts to not-playing with the cursor unchanged.
    /// Returns the new playing state.
    pub async fn toggle_playback(&mut self) -> Result<bool> {
        if self.is_playing {
            if let Err(e) = self.sink.pause().await {
                warn!(error = %e, "Pause failed, treating playback as stopped");
            }
            self.is_playing = false;
            return Ok(false);
        }

        self.handoff_to(self.current_verse).await?;
        let url = (self.resolve_url)(self.current_verse);
        self.sink
            .play()
            .await
            .map_err(|source| Error::AudioLoad { url, source })?;
        self.is_playing = true;
        info!(verse = self.current_verse, "Playback started");
        Ok(true)
    }

    /// Stop playback and release the loaded source.
    pub async fn stop(&mut self) -> Result<()> {
        if let Err(e) = self.sink.stop_and_clear().await {
            warn!(error = %e, "Stop failed");
        }
        self.is_playing = false;
        Ok(())
    }

    /// The sink finished playing the current verse.
    ///
    /// Playback always stops first. With auto-advance on and more verses
    /// remaining, the cursor moves forward by exactly one and the next
    /// verse's audio is loaded and started. At the last verse playback simply
    /// stops: no wrap to verse 1, no spill into the next surah.
    ///
    /// Returns the verse now playing, or `None` if playback stopped.
    pub async fn on_playback_finished(&mut self) -> Result<Option<u32>> {
        self.is_playing = false;

        if !self.auto_advance || self.current_verse >= self.total_verses {
            debug!(verse = self.current_verse, "Playback finished, stopping");
            return Ok(None);
        }

        let next = self.current_verse + 1;
        self.current_verse = next;
        self.word_index = None;

        self.handoff_to(next).await?;
        let url = (self.resolve_url)(next);
        self.sink
            .play()
            .await
            .map_err(|source| Error::AudioLoad { url, source })?;
        self.is_playing = true;
        debug!(verse = next, "Auto-advanced to next verse");
        Ok(Some(next))
    }

    /// Step back one verse. No-op at verse 1 (returns false).
    pub async fn previous_verse(&mut self) -> Result<bool> {
        if self.current_verse <= 1 {
            return Ok(false);
        }
        let target = self.current_verse - 1;
        self.select_verse(target).await?;
        Ok(true)
    }

    /// Step forward one verse. No-op at the last verse (returns false).
    pub async fn next_verse(&mut self) -> Result<bool> {
        if self.current_verse >= self.total_verses {
            return Ok(false);
        }
        let target = self.current_verse + 1;
        self.select_verse(target).await?;
        Ok(true)
    }

    /// Tear down the old source and load `verse`. The clear always precedes
    /// the load, so the sink never holds two sources.
    async fn handoff_to(&mut self, verse: u32) -> Result<()> {
        if let Err(e) = self.sink.stop_and_clear().await {
            warn!(error = %e, "Clearing previous source failed");
        }

        let url = (self.resolve_url)(verse);
        match self.sink.load(&url).await {
            Ok(()) => Ok(()),
            Err(source) => {
                self.is_playing = false;
                Err(Error::AudioLoad { url, source })
            }
        }
    }
}
