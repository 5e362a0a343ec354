//! Recitation audio URL scheme
//!
//! Every reciter on everyayah.com exposes one MP3 per verse under a folder
//! named after the reciter, addressed by zero-padded surah and verse numbers.

use crate::error::{Error, Result};

/// Base URL for everyayah.com recitation audio
pub const EVERYAYAH_BASE_URL: &str = "https://everyayah.com/data";

/// Build the audio URL for one verse of one reciter.
///
/// The path shape is `{folder}/{surah:03}_{verse:03}.mp3`, e.g.
/// `Alafasy_128kbps/036_012.mp3` for surah 36 verse 12.
pub fn verse_audio_url(reciter_folder: &str, surah: u32, verse: u32) -> Result<String> {
    crate::client::validate_surah_number(surah)?;
    if verse < 1 {
        return Err(Error::InvalidVerse(format!("{surah}:{verse}")));
    }

    Ok(format!(
        "{EVERYAYAH_BASE_URL}/{reciter_folder}/{surah:03}_{verse:03}.mp3"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_surah_and_verse_to_three_digits() {
        assert_eq!(
            verse_audio_url("Alafasy_128kbps", 36, 12).unwrap(),
            "https://everyayah.com/data/Alafasy_128kbps/036_012.mp3"
        );
        assert_eq!(
            verse_audio_url("Husary_128kbps", 2, 286).unwrap(),
            "https://everyayah.com/data/Husary_128kbps/002_286.mp3"
        );
        assert_eq!(
            verse_audio_url("Alafasy_128kbps", 114, 6).unwrap(),
            "https://everyayah.com/data/Alafasy_128kbps/114_006.mp3"
        );
    }

    #[test]
    fn rejects_out_of_range_references() {
        assert!(matches!(
            verse_audio_url("Alafasy_128kbps", 0, 1),
            Err(Error::NotFound(0))
        ));
        assert!(matches!(
            verse_audio_url("Alafasy_128kbps", 115, 1),
            Err(Error::NotFound(115))
        ));
        assert!(matches!(
            verse_audio_url("Alafasy_128kbps", 36, 0),
            Err(Error::InvalidVerse(_))
        ));
    }
}
