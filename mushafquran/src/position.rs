//! Reading position routes
//!
//! A reading position is addressed by a `/surah/{surah}/{verse}` path. The
//! verse segment is optional and defaults to 1, so a shared link to a chapter
//! always lands on its first verse.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A position in the text: one verse of one surah
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingPosition {
    pub surah: u32,
    pub verse: u32,
}

impl ReadingPosition {
    /// Create a position, validating the surah number
    pub fn new(surah: u32, verse: u32) -> Result<Self> {
        crate::client::validate_surah_number(surah)?;
        if verse < 1 {
            return Err(Error::InvalidVerse(format!("{surah}:{verse}")));
        }
        Ok(Self { surah, verse })
    }

    /// Parse a `/surah/{surah}` or `/surah/{surah}/{verse}` path.
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            ["surah", surah] => Self::new(parse_segment(path, surah)?, 1),
            ["surah", surah, verse] => {
                Self::new(parse_segment(path, surah)?, parse_segment(path, verse)?)
            }
            _ => Err(Error::InvalidRoute(path.to_string())),
        }
    }

    /// Canonical path for this position
    pub fn path(&self) -> String {
        format!("/surah/{}/{}", self.surah, self.verse)
    }
}

fn parse_segment(path: &str, segment: &str) -> Result<u32> {
    segment
        .parse()
        .map_err(|_| Error::InvalidRoute(path.to_string()))
}

impl std::fmt::Display for ReadingPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.surah, self.verse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_route() {
        let pos = ReadingPosition::parse("/surah/36/12").unwrap();
        assert_eq!(pos, ReadingPosition { surah: 36, verse: 12 });
        assert_eq!(pos.path(), "/surah/36/12");
        assert_eq!(pos.to_string(), "36:12");
    }

    #[test]
    fn verse_defaults_to_one() {
        let pos = ReadingPosition::parse("/surah/18").unwrap();
        assert_eq!(pos, ReadingPosition { surah: 18, verse: 1 });
    }

    #[test]
    fn tolerates_trailing_slash() {
        let pos = ReadingPosition::parse("/surah/2/255/").unwrap();
        assert_eq!(pos, ReadingPosition { surah: 2, verse: 255 });
    }

    #[test]
    fn rejects_malformed_routes() {
        assert!(matches!(
            ReadingPosition::parse("/chapter/36"),
            Err(Error::InvalidRoute(_))
        ));
        assert!(matches!(
            ReadingPosition::parse("/surah/abc"),
            Err(Error::InvalidRoute(_))
        ));
        assert!(matches!(
            ReadingPosition::parse("/surah"),
            Err(Error::InvalidRoute(_))
        ));
        assert!(matches!(
            ReadingPosition::parse("/surah/36/12/extra"),
            Err(Error::InvalidRoute(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_positions() {
        assert!(matches!(
            ReadingPosition::parse("/surah/0/1"),
            Err(Error::NotFound(0))
        ));
        assert!(matches!(
            ReadingPosition::parse("/surah/115"),
            Err(Error::NotFound(115))
        ));
        assert!(matches!(
            ReadingPosition::parse("/surah/36/0"),
            Err(Error::InvalidVerse(_))
        ));
    }
}
