//! Data models for Quran.com API responses
//!
//! The public DTOs are the stable shapes the rest of the application
//! consumes; the `Raw*` structures mirror the upstream JSON and are mapped at
//! the fetch boundary with per-field fallbacks, so upstream schema drift
//! stays out of the core.

use serde::{Deserialize, Serialize};

/// Base URL for per-verse audio hosted by Quran.com
pub const VERSE_AUDIO_BASE_URL: &str = "https://verses.quran.com";

// ============================================================================
// Public DTOs
// ============================================================================

/// Chapter name in the three display scripts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurahName {
    pub arabic: String,
    pub en: String,
    pub bn: String,
}

/// Where a chapter was revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevelationType {
    Meccan,
    Medinan,
}

/// A chapter with its verses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surah {
    pub number: u32,
    pub name: SurahName,
    pub verses_count: u32,
    pub revelation_type: RevelationType,
    pub verses: Vec<Verse>,
    /// Translated chapter title (e.g. "The Cave")
    pub translated_name: String,
}

/// Translation text with attribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationText {
    pub text: String,
    pub author: String,
}

/// English and Bengali translations of one verse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationPair {
    pub en: TranslationText,
    pub bn: TranslationText,
}

/// Tafsir text with attribution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TafsirText {
    pub short: String,
    pub long: String,
    pub author: String,
}

/// English and Bengali tafsir of one verse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TafsirPair {
    pub en: TafsirText,
    pub bn: TafsirText,
}

/// Per-token breakdown of a verse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordByWord {
    pub text: String,
    pub transliteration: String,
    pub translation_en: String,
    pub translation_bn: String,
}

/// Audio source for one verse
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseAudio {
    /// Default recitation URL hosted by Quran.com
    pub default_url: String,
}

/// A verse with its text layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub number: u32,
    /// "surah:verse" key, e.g. "36:12"
    pub verse_key: String,
    pub text_uthmani: String,
    /// Whole-verse transliteration assembled from word tokens
    pub transliteration: String,
    pub translations: TranslationPair,
    pub audio: VerseAudio,
    pub word_by_word: Vec<WordByWord>,
    #[serde(default)]
    pub tafsir: TafsirPair,
}

/// A reciter whose per-verse audio is addressable by folder identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reciter {
    /// everyayah.com folder identifier, e.g. "Alafasy_128kbps"
    pub identifier: String,
    pub name: String,
    pub style: String,
    pub available: bool,
    pub language: String,
}

impl Reciter {
    pub(crate) fn new(identifier: &str, name: &str, style: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            name: name.to_string(),
            style: style.to_string(),
            available: true,
            language: "ar".to_string(),
        }
    }
}

/// One page of verse search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub verses: Vec<SearchHit>,
    pub total: u32,
    pub current_page: u32,
}

/// A single search match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub verse_key: String,
    pub text: String,
}

// ============================================================================
// Raw API response shapes
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ChapterResponse {
    pub chapter: RawChapter,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawChapter {
    pub id: u32,
    #[serde(default)]
    pub name_arabic: String,
    #[serde(default)]
    pub name_simple: String,
    #[serde(default)]
    pub name_complex: String,
    #[serde(default)]
    pub verses_count: u32,
    #[serde(default)]
    pub revelation_place: String,
    #[serde(default)]
    pub translated_name: Option<RawTranslatedName>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawTranslatedName {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VersesResponse {
    #[serde(default)]
    pub verses: Vec<RawVerse>,
    #[serde(default)]
    pub pagination: Option<RawPagination>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPagination {
    #[serde(default)]
    pub next_page: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VerseByKeyResponse {
    pub verse: RawVerse,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawVerse {
    pub verse_number: u32,
    #[serde(default)]
    pub verse_key: String,
    #[serde(default)]
    pub text_uthmani: String,
    #[serde(default)]
    pub words: Vec<RawWord>,
    #[serde(default)]
    pub translations: Vec<RawTranslation>,
    #[serde(default)]
    pub tafsirs: Vec<RawTafsir>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawWord {
    #[serde(default)]
    pub text_uthmani: String,
    #[serde(default)]
    pub transliteration: Option<RawWordText>,
    #[serde(default)]
    pub translation: Option<RawWordText>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawWordText {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawTranslation {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub resource_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawTafsir {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub resource_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub search: RawSearch,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSearch {
    #[serde(default)]
    pub results: Vec<RawSearchHit>,
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub current_page: u32,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSearchHit {
    #[serde(default)]
    pub verse_key: String,
    #[serde(default)]
    pub text: String,
}

// ============================================================================
// Raw → DTO mapping
// ============================================================================

impl RawChapter {
    pub(crate) fn into_surah(self, verses: Vec<Verse>) -> Surah {
        let revelation_type = if self.revelation_place.eq_ignore_ascii_case("madinah")
            || self.revelation_place.eq_ignore_ascii_case("medinan")
        {
            RevelationType::Medinan
        } else {
            RevelationType::Meccan
        };

        Surah {
            number: self.id,
            name: SurahName {
                arabic: self.name_arabic,
                en: self.name_simple,
                bn: self.name_complex,
            },
            verses_count: self.verses_count,
            revelation_type,
            verses,
            translated_name: self.translated_name.unwrap_or_default().name,
        }
    }
}

impl RawVerse {
    pub(crate) fn into_verse(self) -> Verse {
        let transliteration = self
            .words
            .iter()
            .filter_map(|w| w.transliteration.as_ref().and_then(|t| t.text.clone()))
            .collect::<Vec<_>>()
            .join(" ");

        let mut translations = TranslationPair::default();
        if let Some(en) = self.translations.first() {
            translations.en = TranslationText {
                text: en.text.clone(),
                author: en.resource_name.clone().unwrap_or_else(unknown_author),
            };
        }
        if let Some(bn) = self.translations.get(1) {
            translations.bn = TranslationText {
                text: bn.text.clone(),
                author: bn.resource_name.clone().unwrap_or_else(unknown_author),
            };
        }

        // Tafsir arrives in request order: English ids first, then Bengali.
        // The API returns HTML; the full text goes in `long` and the first
        // sentence stands in as the short form.
        let mut tafsir = TafsirPair::default();
        if let Some(en) = self.tafsirs.first() {
            tafsir.en = tafsir_text(en);
        }
        if let Some(bn) = self.tafsirs.get(1) {
            tafsir.bn = tafsir_text(bn);
        }

        let word_by_word = self
            .words
            .iter()
            .map(|w| WordByWord {
                text: w.text_uthmani.clone(),
                transliteration: w
                    .transliteration
                    .as_ref()
                    .and_then(|t| t.text.clone())
                    .unwrap_or_default(),
                translation_en: w
                    .translation
                    .as_ref()
                    .and_then(|t| t.text.clone())
                    .unwrap_or_default(),
                translation_bn: String::new(),
            })
            .collect();

        Verse {
            number: self.verse_number,
            audio: VerseAudio {
                default_url: format!("{}/{}.mp3", VERSE_AUDIO_BASE_URL, self.verse_key),
            },
            verse_key: self.verse_key,
            text_uthmani: self.text_uthmani,
            transliteration,
            translations,
            word_by_word,
            tafsir,
        }
    }
}

fn tafsir_text(raw: &RawTafsir) -> TafsirText {
    let short = raw
        .text
        .split_inclusive('.')
        .next()
        .unwrap_or(&raw.text)
        .trim()
        .to_string();
    TafsirText {
        short,
        long: raw.text.clone(),
        author: raw.resource_name.clone().unwrap_or_else(unknown_author),
    }
}

fn unknown_author() -> String {
    "Unknown".to_string()
}
