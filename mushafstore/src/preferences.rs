//! User preference persistence
//!
//! Preferences are a flat record persisted as JSON under a single key.
//! Loading shallow-merges the persisted record over the built-in defaults
//! (persisted keys win, key by key), so new default fields added in later
//! versions pick up their default without invalidating stored records.
//! Every mutation writes the full record back immediately.

use crate::error::Result;
use crate::kv::KeyValueStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Storage key for the preference record
pub const PREFERENCES_KEY: &str = "quran-preferences";

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiLanguage {
    En,
    Bn,
}

/// Font sizes for the two text layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub arabic: u32,
    pub translation: u32,
}

/// Translation or tafsir resource ids, per language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSelections {
    pub en: Vec<String>,
    pub bn: Vec<String>,
}

/// The full user preference record.
///
/// `Default` carries the out-of-the-box values; a persisted record only ever
/// narrows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub font_size: FontSizes,
    pub arabic_font: String,
    pub translation_font: String,
    pub auto_play_next: bool,
    pub selected_reciter: String,
    pub selected_translations: LanguageSelections,
    pub selected_tafsirs: LanguageSelections,
    pub ui_language: UiLanguage,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_size: FontSizes {
                arabic: 28,
                translation: 16,
            },
            arabic_font: "UthmanicHafs".to_string(),
            translation_font: "Arial".to_string(),
            auto_play_next: true,
            selected_reciter: "Alafasy_128kbps".to_string(),
            selected_translations: LanguageSelections {
                en: vec!["en.sahih".to_string()],
                bn: vec!["bn.bengali".to_string()],
            },
            selected_tafsirs: LanguageSelections {
                en: vec!["en.tafsir-ibn-kathir".to_string()],
                bn: vec!["bn.bengali-zakaria".to_string()],
            },
            ui_language: UiLanguage::En,
        }
    }
}

/// Preference store over an injected key-value backend.
pub struct PreferenceStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load preferences, merging any persisted record over the defaults.
    ///
    /// Absent or corrupt persisted JSON degrades to the defaults; corruption
    /// is logged but never surfaced to the caller.
    pub fn load(&self) -> Result<Preferences> {
        let Some(raw) = self.store.get(PREFERENCES_KEY)? else {
            return Ok(Preferences::default());
        };

        let persisted: Value = match serde_json::from_str(&raw) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "Corrupt preference record, using defaults");
                return Ok(Preferences::default());
            }
        };

        Ok(merge_over_defaults(&persisted))
    }

    /// Persist the full record (idempotent overwrite).
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let json = serde_json::to_string_pretty(prefs)?;
        self.store.set(PREFERENCES_KEY, &json)?;
        debug!("Saved preferences");
        Ok(())
    }

    /// Update the selected reciter and write through.
    pub fn set_reciter(&self, prefs: &mut Preferences, reciter: impl Into<String>) -> Result<()> {
        prefs.selected_reciter = reciter.into();
        self.save(prefs)
    }

    /// Update the auto-play flag and write through.
    pub fn set_auto_play_next(&self, prefs: &mut Preferences, enabled: bool) -> Result<()> {
        prefs.auto_play_next = enabled;
        self.save(prefs)
    }

    /// Update the theme and write through.
    pub fn set_theme(&self, prefs: &mut Preferences, theme: Theme) -> Result<()> {
        prefs.theme = theme;
        self.save(prefs)
    }
}

/// Shallow merge: take the defaults, overwrite each top-level key present in
/// the persisted object, then decode. An unknown or mistyped key falls back
/// to the full defaults rather than failing the load.
fn merge_over_defaults(persisted: &Value) -> Preferences {
    let mut merged = match serde_json::to_value(Preferences::default()) {
        Ok(Value::Object(map)) => map,
        _ => return Preferences::default(),
    };

    if let Value::Object(overrides) = persisted {
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
    }

    match serde_json::from_value(Value::Object(merged)) {
        Ok(prefs) => prefs,
        Err(e) => {
            warn!(error = %e, "Persisted preference record does not decode, using defaults");
            Preferences::default()
        }
    }
}
