//! Data models for AlAdhan API responses

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// The five daily prayers, in day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    /// The fixed day order used by the window calculation.
    pub const DAY_ORDER: [Prayer; 5] = [
        Prayer::Fajr,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

impl std::fmt::Display for Prayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One day's prayer schedule at a location.
///
/// The five prayer times are expected to be strictly increasing across the
/// day; the schedule is immutable once fetched for a given date. Sunrise is
/// carried for display but takes no part in window calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerSchedule {
    pub fajr: NaiveTime,
    pub sunrise: NaiveTime,
    pub dhuhr: NaiveTime,
    pub asr: NaiveTime,
    pub maghrib: NaiveTime,
    pub isha: NaiveTime,
    pub date: NaiveDate,
}

impl PrayerSchedule {
    /// Time of day for one of the five prayers.
    pub fn time_of(&self, prayer: Prayer) -> NaiveTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }
}

/// Qibla direction at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QiblaInfo {
    /// Compass bearing in degrees from true north
    pub direction: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Parse an AlAdhan timing string.
///
/// The API returns "HH:MM", sometimes suffixed with a timezone label such as
/// "05:32 (BST)"; anything after the first space is ignored.
pub(crate) fn parse_timing(raw: &str) -> Result<NaiveTime> {
    let hhmm = raw.split_whitespace().next().unwrap_or(raw);
    NaiveTime::parse_from_str(hhmm, "%H:%M").map_err(|_| Error::InvalidTime(raw.to_string()))
}

// ============================================================================
// Raw API response shapes
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct TimingsResponse {
    pub data: TimingsData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TimingsData {
    pub timings: RawTimings,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTimings {
    #[serde(rename = "Fajr")]
    pub fajr: String,
    #[serde(rename = "Sunrise")]
    pub sunrise: String,
    #[serde(rename = "Dhuhr")]
    pub dhuhr: String,
    #[serde(rename = "Asr")]
    pub asr: String,
    #[serde(rename = "Maghrib")]
    pub maghrib: String,
    #[serde(rename = "Isha")]
    pub isha: String,
}

impl RawTimings {
    pub(crate) fn into_schedule(self, date: NaiveDate) -> Result<PrayerSchedule> {
        Ok(PrayerSchedule {
            fajr: parse_timing(&self.fajr)?,
            sunrise: parse_timing(&self.sunrise)?,
            dhuhr: parse_timing(&self.dhuhr)?,
            asr: parse_timing(&self.asr)?,
            maghrib: parse_timing(&self.maghrib)?,
            isha: parse_timing(&self.isha)?,
            date,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QiblaResponse {
    pub data: QiblaData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QiblaData {
    pub direction: f64,
}
