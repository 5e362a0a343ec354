//! Prayer-window calculation
//!
//! Classifies an instant against a day's five-prayer schedule: which prayer
//! window we are in, which prayer comes next, and how far along the window we
//! are. Pure function of (schedule, instant) — the evaluation instant is
//! always passed in, never sampled here.

use crate::error::{Error, Result};
use crate::models::{Prayer, PrayerSchedule};
use chrono::{NaiveTime, Timelike};

/// The active prayer window at a given instant.
///
/// Derived on every evaluation, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerWindow {
    /// Prayer whose window we are currently in
    pub current: Prayer,
    /// Next prayer of the day order
    pub next: Prayer,
    /// Start time of the next prayer
    pub next_time: NaiveTime,
    /// Fractional progress through the current window, in [0, 100]
    pub progress: f64,
}

/// Compute the prayer window for `now` against a day's schedule.
///
/// Prayers are scanned in fixed day order; the first prayer starting strictly
/// after `now` is "next" and its predecessor is "current". Comparison is at
/// minute granularity (seconds are ignored, like the wall-clock display the
/// schedule feeds).
///
/// Two edges use the day's own schedule as an approximation, since adjacent
/// days are not fetched:
/// - before Fajr, current = Isha (today's value) and the window is measured
///   from midnight;
/// - at or after Isha, current = Isha, next = Fajr (tomorrow's Fajr shown as
///   today's) with progress pinned at 100.
///
/// # Errors
///
/// [`Error::InvalidSchedule`] if the five prayer times are not strictly
/// increasing. With a valid schedule consecutive window bounds differ, so the
/// progress division cannot degenerate.
pub fn prayer_window(schedule: &PrayerSchedule, now: NaiveTime) -> Result<PrayerWindow> {
    validate(schedule)?;

    let now_minutes = minutes_since_midnight(now);

    for (i, prayer) in Prayer::DAY_ORDER.iter().enumerate() {
        let start_of_next = minutes_since_midnight(schedule.time_of(*prayer));
        if now_minutes < start_of_next {
            let (current, window_start) = if i > 0 {
                let previous = Prayer::DAY_ORDER[i - 1];
                (previous, minutes_since_midnight(schedule.time_of(previous)))
            } else {
                // Pre-Fajr: approximate with today's Isha, window from midnight
                (Prayer::Isha, 0)
            };

            let span = (start_of_next - window_start) as f64;
            let elapsed = (now_minutes - window_start) as f64;
            let progress = (elapsed / span * 100.0).clamp(0.0, 100.0);

            return Ok(PrayerWindow {
                current,
                next: *prayer,
                next_time: schedule.time_of(*prayer),
                progress,
            });
        }
    }

    // At or after Isha: the day is over, next is tomorrow's Fajr
    Ok(PrayerWindow {
        current: Prayer::Isha,
        next: Prayer::Fajr,
        next_time: schedule.fajr,
        progress: 100.0,
    })
}

fn validate(schedule: &PrayerSchedule) -> Result<()> {
    let times: Vec<(Prayer, u32)> = Prayer::DAY_ORDER
        .iter()
        .map(|p| (*p, minutes_since_midnight(schedule.time_of(*p))))
        .collect();

    for pair in times.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        if earlier.1 >= later.1 {
            return Err(Error::InvalidSchedule(format!(
                "{} ({}) does not precede {} ({})",
                earlier.0,
                schedule.time_of(earlier.0),
                later.0,
                schedule.time_of(later.0),
            )));
        }
    }
    Ok(())
}

fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn schedule() -> PrayerSchedule {
        PrayerSchedule {
            fajr: hm(5, 0),
            sunrise: hm(6, 20),
            dhuhr: hm(12, 0),
            asr: hm(15, 30),
            maghrib: hm(18, 0),
            isha: hm(19, 30),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        }
    }

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn midday_example() {
        let window = prayer_window(&schedule(), hm(13, 0)).unwrap();
        assert_eq!(window.current, Prayer::Dhuhr);
        assert_eq!(window.next, Prayer::Asr);
        assert_eq!(window.next_time, hm(15, 30));
        // (13:00 - 12:00) / (15:30 - 12:00) = 60 / 210
        assert!((window.progress - 28.571428).abs() < 1e-4);
    }

    #[test]
    fn progress_is_zero_at_window_start() {
        let window = prayer_window(&schedule(), hm(12, 0)).unwrap();
        assert_eq!(window.current, Prayer::Dhuhr);
        assert_eq!(window.progress, 0.0);
    }

    #[test]
    fn progress_approaches_hundred_at_window_end() {
        let window = prayer_window(&schedule(), hm(15, 29)).unwrap();
        assert_eq!(window.current, Prayer::Dhuhr);
        assert!(window.progress > 99.0 && window.progress < 100.0);
    }

    #[test]
    fn progress_is_monotone_within_a_window() {
        let s = schedule();
        let mut last = -1.0;
        for minute in (12 * 60)..(15 * 60 + 30) {
            let window = prayer_window(&s, hm(minute / 60, minute % 60)).unwrap();
            assert_eq!(window.current, Prayer::Dhuhr);
            assert!((0.0..=100.0).contains(&window.progress));
            assert!(window.progress >= last);
            last = window.progress;
        }
    }

    #[test]
    fn before_fajr_falls_back_to_isha_from_midnight() {
        let window = prayer_window(&schedule(), hm(3, 0)).unwrap();
        assert_eq!(window.current, Prayer::Isha);
        assert_eq!(window.next, Prayer::Fajr);
        assert_eq!(window.next_time, hm(5, 0));
        // 180 of 300 minutes between midnight and Fajr
        assert!((window.progress - 60.0).abs() < 1e-9);
    }

    #[test]
    fn after_isha_pins_progress_at_hundred() {
        let window = prayer_window(&schedule(), hm(22, 45)).unwrap();
        assert_eq!(window.current, Prayer::Isha);
        assert_eq!(window.next, Prayer::Fajr);
        assert_eq!(window.next_time, hm(5, 0));
        assert_eq!(window.progress, 100.0);
    }

    #[test]
    fn exactly_at_isha_counts_as_the_final_window() {
        let window = prayer_window(&schedule(), hm(19, 30)).unwrap();
        assert_eq!(window.current, Prayer::Isha);
        assert_eq!(window.progress, 100.0);
    }

    #[test]
    fn non_increasing_schedule_is_rejected() {
        let mut bad = schedule();
        bad.asr = hm(11, 0);
        assert!(matches!(
            prayer_window(&bad, hm(13, 0)),
            Err(Error::InvalidSchedule(_))
        ));
    }

    #[test]
    fn equal_adjacent_times_are_rejected_not_divided() {
        let mut bad = schedule();
        bad.asr = bad.dhuhr;
        // Must fail cleanly instead of producing NaN progress
        assert!(matches!(
            prayer_window(&bad, hm(12, 30)),
            Err(Error::InvalidSchedule(_))
        ));
    }

    #[test]
    fn seconds_are_ignored() {
        let window = prayer_window(
            &schedule(),
            NaiveTime::from_hms_opt(13, 0, 59).unwrap(),
        )
        .unwrap();
        assert!((window.progress - 28.571428).abs() < 1e-4);
    }
}
