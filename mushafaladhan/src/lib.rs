//! AlAdhan client library for Mushaf
//!
//! This crate provides a Rust client for the AlAdhan public API (daily prayer
//! timings and qibla direction) together with the pure prayer-window
//! calculation used to classify "now" against a day's schedule.
//!
//! # Features
//!
//! - **Prayer timings**: five daily prayers plus sunrise for a (latitude,
//!   longitude, date), ISNA calculation method
//! - **Qibla direction**: compass bearing for a location
//! - **Prayer window**: current/next prayer and clamped fractional progress,
//!   computed from an explicit evaluation instant
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use mushafaladhan::{prayer_window, AladhanClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AladhanClient::new()?;
//!     let schedule = client
//!         .prayer_times(23.8103, 90.4125, Utc::now().date_naive())
//!         .await?;
//!
//!     let window = prayer_window(&schedule, Utc::now().time())?;
//!     println!(
//!         "{} now, {} at {} ({:.0}%)",
//!         window.current, window.next, window.next_time, window.progress
//!     );
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod window;

// Re-exports
pub use client::{AladhanClient, ClientBuilder, CALCULATION_METHOD_ISNA, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use models::{Prayer, PrayerSchedule, QiblaInfo};
pub use window::{prayer_window, PrayerWindow};
