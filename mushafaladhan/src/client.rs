//! HTTP client for the AlAdhan API
//!
//! Provides prayer timings for a date and location, and the qibla bearing for
//! a location. The client is stateless and does not cache responses; caching
//! belongs to higher layers.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use mushafaladhan::AladhanClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AladhanClient::new()?;
//!     let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//!     let schedule = client.prayer_times(23.8103, 90.4125, date).await?;
//!     println!("Fajr at {}", schedule.fajr);
//!     Ok(())
//! }
//! ```

use crate::error::{Error, Result};
use crate::models::{PrayerSchedule, QiblaInfo, QiblaResponse, TimingsResponse};
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default AlAdhan base URL
pub const DEFAULT_BASE_URL: &str = "https://api.aladhan.com";

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mushaf/0.1 (mushafaladhan)";

/// Calculation method constant: Islamic Society of North America
pub const CALCULATION_METHOD_ISNA: u8 = 2;

/// AlAdhan HTTP client
#[derive(Debug, Clone)]
pub struct AladhanClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl AladhanClient {
    /// Create a new client with default settings
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the prayer schedule for a location and date.
    ///
    /// Uses the ISNA calculation method. Coordinates outside the valid
    /// ranges fail with [`Error::Location`] before any network call.
    pub async fn prayer_times(
        &self,
        latitude: f64,
        longitude: f64,
        date: NaiveDate,
    ) -> Result<PrayerSchedule> {
        validate_coordinates(latitude, longitude)?;

        let url = format!(
            "{}/v1/timings/{}?latitude={}&longitude={}&method={}",
            self.base_url,
            date.format("%d-%m-%Y"),
            latitude,
            longitude,
            CALCULATION_METHOD_ISNA
        );
        debug!(%url, "Fetching prayer timings");

        let response = self.client.get(&url).timeout(self.timeout).send().await?;
        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "timings returned status: {}",
                response.status()
            )));
        }

        let body: TimingsResponse = response.json().await?;
        body.data.timings.into_schedule(date)
    }

    /// Fetch the qibla bearing for a location.
    pub async fn qibla(&self, latitude: f64, longitude: f64) -> Result<QiblaInfo> {
        validate_coordinates(latitude, longitude)?;

        let url = format!("{}/v1/qibla/{}/{}", self.base_url, latitude, longitude);
        debug!(%url, "Fetching qibla direction");

        let response = self.client.get(&url).timeout(self.timeout).send().await?;
        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "qibla returned status: {}",
                response.status()
            )));
        }

        let body: QiblaResponse = response.json().await?;
        Ok(QiblaInfo {
            direction: body.data.direction,
            latitude,
            longitude,
        })
    }
}

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::Location(format!("latitude out of range: {latitude}")));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::Location(format!(
            "longitude out of range: {longitude}"
        )));
    }
    Ok(())
}

/// Builder for configuring an AladhanClient
#[derive(Debug)]
pub struct ClientBuilder {
    client: Option<Client>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom HTTP client
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<AladhanClient> {
        let client = match self.client {
            Some(client) => client,
            None => Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .build()?,
        };

        Ok(AladhanClient {
            client,
            base_url: self.base_url,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = ClientBuilder::default();
        assert_eq!(builder.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            builder.timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[tokio::test]
    async fn out_of_range_coordinates_fail_before_network() {
        let client = AladhanClient::builder()
            .base_url("http://127.0.0.1:1") // would fail if contacted
            .build()
            .unwrap();

        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(matches!(
            client.prayer_times(91.0, 0.0, date).await,
            Err(Error::Location(_))
        ));
        assert!(matches!(
            client.qibla(0.0, 181.0).await,
            Err(Error::Location(_))
        ));
        assert!(matches!(
            client.qibla(f64::NAN, 0.0).await,
            Err(Error::Location(_))
        ));
    }

    // ========================================================================
    // Integration tests (real API calls)
    //
    // Run with: cargo test -p mushafaladhan -- --ignored
    // ========================================================================

    #[tokio::test]
    #[ignore = "Integration test - calls real AlAdhan API"]
    async fn live_prayer_times_dhaka() {
        let client = AladhanClient::new().expect("Failed to create client");
        let date = chrono::Utc::now().date_naive();
        let schedule = client
            .prayer_times(23.8103, 90.4125, date)
            .await
            .expect("Failed to fetch timings");

        assert!(schedule.fajr < schedule.dhuhr);
        assert!(schedule.dhuhr < schedule.asr);
        assert!(schedule.asr < schedule.maghrib);
        assert!(schedule.maghrib < schedule.isha);
    }

    #[tokio::test]
    #[ignore = "Integration test - calls real AlAdhan API"]
    async fn live_qibla_dhaka() {
        let client = AladhanClient::new().expect("Failed to create client");
        let qibla = client
            .qibla(23.8103, 90.4125)
            .await
            .expect("Failed to fetch qibla");

        assert!((0.0..360.0).contains(&qibla.direction));
    }
}
