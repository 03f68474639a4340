//! Weather client for the wttr.in JSON API
//!
//! Issues a single GET per lookup and reduces every failure mode
//! (network error, timeout, non-200 status, malformed or incomplete JSON)
//! to one "no data" outcome. Callers only ever see `Option<WeatherSample>`.

use std::time::Duration;

use anyhow::{Context, bail};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::config::WeatherConfig;
use crate::error::SmartMirrorError;

/// Current weather observed for a city
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeatherSample {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Human-readable condition description, e.g. "Light rain"
    pub condition: String,
}

/// HTTP client for the wttr.in weather-by-location endpoint
#[derive(Debug, Clone)]
pub struct WttrClient {
    client: Client,
    base_url: String,
}

impl WttrClient {
    /// Create a new weather client with the configured timeout
    pub fn new(config: &WeatherConfig) -> crate::Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("SmartMirror/0.1.0")
            .build()
            .map_err(|e| SmartMirrorError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the current weather for a city.
    ///
    /// Returns `None` on any failure; the cause is logged and not
    /// classified further.
    #[instrument(skip(self))]
    pub async fn current(&self, city: &str) -> Option<WeatherSample> {
        match self.current_inner(city).await {
            Ok(sample) => {
                info!(
                    "Live weather for {}: {} at {:.1}°C, {:.0}% humidity",
                    city, sample.condition, sample.temperature, sample.humidity
                );
                Some(sample)
            }
            Err(e) => {
                warn!("Weather lookup failed for {city}: {e:#}");
                None
            }
        }
    }

    async fn current_inner(&self, city: &str) -> anyhow::Result<WeatherSample> {
        let url = format!(
            "{}/{}?format=j1",
            self.base_url,
            urlencoding::encode(city)
        );
        debug!("Weather API request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| "Weather request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Weather API returned status {status}");
        }

        let report: wttr::WeatherReport = response
            .json()
            .await
            .with_context(|| "Failed to parse weather response")?;

        report.into_sample()
    }
}

/// wttr.in `format=j1` response structures and conversion utilities
mod wttr {
    use anyhow::{Context, Result};
    use serde::Deserialize;

    use super::WeatherSample;

    /// Top-level `format=j1` response; only the current conditions are used
    #[derive(Debug, Deserialize)]
    pub struct WeatherReport {
        pub current_condition: Vec<CurrentCondition>,
    }

    /// One entry of the `current_condition` array.
    ///
    /// wttr.in serializes numeric fields as JSON strings.
    #[derive(Debug, Deserialize)]
    pub struct CurrentCondition {
        #[serde(rename = "temp_C")]
        pub temp_c: String,
        pub humidity: String,
        #[serde(rename = "weatherDesc")]
        pub weather_desc: Vec<DescriptionValue>,
    }

    #[derive(Debug, Deserialize)]
    pub struct DescriptionValue {
        pub value: String,
    }

    impl WeatherReport {
        /// Extract the first current-conditions entry as a sample
        pub fn into_sample(self) -> Result<WeatherSample> {
            let current = self
                .current_condition
                .into_iter()
                .next()
                .with_context(|| "Empty current_condition array")?;

            let temperature: f64 = current
                .temp_c
                .parse()
                .with_context(|| "Unparsable temp_C value")?;
            let humidity: f64 = current
                .humidity
                .parse()
                .with_context(|| "Unparsable humidity value")?;
            let condition = current
                .weather_desc
                .into_iter()
                .next()
                .with_context(|| "Empty weatherDesc array")?
                .value;

            Ok(WeatherSample {
                temperature,
                humidity,
                condition,
            })
        }
    }
}
