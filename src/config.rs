//! Configuration management for the `SmartMirror` application
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::SmartMirrorError;

/// Root configuration structure for the `SmartMirror` application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SmartMirrorConfig {
    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Web server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Weather API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL for the weather-by-location API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the web UI binds to
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://wttr.in".to_string()
}

fn default_weather_timeout() -> u32 {
    8
}

fn default_server_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_seconds: default_weather_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SmartMirrorConfig {
    /// Load configuration from the default locations
    ///
    /// Layers, in increasing precedence: built-in defaults,
    /// `config/default.toml` (if present), `SMARTMIRROR_*` environment
    /// variables (e.g. `SMARTMIRROR_SERVER__PORT=8080`).
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(Environment::with_prefix("SMARTMIRROR").separator("__"))
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: SmartMirrorConfig = config
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the loaded configuration
    pub fn validate(&self) -> crate::Result<()> {
        if self.weather.base_url.trim().is_empty() {
            return Err(SmartMirrorError::config("weather.base_url must not be empty"));
        }
        if self.weather.timeout_seconds == 0 {
            return Err(SmartMirrorError::config("weather.timeout_seconds must be positive"));
        }
        Ok(())
    }
}
