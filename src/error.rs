//! Error types and handling for the `SmartMirror` application

use thiserror::Error;

/// Main error type for the `SmartMirror` application
#[derive(Error, Debug)]
pub enum SmartMirrorError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },
}

impl SmartMirrorError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SmartMirrorError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            SmartMirrorError::Api { .. } => {
                "Could not fetch weather data. Check your city name or internet connection."
                    .to_string()
            }
            SmartMirrorError::Validation { message } => {
                format!("Invalid input: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = SmartMirrorError::config("missing section");
        assert!(matches!(config_err, SmartMirrorError::Config { .. }));

        let api_err = SmartMirrorError::api("connection failed");
        assert!(matches!(api_err, SmartMirrorError::Api { .. }));

        let validation_err = SmartMirrorError::validation("empty city name");
        assert!(matches!(validation_err, SmartMirrorError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = SmartMirrorError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let api_err = SmartMirrorError::api("test");
        assert!(api_err.user_message().contains("Could not fetch"));

        let validation_err = SmartMirrorError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }
}
