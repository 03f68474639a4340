//! `SmartMirror` - Weather-based comfort prediction and fabric recommendation
//!
//! This library provides the core functionality for fetching live
//! weather, predicting a comfort score with a least-squares fit over a
//! fixed training table, and recommending fabrics for the conditions.

pub mod api;
pub mod comfort;
pub mod config;
pub mod error;
pub mod fabric;
pub mod render;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use comfort::{ComfortBand, LinearModel, TRAINING_TABLE, TrainingPoint};
pub use config::SmartMirrorConfig;
pub use error::SmartMirrorError;
pub use fabric::FabricSuggestion;
pub use weather::{WeatherSample, WttrClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SmartMirrorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
