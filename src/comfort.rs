//! Comfort model: least-squares fit over the fixed training table
//!
//! The table maps temperature to a hand-tuned comfort score on a 1-10
//! scale, peaking near 20-25°C. The line is refit on every prediction;
//! with 9 fixed points the cost is negligible and the behavior stays
//! identical across calls.

use serde::Serialize;

/// One hand-authored (temperature, comfort score) observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrainingPoint {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Comfort score on the nominal 1-10 scale
    pub score: f64,
}

const fn point(temperature: f64, score: f64) -> TrainingPoint {
    TrainingPoint { temperature, score }
}

/// Fixed comfort training table
pub const TRAINING_TABLE: [TrainingPoint; 9] = [
    point(0.0, 1.0),
    point(5.0, 3.0),
    point(10.0, 5.0),
    point(15.0, 7.0),
    point(20.0, 8.0),
    point(25.0, 9.0),
    point(30.0, 8.0),
    point(35.0, 6.0),
    point(40.0, 4.0),
];

/// A fitted single-variable least-squares line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearModel {
    /// Fit an ordinary least-squares line through the given points.
    ///
    /// The training table has distinct temperatures, so the denominator
    /// is never zero for the data this is called with.
    #[must_use]
    pub fn fit(points: &[TrainingPoint]) -> Self {
        let n = points.len() as f64;
        let mean_x = points.iter().map(|p| p.temperature).sum::<f64>() / n;
        let mean_y = points.iter().map(|p| p.score).sum::<f64>() / n;

        let mut covariance = 0.0;
        let mut variance = 0.0;
        for p in points {
            let dx = p.temperature - mean_x;
            covariance += dx * (p.score - mean_y);
            variance += dx * dx;
        }

        let slope = covariance / variance;
        let intercept = mean_y - slope * mean_x;
        Self { intercept, slope }
    }

    /// Evaluate the fitted line at a temperature
    #[must_use]
    pub fn predict(&self, temperature: f64) -> f64 {
        self.intercept + self.slope * temperature
    }
}

/// Predict the comfort score for an observed temperature.
///
/// Refits the line over [`TRAINING_TABLE`] and rounds the result to two
/// decimal places. The line extrapolates freely outside the table's
/// range; scores outside the nominal 1-10 band are accepted as-is.
#[must_use]
pub fn predict_score(temperature: f64) -> f64 {
    let model = LinearModel::fit(&TRAINING_TABLE);
    let predicted = model.predict(temperature);
    (predicted * 100.0).round() / 100.0
}

/// Qualitative comfort band derived from the predicted score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComfortBand {
    /// Score >= 8
    Ideal,
    /// 5 <= score < 8
    Moderate,
    /// Score < 5
    Harsh,
}

impl ComfortBand {
    /// Classify a comfort score into its band
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Ideal
        } else if score >= 5.0 {
            Self::Moderate
        } else {
            Self::Harsh
        }
    }

    /// Fixed guidance message shown under the prediction
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Ideal => "Ideal weather - natural breathable fabrics like cotton and linen are best.",
            Self::Moderate => "Moderate comfort - blended or light synthetic fabrics recommended.",
            Self::Harsh => "Extreme weather - choose insulating or water-resistant materials.",
        }
    }

    /// Banner severity used by the UI (info, warning, error)
    #[must_use]
    pub fn severity(self) -> &'static str {
        match self {
            Self::Ideal => "info",
            Self::Moderate => "warning",
            Self::Harsh => "error",
        }
    }
}
