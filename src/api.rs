//! HTTP API for the prediction flow
//!
//! One endpoint drives the whole UI: `GET /api/predict?city=...` runs
//! the fetch → fit → recommend pipeline and returns everything the page
//! renders. Failures carry a status code plus the error's user-facing
//! message; the page shows it as a single error banner.

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::{
    comfort::{self, ComfortBand, TRAINING_TABLE, TrainingPoint},
    error::SmartMirrorError,
    fabric::{self, FabricSuggestion},
    render,
    weather::{WeatherSample, WttrClient},
};

#[derive(Debug, Deserialize)]
pub struct PredictParams {
    pub city: String,
}

/// Qualitative band with its UI banner styling
#[derive(Debug, Serialize)]
pub struct BandReport {
    pub band: ComfortBand,
    pub severity: &'static str,
    pub message: &'static str,
}

impl From<ComfortBand> for BandReport {
    fn from(band: ComfortBand) -> Self {
        Self {
            band,
            severity: band.severity(),
            message: band.message(),
        }
    }
}

/// Complete payload for one prediction
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub city: String,
    pub weather: WeatherSample,
    pub comfort_score: f64,
    pub band: BandReport,
    pub fabrics: Vec<FabricSuggestion>,
    pub training_table: Vec<TrainingPoint>,
    pub chart_svg: String,
}

/// Error payload rendered by the page's error banner
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(status: StatusCode, err: &SmartMirrorError) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            error: err.user_message(),
        }),
    )
}

pub fn router(client: WttrClient) -> Router {
    Router::new()
        .route("/predict", get(predict))
        .with_state(client)
}

async fn predict(
    State(client): State<WttrClient>,
    Query(params): Query<PredictParams>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorBody>)> {
    let city = params.city.trim();
    if city.is_empty() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            &SmartMirrorError::validation("city name must not be empty"),
        ));
    }

    let Some(weather) = client.current(city).await else {
        return Err(error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            &SmartMirrorError::api(format!("no weather data for {city}")),
        ));
    };

    let comfort_score = comfort::predict_score(weather.temperature);
    let band = ComfortBand::from_score(comfort_score);
    let fabrics = fabric::recommend(&weather.condition, weather.temperature).to_vec();
    let chart_svg = render::comfort_chart(city, weather.temperature, comfort_score);

    Ok(Json(PredictResponse {
        city: city.to_string(),
        weather,
        comfort_score,
        band: band.into(),
        fabrics,
        training_table: TRAINING_TABLE.to_vec(),
        chart_svg,
    }))
}
