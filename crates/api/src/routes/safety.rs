//! Safety check endpoint handler.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{EnvironmentalReading, SafetyZone, ZoneOverlayLayer};
use domain::services::{classify, render_zone, risk_score};

/// Request payload for a safety check.
///
/// When `reading` is supplied the provider fetch is skipped and the
/// caller's values are classified as-is.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckSafetyRequest {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    pub reading: Option<EnvironmentalReading>,
}

/// Response payload for a safety check.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSafetyResponse {
    pub is_safe: bool,
    pub risk_score: f64,
    pub reading: EnvironmentalReading,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub european_aqi: Option<f64>,
    pub zone: SafetyZone,
    pub overlays: Vec<ZoneOverlayLayer>,
}

/// Classify a coordinate as safe or unsafe.
///
/// POST /check-safety
///
/// Fetches current weather and air quality (unless the caller embedded a
/// reading), runs the classifier, and returns the zone with its rendered
/// overlay layers.
pub async fn check_safety(
    State(state): State<AppState>,
    Json(request): Json<CheckSafetyRequest>,
) -> Result<Json<CheckSafetyResponse>, ApiError> {
    request.validate()?;

    let (reading, weather_code, european_aqi) = match request.reading {
        Some(reading) => (reading, None, None),
        None => {
            let conditions = state
                .weather
                .current_conditions(request.latitude, request.longitude)
                .await?;
            (
                conditions.reading,
                Some(conditions.weather_code),
                Some(conditions.european_aqi),
            )
        }
    };

    let is_safe = classify(&reading);
    let score = risk_score(&reading);
    let zone = SafetyZone::around(request.latitude, request.longitude, is_safe);
    let overlays = render_zone(Some(&zone));

    info!(
        latitude = request.latitude,
        longitude = request.longitude,
        risk_score = score,
        is_safe = is_safe,
        "Safety check completed"
    );

    Ok(Json(CheckSafetyResponse {
        is_safe,
        risk_score: score,
        reading,
        weather_code,
        european_aqi,
        zone,
        overlays,
    }))
}
