//! Asthma event domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::reading::EnvironmentalReading;

/// Represents a logged asthma event in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsthmaEvent {
    pub id: i64,
    pub event_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub place: String,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub symptoms: String,
    pub reading: EnvironmentalReading,
    pub european_aqi: Option<f64>,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for logging an asthma event.
///
/// Date parts carry the same range checks the mobile entry form applies
/// (year 2000-2100, month 1-12, day 1-31, hour 0-23).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LogEventRequest {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    #[validate(length(min = 1, max = 200, message = "Place must be 1-200 characters"))]
    pub place: String,

    #[validate(custom(function = "shared::validation::validate_event_year"))]
    pub year: i32,

    #[validate(custom(function = "shared::validation::validate_event_month"))]
    pub month: i32,

    #[validate(custom(function = "shared::validation::validate_event_day"))]
    pub day: i32,

    #[validate(custom(function = "shared::validation::validate_event_hour"))]
    pub hour: i32,

    #[validate(length(min = 1, max = 500, message = "Symptoms must be 1-500 characters"))]
    pub symptoms: String,

    /// Conditions observed at the time of the event.
    pub reading: EnvironmentalReading,

    /// European AQI reported alongside the air-quality reading, if known.
    pub european_aqi: Option<f64>,
}

/// Response payload for event operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AsthmaEventResponse {
    pub event_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub place: String,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub symptoms: String,
    pub reading: EnvironmentalReading,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub european_aqi: Option<f64>,
    pub recorded_at: DateTime<Utc>,
}

impl From<AsthmaEvent> for AsthmaEventResponse {
    fn from(event: AsthmaEvent) -> Self {
        Self {
            event_id: event.event_id,
            latitude: event.latitude,
            longitude: event.longitude,
            place: event.place,
            year: event.year,
            month: event.month,
            day: event.day,
            hour: event.hour,
            symptoms: event.symptoms,
            reading: event.reading,
            european_aqi: event.european_aqi,
            recorded_at: event.recorded_at,
        }
    }
}
