//! Asthma event entity (database row mapping).
//!
//! Maps to the `asthma_events` table.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::{AsthmaEvent, EnvironmentalReading};

/// Database row mapping for the asthma_events table.
#[derive(Debug, Clone, FromRow)]
pub struct AsthmaEventEntity {
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
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
    pub co: f64,
    pub european_aqi: Option<f64>,
    pub recorded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<AsthmaEventEntity> for AsthmaEvent {
    fn from(entity: AsthmaEventEntity) -> Self {
        Self {
            id: entity.id,
            event_id: entity.event_id,
            latitude: entity.latitude,
            longitude: entity.longitude,
            place: entity.place,
            year: entity.year,
            month: entity.month,
            day: entity.day,
            hour: entity.hour,
            symptoms: entity.symptoms,
            reading: EnvironmentalReading {
                temperature: entity.temperature,
                humidity: entity.humidity,
                wind_speed: entity.wind_speed,
                pm25: entity.pm25,
                pm10: entity.pm10,
                no2: entity.no2,
                co: entity.co,
            },
            european_aqi: entity.european_aqi,
            recorded_at: entity.recorded_at,
            created_at: entity.created_at,
        }
    }
}
