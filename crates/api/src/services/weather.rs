//! Open-Meteo provider client.
//!
//! Fetches current weather and current air quality from two independent
//! endpoints and joins them into a single [`EnvironmentalReading`]. The
//! two requests run concurrently; neither is ordered before the other,
//! classification only needs both results.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::WeatherConfig;
use domain::models::EnvironmentalReading;

/// Variables requested from the forecast endpoint.
const CURRENT_WEATHER_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m";

/// Variables requested from the air-quality endpoint.
const CURRENT_AIR_QUALITY_FIELDS: &str =
    "pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,european_aqi";

/// Errors that can occur while talking to the provider.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {status} from {endpoint}")]
    Status {
        endpoint: &'static str,
        status: u16,
    },

    #[error("Provider response from {0} is missing current conditions")]
    MissingCurrent(&'static str),
}

/// Current conditions joined from both provider endpoints.
#[derive(Debug, Clone, Copy)]
pub struct CurrentConditions {
    pub reading: EnvironmentalReading,
    /// WMO weather interpretation code.
    pub weather_code: i32,
    /// European AQI; surfaced for display, not consulted by the classifier.
    pub european_aqi: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: i32,
    wind_speed_10m: f64,
}

#[derive(Debug, Deserialize)]
struct AirQualityResponse {
    current: Option<CurrentAirQuality>,
}

#[derive(Debug, Deserialize)]
struct CurrentAirQuality {
    pm10: f64,
    pm2_5: f64,
    carbon_monoxide: f64,
    nitrogen_dioxide: f64,
    european_aqi: f64,
}

/// Client for the Open-Meteo weather and air-quality APIs.
#[derive(Clone)]
pub struct WeatherClient {
    http: Client,
    forecast_url: String,
    air_quality_url: String,
}

impl WeatherClient {
    /// Builds a client from configuration.
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            forecast_url: config.forecast_url.clone(),
            air_quality_url: config.air_quality_url.clone(),
        })
    }

    /// Fetches current weather and air quality for a coordinate.
    ///
    /// Both requests are issued concurrently and joined before returning;
    /// the first failure aborts the pair.
    pub async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentConditions, WeatherError> {
        let (weather, air_quality) = tokio::try_join!(
            self.fetch_current_weather(latitude, longitude),
            self.fetch_current_air_quality(latitude, longitude),
        )?;

        debug!(
            latitude,
            longitude,
            temperature = weather.temperature_2m,
            european_aqi = air_quality.european_aqi,
            "Fetched current conditions"
        );

        Ok(CurrentConditions {
            reading: EnvironmentalReading {
                temperature: weather.temperature_2m,
                humidity: weather.relative_humidity_2m,
                wind_speed: weather.wind_speed_10m,
                pm25: air_quality.pm2_5,
                pm10: air_quality.pm10,
                no2: air_quality.nitrogen_dioxide,
                co: air_quality.carbon_monoxide,
            },
            weather_code: weather.weather_code,
            european_aqi: air_quality.european_aqi,
        })
    }

    async fn fetch_current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentWeather, WeatherError> {
        let response = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_WEATHER_FIELDS.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status {
                endpoint: "forecast",
                status: response.status().as_u16(),
            });
        }

        let body: ForecastResponse = response.json().await?;
        body.current
            .ok_or(WeatherError::MissingCurrent("forecast"))
    }

    async fn fetch_current_air_quality(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentAirQuality, WeatherError> {
        let response = self
            .http
            .get(&self.air_quality_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_AIR_QUALITY_FIELDS.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(WeatherError::Status {
                endpoint: "air-quality",
                status: response.status().as_u16(),
            });
        }

        let body: AirQualityResponse = response.json().await?;
        body.current
            .ok_or(WeatherError::MissingCurrent("air-quality"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// Spawns a listener that answers every connection with `response`
    /// and returns its base URL.
    async fn canned_server(response: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    let _ = socket.read(&mut buf).await;
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        format!("http://{addr}")
    }

    fn client_for(base_url: String) -> WeatherClient {
        WeatherClient::new(&WeatherConfig {
            forecast_url: base_url.clone(),
            air_quality_url: base_url,
            timeout_ms: 2_000,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_provider_error_status_is_surfaced() {
        let base = canned_server(
            "HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let client = client_for(base);

        let err = client.current_conditions(48.2, 16.37).await.unwrap_err();
        assert!(matches!(err, WeatherError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_response_without_current_block_is_rejected() {
        let base = canned_server(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 2\r\nconnection: close\r\n\r\n{}",
        )
        .await;
        let client = client_for(base);

        let err = client.current_conditions(48.2, 16.37).await.unwrap_err();
        assert!(matches!(err, WeatherError::MissingCurrent(_)));
    }

    #[test]
    fn test_forecast_response_parses_provider_shape() {
        let json = r#"{
            "latitude": 48.2,
            "longitude": 16.37,
            "current_units": {"temperature_2m": "°C"},
            "current": {
                "time": "2026-08-25T12:00",
                "temperature_2m": 27.4,
                "relative_humidity_2m": 48,
                "weather_code": 3,
                "wind_speed_10m": 11.2
            }
        }"#;

        let body: ForecastResponse = serde_json::from_str(json).unwrap();
        let current = body.current.unwrap();
        assert_eq!(current.temperature_2m, 27.4);
        assert_eq!(current.relative_humidity_2m, 48.0);
        assert_eq!(current.weather_code, 3);
        assert_eq!(current.wind_speed_10m, 11.2);
    }

    #[test]
    fn test_air_quality_response_parses_provider_shape() {
        let json = r#"{
            "latitude": 48.2,
            "longitude": 16.37,
            "current": {
                "time": "2026-08-25T12:00",
                "pm10": 14.1,
                "pm2_5": 8.3,
                "carbon_monoxide": 211.0,
                "nitrogen_dioxide": 17.6,
                "european_aqi": 31.0
            }
        }"#;

        let body: AirQualityResponse = serde_json::from_str(json).unwrap();
        let current = body.current.unwrap();
        assert_eq!(current.pm2_5, 8.3);
        assert_eq!(current.carbon_monoxide, 211.0);
        assert_eq!(current.european_aqi, 31.0);
    }

    #[test]
    fn test_missing_current_block_is_none() {
        let body: ForecastResponse = serde_json::from_str(r#"{"latitude": 1.0}"#).unwrap();
        assert!(body.current.is_none());
    }
}
