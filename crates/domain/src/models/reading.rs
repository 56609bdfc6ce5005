//! Environmental reading domain model.

use serde::{Deserialize, Serialize};

/// A snapshot of weather and air-quality conditions at a coordinate.
///
/// Values come straight from the provider response; none of the fields
/// carries an enforced upper bound and negative values are accepted as-is.
/// Readings are built per query and never persisted by the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalReading {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent (0-100 from the provider).
    pub humidity: f64,
    /// Wind speed in km/h.
    pub wind_speed: f64,
    /// PM2.5 concentration in ug/m3.
    pub pm25: f64,
    /// PM10 concentration in ug/m3.
    pub pm10: f64,
    /// Nitrogen dioxide concentration in ug/m3.
    pub no2: f64,
    /// Carbon monoxide concentration in ug/m3.
    pub co: f64,
}
