//! Safety zone domain model.

use serde::{Deserialize, Serialize};

/// Radius applied to every zone produced by a safety check, in meters.
pub const DEFAULT_ZONE_RADIUS_METERS: f64 = 1000.0;

/// A circular map region around a queried coordinate, tagged safe or
/// unsafe by the classifier.
///
/// A zone is built once per successful classification and replaced
/// wholesale on the next query; it is never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyZone {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
    pub is_safe: bool,
}

impl SafetyZone {
    /// Builds a zone around a coordinate with the default radius.
    pub fn around(latitude: f64, longitude: f64, is_safe: bool) -> Self {
        Self {
            latitude,
            longitude,
            radius_meters: DEFAULT_ZONE_RADIUS_METERS,
            is_safe,
        }
    }
}
