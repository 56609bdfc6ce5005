//! Zone overlay layer model.

use serde::{Deserialize, Serialize};

/// One rendered circle in the concentric gradient used to depict a
/// safety zone.
///
/// Layers are derived synchronously from a [`super::SafetyZone`] and
/// regenerated on each render pass. `draw_order` determines paint order:
/// higher values paint on top, so the innermost circle lands last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneOverlayLayer {
    pub center_lat: f64,
    pub center_lon: f64,
    pub radius_meters: f64,
    /// RGBA hex string, e.g. `#00E40028`.
    pub fill_color: String,
    /// RGB hex string for the outermost layer, `transparent` otherwise.
    pub stroke_color: String,
    pub draw_order: i32,
}
