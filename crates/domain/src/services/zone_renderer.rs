//! Safety zone overlay rendering.
//!
//! Turns a zone into the concentric circle set a map surface draws: a
//! faint wide halo shrinking to a denser core. Output is independent of
//! the rendering surface.

use crate::models::{SafetyZone, ZoneOverlayLayer};

/// Number of concentric gradient layers per zone.
const GRADIENT_LAYERS: u32 = 5;

/// Peak fill alpha (applied to the innermost layer's ratio of 1.0).
const MAX_FILL_ALPHA: f64 = 40.0;

/// Base z-index for the outermost layer; inner layers paint on top.
const BASE_DRAW_ORDER: i32 = 1000;

/// Fill/stroke base color for a safe zone.
const SAFE_COLOR: &str = "#00E400";

/// Fill/stroke base color for an unsafe zone.
const UNSAFE_COLOR: &str = "#FF0000";

/// Stroke value for layers that draw no outline.
const TRANSPARENT: &str = "transparent";

/// Derives the ordered overlay layers for a zone, outermost first.
///
/// Produces exactly [`GRADIENT_LAYERS`] layers, or an empty vec when no
/// zone is present. Layer `i` shrinks the radius and fill opacity by the
/// ratio `(5 - i) / 5`; only the outermost layer draws a solid stroke.
/// Pure over its input, so rendering the same zone twice yields
/// identical sequences.
pub fn render_zone(zone: Option<&SafetyZone>) -> Vec<ZoneOverlayLayer> {
    let Some(zone) = zone else {
        return Vec::new();
    };

    let base_color = if zone.is_safe { SAFE_COLOR } else { UNSAFE_COLOR };

    (0..GRADIENT_LAYERS)
        .map(|index| {
            let ratio = (GRADIENT_LAYERS - index) as f64 / GRADIENT_LAYERS as f64;
            let alpha = (ratio * MAX_FILL_ALPHA).round() as u8;

            ZoneOverlayLayer {
                center_lat: zone.latitude,
                center_lon: zone.longitude,
                radius_meters: zone.radius_meters * ratio,
                fill_color: format!("{base_color}{alpha:02x}"),
                stroke_color: if index == 0 {
                    base_color.to_string()
                } else {
                    TRANSPARENT.to_string()
                },
                draw_order: BASE_DRAW_ORDER - index as i32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(is_safe: bool) -> SafetyZone {
        SafetyZone {
            latitude: 0.0,
            longitude: 0.0,
            radius_meters: 1000.0,
            is_safe,
        }
    }

    #[test]
    fn test_no_zone_renders_nothing() {
        assert!(render_zone(None).is_empty());
    }

    #[test]
    fn test_safe_zone_produces_five_layers() {
        let layers = render_zone(Some(&zone(true)));
        assert_eq!(layers.len(), 5);

        // Outermost layer: full radius, solid stroke, alpha 40 -> 0x28.
        assert_eq!(layers[0].radius_meters, 1000.0);
        assert_eq!(layers[0].fill_color, "#00E40028");
        assert_eq!(layers[0].stroke_color, "#00E400");
        assert_eq!(layers[0].draw_order, 1000);

        // Innermost layer: one fifth radius, transparent stroke.
        assert_eq!(layers[4].radius_meters, 200.0);
        assert_eq!(layers[4].fill_color, "#00E40008");
        assert_eq!(layers[4].stroke_color, "transparent");
        assert_eq!(layers[4].draw_order, 996);
    }

    #[test]
    fn test_unsafe_zone_uses_red_base() {
        let layers = render_zone(Some(&zone(false)));
        assert_eq!(layers[0].fill_color, "#FF000028");
        assert_eq!(layers[0].stroke_color, "#FF0000");
        assert_eq!(layers[2].stroke_color, "transparent");
    }

    #[test]
    fn test_radii_shrink_linearly() {
        let layers = render_zone(Some(&zone(true)));
        let radii: Vec<f64> = layers.iter().map(|l| l.radius_meters).collect();
        assert_eq!(radii, vec![1000.0, 800.0, 600.0, 400.0, 200.0]);
    }

    #[test]
    fn test_alpha_bytes_are_zero_padded_lowercase_hex() {
        let layers = render_zone(Some(&zone(true)));
        let alphas: Vec<&str> = layers
            .iter()
            .map(|l| &l.fill_color[7..])
            .collect();
        assert_eq!(alphas, vec!["28", "20", "18", "10", "08"]);
    }

    #[test]
    fn test_draw_order_paints_outer_first() {
        let layers = render_zone(Some(&zone(false)));
        let orders: Vec<i32> = layers.iter().map(|l| l.draw_order).collect();
        assert_eq!(orders, vec![1000, 999, 998, 997, 996]);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let z = zone(true);
        assert_eq!(render_zone(Some(&z)), render_zone(Some(&z)));
    }

    #[test]
    fn test_center_follows_zone_coordinate() {
        let z = SafetyZone {
            latitude: 51.5,
            longitude: -0.12,
            radius_meters: 500.0,
            is_safe: true,
        };
        let layers = render_zone(Some(&z));
        assert!(layers.iter().all(|l| l.center_lat == 51.5));
        assert!(layers.iter().all(|l| l.center_lon == -0.12));
        assert_eq!(layers[0].radius_meters, 500.0);
        assert_eq!(layers[4].radius_meters, 100.0);
    }
}
