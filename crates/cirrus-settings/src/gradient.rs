//! Color gradients driving the sky's dynamic palette.
//!
//! Five gradients are sampled by the sky shader through 128x1 lookup rows:
//! night/day, horizon/zenith, sun halo, sun color, and cloud color. The
//! stock palettes ship as defaults; baking a row to an image file is the
//! asset pipeline's job, not ours.

use serde::{Deserialize, Serialize};

/// Width of a baked gradient lookup row, in texels.
pub const LOOKUP_RESOLUTION: usize = 128;

/// One color key: a position in [0, 1] and a linear RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientKey {
    pub t: f32,
    pub color: [f32; 3],
}

/// A piecewise-linear color gradient over [0, 1].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    keys: Vec<GradientKey>,
}

impl Gradient {
    /// Build a gradient from `(t, color)` keys. Keys are sorted by `t`.
    pub fn from_keys(mut keys: Vec<GradientKey>) -> Self {
        keys.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { keys }
    }

    pub fn keys(&self) -> &[GradientKey] {
        &self.keys
    }

    /// Sample the gradient at `t`.
    ///
    /// Outside the outermost keys the end colors are held; between keys
    /// colors interpolate linearly. An empty gradient evaluates to black.
    pub fn evaluate(&self, t: f32) -> [f32; 3] {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return [0.0; 3];
        };
        if t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }
        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= f32::EPSILON {
                    return b.color;
                }
                let w = (t - a.t) / span;
                return [
                    a.color[0] + (b.color[0] - a.color[0]) * w,
                    a.color[1] + (b.color[1] - a.color[1]) * w,
                    a.color[2] + (b.color[2] - a.color[2]) * w,
                ];
            }
        }
        last.color
    }

    /// Bake the gradient into an RGBA8 lookup row of `resolution` texels.
    ///
    /// Texel `x` samples at `x / resolution`, alpha is opaque. The caller
    /// owns turning the row into a texture.
    pub fn bake_row(&self, resolution: usize) -> Vec<[u8; 4]> {
        (0..resolution)
            .map(|x| {
                let c = self.evaluate(x as f32 / resolution as f32);
                [to_u8(c[0]), to_u8(c[1]), to_u8(c[2]), 255]
            })
            .collect()
    }
}

fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// RGB color from a 24-bit hex value.
fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

fn key(t: f32, hex: u32) -> GradientKey {
    GradientKey { t, color: rgb(hex) }
}

/// The five gradients the sky shader samples.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyGradients {
    /// Sky tint from deep night (0) to full day (1).
    pub night_day: Gradient,
    /// Sky color from horizon (0) to zenith (1).
    pub horizon_zenith: Gradient,
    /// Halo around the sun across the day cycle.
    pub sun_halo: Gradient,
    /// Sun disc color across the day cycle.
    pub sun_color: Gradient,
    /// Cloud tint across the day cycle.
    pub cloud_color: Gradient,
}

impl Default for SkyGradients {
    fn default() -> Self {
        Self {
            night_day: Gradient::from_keys(vec![
                key(0.0, 0x0D0E17),
                key(0.347, 0x13161D),
                key(0.721, 0x61B0D8),
                key(1.0, 0x4A87C8),
            ]),
            horizon_zenith: Gradient::from_keys(vec![
                key(0.0, 0x15151A),
                key(0.318, 0x284167),
                key(0.515, 0xFE6E00),
                key(0.622, 0xCF3663),
                key(0.675, 0xA8D5EC),
                key(1.0, 0xA7C7EA),
            ]),
            sun_halo: Gradient::from_keys(vec![
                key(0.0, 0x000000),
                key(0.174, 0x000000),
                key(0.526, 0xFD9E13),
                key(0.659, 0xABE2E7),
                key(1.0, 0xC7D9D8),
            ]),
            sun_color: Gradient::from_keys(vec![
                key(0.0, 0x000000),
                key(0.174, 0x000000),
                key(0.447, 0xFD5E13),
                key(0.653, 0xFAA4A4),
                key(1.0, 0xFFFFFF),
            ]),
            cloud_color: Gradient::from_keys(vec![
                key(0.0, 0x24262E),
                key(0.338, 0x2B2B2B),
                key(0.397, 0x352929),
                key(0.531, 0xEE2A42),
                key(0.614, 0xF5D952),
                key(0.709, 0xFFFFFF),
                key(1.0, 0xFFFFFF),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_hold_outer_colors() {
        let g = Gradient::from_keys(vec![key(0.2, 0xFF0000), key(0.8, 0x0000FF)]);
        assert_eq!(g.evaluate(0.0), [1.0, 0.0, 0.0]);
        assert_eq!(g.evaluate(0.2), [1.0, 0.0, 0.0]);
        assert_eq!(g.evaluate(1.0), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_midpoint_interpolates_linearly() {
        let g = Gradient::from_keys(vec![key(0.0, 0x000000), key(1.0, 0xFFFFFF)]);
        let mid = g.evaluate(0.5);
        for channel in mid {
            assert!((channel - 0.5).abs() < 1e-3, "expected gray, got {mid:?}");
        }
    }

    #[test]
    fn test_keys_are_sorted_on_construction() {
        let g = Gradient::from_keys(vec![key(0.9, 0xFFFFFF), key(0.1, 0x000000)]);
        assert!(g.keys()[0].t < g.keys()[1].t);
        // Darker near the start.
        assert!(g.evaluate(0.15)[0] < g.evaluate(0.85)[0]);
    }

    #[test]
    fn test_empty_gradient_is_black() {
        let g = Gradient::from_keys(vec![]);
        assert_eq!(g.evaluate(0.5), [0.0; 3]);
        assert!(g.bake_row(4).iter().all(|px| px[..3] == [0, 0, 0]));
    }

    #[test]
    fn test_bake_row_has_requested_resolution_and_opaque_alpha() {
        let g = SkyGradients::default().night_day;
        let row = g.bake_row(LOOKUP_RESOLUTION);
        assert_eq!(row.len(), LOOKUP_RESOLUTION);
        assert!(row.iter().all(|px| px[3] == 255));
    }

    #[test]
    fn test_stock_night_day_palette_endpoints() {
        let g = SkyGradients::default().night_day;
        // 0x0D0E17 at night, 0x4A87C8 at full day.
        assert_eq!(g.evaluate(0.0), rgb(0x0D0E17));
        assert_eq!(g.evaluate(1.0), rgb(0x4A87C8));
    }

    #[test]
    fn test_stock_horizon_zenith_sunset_band_is_orange() {
        let g = SkyGradients::default().horizon_zenith;
        let sunset = g.evaluate(0.515);
        // 0xFE6E00: strong red, mid green, no blue.
        assert!(sunset[0] > 0.9 && sunset[2] < 0.05, "expected orange, got {sunset:?}");
    }

    #[test]
    fn test_stock_cloud_palette_daytime_is_white() {
        let g = SkyGradients::default().cloud_color;
        assert_eq!(g.evaluate(0.8), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_gradients_roundtrip_through_ron() {
        let gradients = SkyGradients::default();
        let text = ron::to_string(&gradients).unwrap();
        let back: SkyGradients = ron::from_str(&text).unwrap();
        assert_eq!(gradients, back);
    }
}
