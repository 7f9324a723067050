//! src/tonemap.rs
//! --------------
//! Duotone kernel: luma picks a point between two tone colors, the tone is
//! shaded by that same luma, then blended back over the source pixel.

use crate::{algebra::Color4, color::hsv_to_color4};
use image::Rgba;

/// Rec. 601 luma weights. Alpha does not contribute.
pub const LUMA_WEIGHTS: Color4 = Color4(0.299, 0.587, 0.114, 0.0);

/// Saturation and value the tone hues are rendered with.
pub const TONE_SATURATION: f32 = 0.5;
pub const TONE_VALUE: f32 = 0.75;

/// Kernel parameters. Build once, then share by reference across workers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneConfig {
    pub dark_color: Color4,
    pub light_color: Color4,
    /// 0 keeps the source, 1 is fully toned. Values outside extrapolate.
    pub strength: f32,
}

impl ToneConfig {
    pub fn new(dark_color: Color4, light_color: Color4, strength: f32) -> Self {
        Self { dark_color, light_color, strength }
    }

    /// Tones from two hues (degrees) at the standard saturation/value.
    pub fn from_hues(dark_hue: f32, light_hue: f32, strength: f32) -> Self {
        Self {
            dark_color: hsv_to_color4(dark_hue, TONE_SATURATION, TONE_VALUE),
            light_color: hsv_to_color4(light_hue, TONE_SATURATION, TONE_VALUE),
            strength,
        }
    }

    /// Integer slider positions: two hues and a strength percentage.
    pub fn from_sliders(dark_hue: u32, light_hue: u32, strength_percent: u32) -> Self {
        Self::from_hues(dark_hue as f32, light_hue as f32, strength_percent as f32 / 100.0)
    }

    #[inline]
    pub fn apply(&self, pixel: Rgba<u8>) -> Rgba<u8> { apply(pixel, self) }
}

impl Default for ToneConfig {
    fn default() -> Self { Self::from_hues(30.0, 90.0, 0.8) }
}

/// Luma of a pixel, roughly in [0, 1].
#[inline]
pub fn intensity(pixel: Rgba<u8>) -> f32 {
    Color4::from(pixel.0).dot(LUMA_WEIGHTS) / 255.0
}

/// Tone color for a pixel before blending with the source.
#[inline]
pub fn toned_color(pixel: Rgba<u8>, config: &ToneConfig) -> Color4 {
    let i = intensity(pixel);
    // shaded by intensity on top of the interpolation
    config.dark_color.lerp(config.light_color, i).scale(i)
}

/// Round and clamp each channel into a byte. NaN becomes 0.
#[inline]
pub fn to_pixel(c: Color4) -> Rgba<u8> {
    let c = c.map(|x| x.round().clamp(0.0, 255.0));
    Rgba([c.0 as u8, c.1 as u8, c.2 as u8, c.3 as u8])
}

/// Apply the duotone transform to one pixel.
#[inline]
pub fn apply(pixel: Rgba<u8>, config: &ToneConfig) -> Rgba<u8> {
    let in_color = Color4::from(pixel.0);
    let toned = toned_color(pixel, config);
    to_pixel(in_color.lerp(toned, config.strength))
}
