use crate::algebra::Color4;

// floor(x + 0.5), the rounding the 8-bit color routine uses
#[inline]
fn round_to_byte(x: f32) -> f32 { (x + 0.5).floor() }

/// HSV to an opaque 8-bit color on the 0..255 scale.
///
/// `h` is in degrees; anything outside [0, 360) reads as 0. `s` and `v`
/// are clamped to [0, 1]. Every channel comes back as a whole number.
pub fn hsv_to_color4(h: f32, s: f32, v: f32) -> Color4 {
    let s = s.clamp(0.0, 1.0);
    let v = round_to_byte(v.clamp(0.0, 1.0) * 255.0);
    if s.abs() < 1.0 / 4096.0 {
        return Color4(v, v, v, 255.0);
    }

    let hx = if !(0.0..360.0).contains(&h) { 0.0 } else { h / 60.0 };
    let w = hx.floor();
    let f = hx - w;
    let p = round_to_byte((1.0 - s) * v);
    let q = round_to_byte((1.0 - s * f) * v);
    let t = round_to_byte((1.0 - s * (1.0 - f)) * v);

    let (r, g, b) = match w as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Color4(r, g, b, 255.0)
}
