use serde::Deserialize;

/// Four float channels (R, G, B, A) on the 0..255 scale.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Color4(pub f32, pub f32, pub f32, pub f32);

impl Color4 {
    pub fn add(self, v: Self) -> Self { Self(self.0+v.0, self.1+v.1, self.2+v.2, self.3+v.3) }
    pub fn sub(self, v: Self) -> Self { Self(self.0-v.0, self.1-v.1, self.2-v.2, self.3-v.3) }
    pub fn scale(self, f: f32) -> Self { Self(self.0*f, self.1*f, self.2*f, self.3*f) }
    pub fn dot(self, v: Self) -> f32 { self.0*v.0 + self.1*v.1 + self.2*v.2 + self.3*v.3 }

    /// `self + (to - self) * t`, not clamped.
    #[inline]
    pub fn lerp(self, to: Self, t: f32) -> Self { self.add(to.sub(self).scale(t)) }

    pub fn map(self, f: impl Fn(f32) -> f32) -> Self { Self(f(self.0), f(self.1), f(self.2), f(self.3)) }

    pub fn is_finite(self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite() && self.3.is_finite()
    }
}

impl From<[f32; 4]> for Color4 {
    fn from(a: [f32; 4]) -> Self { Color4(a[0], a[1], a[2], a[3]) }
}

impl From<Color4> for [f32; 4] {
    fn from(c: Color4) -> Self { [c.0, c.1, c.2, c.3] }
}

impl From<[u8; 4]> for Color4 {
    fn from(a: [u8; 4]) -> Self { Color4(a[0] as f32, a[1] as f32, a[2] as f32, a[3] as f32) }
}

/* Serde helper: JSON `[r, g, b, a]` into Color4 */
pub fn color4_from_array<'de, D>(d: D) -> Result<Color4, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let arr = <[f32; 4]>::deserialize(d)?;
    Ok(arr.into())
}
