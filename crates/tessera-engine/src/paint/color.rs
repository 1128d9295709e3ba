use core::ops::Mul;

/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// Decoded from the host GUI's packed 32-bit vertex colors; arithmetic is
/// component-wise so a texel can be modulated by a vertex shade with `*`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Decodes a packed vertex color.
    ///
    /// Byte order is `0xAABBGGRR`: red lives in the low byte, alpha in the high byte.
    #[inline]
    pub fn from_packed(packed: u32) -> Self {
        Self::from_rgba8(packed.to_le_bytes())
    }

    /// Packs the color back into `0xAABBGGRR` form.
    #[inline]
    pub fn to_packed(self) -> u32 {
        u32::from_le_bytes(self.to_rgba8())
    }

    /// Creates a color from straight RGBA bytes (`0`–`255`).
    #[inline]
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Quantizes to RGBA bytes, clamping each channel to `[0, 1]` and rounding
    /// to the nearest step.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        #[inline]
        fn q(c: f32) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl Mul for Color {
    type Output = Color;
    #[inline]
    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b, self.a * rhs.a)
    }
}
