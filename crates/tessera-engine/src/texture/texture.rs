use std::fmt;

use image::RgbaImage;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::surface::ImageId;

/// Error returned by [`Texture::from_rgba8`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    /// Width or height is zero.
    Empty,
    /// The byte buffer does not hold exactly `width * height * 4` bytes.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::Empty => write!(f, "texture error: zero-sized image"),
            TextureError::SizeMismatch { expected, actual } => {
                write!(f, "texture error: expected {expected} bytes of RGBA8, got {actual}")
            }
        }
    }
}

impl std::error::Error for TextureError {}

/// A source image: the surface-side handle used for region copies plus the
/// CPU pixels used for per-pixel sampling.
#[derive(Debug, Clone)]
pub struct Texture {
    image: ImageId,
    pixels: RgbaImage,
}

impl Texture {
    /// Binds CPU pixels to the surface image that holds the same content.
    pub fn new(image: ImageId, pixels: RgbaImage) -> Self {
        Self { image, pixels }
    }

    /// Builds a texture from tightly packed RGBA8 rows.
    pub fn from_rgba8(
        image: ImageId,
        width: u32,
        height: u32,
        bytes: Vec<u8>,
    ) -> Result<Self, TextureError> {
        if width == 0 || height == 0 {
            return Err(TextureError::Empty);
        }
        let expected = width as usize * height as usize * 4;
        let actual = bytes.len();
        let pixels = RgbaImage::from_raw(width, height, bytes)
            .filter(|_| actual == expected)
            .ok_or(TextureError::SizeMismatch { expected, actual })?;
        Ok(Self::new(image, pixels))
    }

    #[inline]
    pub fn image_id(&self) -> ImageId {
        self.image
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Nearest texel at normalized `(u, v)`, clamped to the image.
    pub fn sample(&self, u: f64, v: f64) -> Color {
        let x = texel_index(u, self.width());
        let y = texel_index(v, self.height());
        Color::from_rgba8(self.pixels.get_pixel(x, y).0)
    }

    /// The UV the host GUI uses to mean "no texture, just vertex color": the
    /// center of texel (0, 0).
    #[inline]
    pub fn solid_color_uv(&self) -> Vec2 {
        Vec2::new(0.5 / self.width() as f32, 0.5 / self.height() as f32)
    }

    /// True when the UV span `[min, max]` collapses onto the solid-color texel.
    #[inline]
    pub fn is_solid_color_span(&self, min: Vec2, max: Vec2) -> bool {
        let solid = self.solid_color_uv();
        min == max && min == solid
    }
}

#[inline]
fn texel_index(t: f64, size: u32) -> u32 {
    // NaN casts to 0; infinities saturate and are clamped.
    ((t * size as f64).floor() as i64).clamp(0, size as i64 - 1) as u32
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    fn checker() -> Texture {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(0, 1, Rgba([0, 255, 0, 255]));
        img.put_pixel(1, 1, Rgba([0, 0, 255, 255]));
        Texture::new(ImageId(1), img)
    }

    // ── sampling ──────────────────────────────────────────────────────────

    #[test]
    fn sample_picks_nearest_texel() {
        let t = checker();
        assert_eq!(t.sample(0.25, 0.25), Color::white());
        assert_eq!(t.sample(0.75, 0.25), Color::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(t.sample(0.25, 0.75), Color::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(t.sample(0.5, 0.5), Color::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn sample_clamps_outside_unit_square() {
        let t = checker();
        assert_eq!(t.sample(-3.0, -0.1), Color::white());
        assert_eq!(t.sample(1.0, 1.0), Color::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(t.sample(f64::NAN, 7.0), Color::new(0.0, 1.0, 0.0, 1.0));
    }

    // ── solid-color sentinel ──────────────────────────────────────────────

    #[test]
    fn solid_color_span_requires_collapsed_sentinel() {
        let t = checker();
        let white = Vec2::new(0.25, 0.25);
        assert_eq!(t.solid_color_uv(), white);
        assert!(t.is_solid_color_span(white, white));
        assert!(!t.is_solid_color_span(white, Vec2::new(0.25, 0.5)));
        assert!(!t.is_solid_color_span(Vec2::zero(), Vec2::zero()));
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn from_rgba8_checks_length() {
        assert_eq!(
            Texture::from_rgba8(ImageId(1), 2, 2, vec![0; 15]).unwrap_err(),
            TextureError::SizeMismatch { expected: 16, actual: 15 }
        );
        assert_eq!(
            Texture::from_rgba8(ImageId(1), 2, 2, vec![0; 20]).unwrap_err(),
            TextureError::SizeMismatch { expected: 16, actual: 20 }
        );
        assert_eq!(Texture::from_rgba8(ImageId(1), 0, 2, vec![]).unwrap_err(), TextureError::Empty);
        let t = Texture::from_rgba8(ImageId(1), 2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(t.pixels().get_pixel(1, 0).0, [5, 6, 7, 8]);
    }
}
