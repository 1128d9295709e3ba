use crate::geometry::Barycentric;
use crate::paint::Color;
use crate::scene::DrawVert;
use crate::texture::Texture;

/// Per-pixel color source for the scan converter.
pub trait ColorRule {
    /// Color of covered pixel `(px, py)` in surface coordinates.
    fn color_at(&self, px: i32, py: i32) -> Color;
}

/// One color for every pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ConstantColor(pub Color);

impl ColorRule for ConstantColor {
    #[inline]
    fn color_at(&self, _px: i32, _py: i32) -> Color {
        self.0
    }
}

/// Barycentric UV and shade interpolation at pixel centers, then
/// `shade * texel`.
#[derive(Debug, Clone)]
pub struct Interpolated<'a> {
    bary: Barycentric,
    u: [f64; 3],
    v: [f64; 3],
    /// Per channel (r, g, b, a), per vertex.
    shade: [[f64; 3]; 4],
    texture: &'a Texture,
}

impl<'a> Interpolated<'a> {
    /// Returns `None` for a zero-area triangle.
    pub fn new(verts: &[DrawVert; 3], texture: &'a Texture) -> Option<Self> {
        let bary = Barycentric::new(verts[0].pos, verts[1].pos, verts[2].pos)?;
        let colors = verts.map(|v| Color::from_packed(v.col));
        let channel = |f: fn(&Color) -> f32| colors.each_ref().map(|c| f(c) as f64);
        Some(Self {
            bary,
            u: verts.map(|v| v.uv.x as f64),
            v: verts.map(|v| v.uv.y as f64),
            shade: [channel(|c| c.r), channel(|c| c.g), channel(|c| c.b), channel(|c| c.a)],
            texture,
        })
    }
}

impl ColorRule for Interpolated<'_> {
    fn color_at(&self, px: i32, py: i32) -> Color {
        let x = px as f64 + 0.5;
        let y = py as f64 + 0.5;
        let w = self.bary.weights(x, y);
        let mix = |vals: &[f64; 3]| w[0] * vals[0] + w[1] * vals[1] + w[2] * vals[2];

        let texel = self.texture.sample(mix(&self.u), mix(&self.v));
        let [r, g, b, a] = self.shade.each_ref().map(|c| mix(c) as f32);
        Color::new(r, g, b, a) * texel
    }
}
