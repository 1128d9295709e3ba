use crate::geometry::{FixedPoint, SUBPIXEL_BITS};
use crate::scene::DrawVert;

/// One vertex of a [`CacheKey`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct KeyVertex {
    /// Fixed-point position relative to the key origin.
    pub x: i32,
    pub y: i32,
    /// Raw bit patterns of the UV.
    pub u: u32,
    pub v: u32,
    pub col: u32,
}

/// Translation-invariant descriptor of a triangle's rendered appearance.
///
/// Positions are taken on the rasterizer's fixed-point grid relative to an
/// integer pixel origin, so equal keys always scan-convert to the same pixels
/// at the same offset from the origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CacheKey {
    vertices: [KeyVertex; 3],
    width: i32,
    height: i32,
}

impl CacheKey {
    /// Builds the key for `verts` and returns it with its origin: the integer
    /// pixel at or before the snapped top-left of the triangle.
    pub fn new(verts: &[DrawVert; 3]) -> (Self, (i32, i32)) {
        let snapped = verts.map(|v| FixedPoint::from_vec2(v.pos));
        let min_x = snapped.iter().map(|p| p.x).min().unwrap_or_default();
        let min_y = snapped.iter().map(|p| p.y).min().unwrap_or_default();
        let max_x = snapped.iter().map(|p| p.x).max().unwrap_or_default();
        let max_y = snapped.iter().map(|p| p.y).max().unwrap_or_default();
        let (ox, oy) = (min_x >> SUBPIXEL_BITS, min_y >> SUBPIXEL_BITS);

        let mut vertices = [KeyVertex { x: 0, y: 0, u: 0, v: 0, col: 0 }; 3];
        for ((out, v), p) in vertices.iter_mut().zip(verts).zip(snapped) {
            let p = p.offset_pixels(-ox, -oy);
            *out = KeyVertex { x: p.x, y: p.y, u: v.uv.x.to_bits(), v: v.uv.y.to_bits(), col: v.col };
        }
        let width = max_x - min_x;
        let height = max_y - min_y;

        (Self { vertices, width, height }, (ox, oy))
    }

    #[inline]
    pub fn vertices(&self) -> &[KeyVertex; 3] {
        &self.vertices
    }

    /// Extent of the snapped vertices in fixed-point steps.
    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// The key's vertex positions back on the fixed-point grid, translated to
    /// `origin`.
    pub fn fixed_points(&self, origin: (i32, i32)) -> [FixedPoint; 3] {
        self.vertices.map(|v| FixedPoint::new(v.x, v.y).offset_pixels(origin.0, origin.1))
    }
}
