use crate::coords::Vec2;
use crate::scene::DrawVert;
use crate::texture::Texture;

/// Position and UV extents of a triangle.
///
/// Invariant: `min <= max` and `uv_min <= uv_max` on every axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    pub min: Vec2,
    pub max: Vec2,
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

/// One of the four corners of a box: bit 0 set for the max x side, bit 1 for
/// the max y side.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Corner(u8);

impl Corner {
    #[inline]
    pub(crate) fn from_index(index: u8) -> Corner {
        Corner(index & 3)
    }

    #[inline]
    pub fn is_max_x(self) -> bool {
        self.0 & 1 != 0
    }

    #[inline]
    pub fn is_max_y(self) -> bool {
        self.0 & 2 != 0
    }

    #[inline]
    pub fn bit(self) -> u8 {
        1 << self.0
    }

    /// The diagonally opposite corner.
    #[inline]
    pub fn opposite(self) -> Corner {
        Corner(self.0 ^ 3)
    }
}

impl BoundingBox {
    pub fn from_triangle(verts: &[DrawVert; 3]) -> Self {
        let [v0, v1, v2] = verts;
        Self {
            min: v0.pos.min(v1.pos).min(v2.pos),
            max: v0.pos.max(v1.pos).max(v2.pos),
            uv_min: v0.uv.min(v1.uv).min(v2.uv),
            uv_max: v0.uv.max(v1.uv).max(v2.uv),
        }
    }

    /// The corner `p` sits on exactly, if any.
    pub fn corner_of(&self, p: Vec2) -> Option<Corner> {
        let x = if p.x == self.min.x {
            0
        } else if p.x == self.max.x {
            1
        } else {
            return None;
        };
        let y = if p.y == self.min.y {
            0
        } else if p.y == self.max.y {
            2
        } else {
            return None;
        };
        Some(Corner(x | y))
    }

    /// UV the box maps to `corner` under an axis-aligned texture mapping.
    pub fn uv_at(&self, corner: Corner) -> Vec2 {
        Vec2::new(
            if corner.is_max_x() { self.uv_max.x } else { self.uv_min.x },
            if corner.is_max_y() { self.uv_max.y } else { self.uv_min.y },
        )
    }

    /// True when the UV span is the texture's "vertex color only" sentinel.
    #[inline]
    pub fn uses_only_color(&self, texture: &Texture) -> bool {
        texture.is_solid_color_span(self.uv_min, self.uv_max)
    }
}
