//! Triangle classification.
//!
//! Walks a command's index run three indices at a time and decides how each
//! piece of geometry is drawn:
//! - two triangles forming an axis-aligned uniform quad become one rectangle
//! - uniform-color untextured triangles take the cached fast path
//! - everything else is rasterized generically

mod bbox;
mod rect;

pub use bbox::{BoundingBox, Corner};
pub use rect::{detect_rectangle, DetectedRect};

use crate::geometry::FixedTriangle;
use crate::scene::DrawVert;
use crate::texture::Texture;

/// How a single triangle is drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TriangleClass {
    /// Covers no sample point; skipped.
    Degenerate,
    /// One color, no texturing. Cacheable.
    UniformColor(FixedTriangle),
    /// Per-pixel interpolation and sampling.
    Generic(FixedTriangle),
}

impl TriangleClass {
    pub fn of(verts: &[DrawVert; 3], bbox: &BoundingBox, texture: &Texture) -> Self {
        let Some(tri) = FixedTriangle::new(verts.map(|v| v.pos)) else {
            return TriangleClass::Degenerate;
        };
        let uniform = verts[0].col == verts[1].col && verts[1].col == verts[2].col;
        if uniform && bbox.uses_only_color(texture) {
            TriangleClass::UniformColor(tri)
        } else {
            TriangleClass::Generic(tri)
        }
    }
}

/// One unit of work produced from an index run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Primitive {
    Rect(DetectedRect),
    Triangle { verts: [DrawVert; 3], bbox: BoundingBox },
    /// A triple referencing vertices past the end of the buffer.
    OutOfRange { first_index: usize },
}

/// Iterator over the primitives of one index run.
///
/// A trailing partial triple is ignored.
pub struct Primitives<'a> {
    vertices: &'a [DrawVert],
    indices: &'a [u32],
    cursor: usize,
    detect_rectangles: bool,
}

impl<'a> Primitives<'a> {
    pub fn new(vertices: &'a [DrawVert], indices: &'a [u32], detect_rectangles: bool) -> Self {
        Self { vertices, indices, cursor: 0, detect_rectangles }
    }

    fn triple(&self, at: usize) -> Option<Result<[DrawVert; 3], ()>> {
        let idx = self.indices.get(at..at + 3)?;
        let fetch = |i: u32| self.vertices.get(i as usize).copied();
        Some(match (fetch(idx[0]), fetch(idx[1]), fetch(idx[2])) {
            (Some(a), Some(b), Some(c)) => Ok([a, b, c]),
            _ => Err(()),
        })
    }
}

impl Iterator for Primitives<'_> {
    type Item = Primitive;

    fn next(&mut self) -> Option<Primitive> {
        let at = self.cursor;
        let Ok(first) = self.triple(at)? else {
            self.cursor += 3;
            return Some(Primitive::OutOfRange { first_index: at });
        };

        if self.detect_rectangles {
            if let Some(Ok(second)) = self.triple(at + 3) {
                if let Some(rect) = detect_rectangle(&first, &second) {
                    self.cursor += 6;
                    return Some(Primitive::Rect(rect));
                }
            }
        }

        self.cursor += 3;
        Some(Primitive::Triangle { bbox: BoundingBox::from_triangle(&first), verts: first })
    }
}
