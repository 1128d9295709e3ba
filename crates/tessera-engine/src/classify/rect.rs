use crate::scene::DrawVert;

use super::{BoundingBox, Corner};

/// Two triangles recognized as one axis-aligned, uniformly colored rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DetectedRect {
    pub bbox: BoundingBox,
    pub col: u32,
}

/// Recognizes the quad pattern GUI libraries emit for filled rectangles and
/// images: six vertices of one color, all on corners of the first triangle's
/// box, with a texture mapping aligned to the box.
///
/// The two triangles must be the halves of the box on either side of one
/// diagonal, so their union is exactly the rectangle.
pub fn detect_rectangle(first: &[DrawVert; 3], second: &[DrawVert; 3]) -> Option<DetectedRect> {
    let col = first[0].col;
    let bbox = BoundingBox::from_triangle(first);

    let missing_first = missing_corner(&bbox, first, col)?;
    let missing_second = missing_corner(&bbox, second, col)?;
    if missing_first != missing_second.opposite() {
        return None;
    }

    Some(DetectedRect { bbox, col })
}

/// The box corner a triangle leaves out, when its vertices sit on three
/// distinct corners with color `col` and box-aligned UVs.
fn missing_corner(bbox: &BoundingBox, verts: &[DrawVert; 3], col: u32) -> Option<Corner> {
    let mut seen = 0u8;
    for v in verts {
        if v.col != col {
            return None;
        }
        let corner = bbox.corner_of(v.pos)?;
        if v.uv != bbox.uv_at(corner) {
            return None;
        }
        seen |= corner.bit();
    }
    if seen.count_ones() != 3 {
        return None;
    }
    let missing = (!seen & 0b1111).trailing_zeros() as u8;
    Some(Corner::from_index(missing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    const COL: u32 = 0xFF20_40C0;

    fn v(x: f32, y: f32, u: f32, w: f32) -> DrawVert {
        DrawVert::new(Vec2::new(x, y), Vec2::new(u, w), COL)
    }

    /// tl, tr, br, bl with a full 0..1 UV mapping.
    fn quad() -> [DrawVert; 4] {
        [v(2.0, 3.0, 0.0, 0.0), v(10.0, 3.0, 1.0, 0.0), v(10.0, 9.0, 1.0, 1.0), v(2.0, 9.0, 0.0, 1.0)]
    }

    fn tris(q: [DrawVert; 4], a: [usize; 3], b: [usize; 3]) -> ([DrawVert; 3], [DrawVert; 3]) {
        (a.map(|i| q[i]), b.map(|i| q[i]))
    }

    #[test]
    fn gui_quad_pattern_is_a_rectangle() {
        let (a, b) = tris(quad(), [0, 1, 2], [0, 2, 3]);
        let r = detect_rectangle(&a, &b).unwrap();
        assert_eq!(r.col, COL);
        assert_eq!(r.bbox.min, Vec2::new(2.0, 3.0));
        assert_eq!(r.bbox.max, Vec2::new(10.0, 9.0));
    }

    #[test]
    fn other_diagonal_and_winding_also_match() {
        let (a, b) = tris(quad(), [1, 0, 3], [1, 3, 2]);
        assert!(detect_rectangle(&a, &b).is_some());
    }

    #[test]
    fn overlapping_halves_are_not_a_rectangle() {
        // Both triangles cover the top-right half.
        let (a, b) = tris(quad(), [0, 1, 2], [2, 1, 0]);
        assert!(detect_rectangle(&a, &b).is_none());
        // Halves of different diagonals leave a gap.
        let (a, b) = tris(quad(), [0, 1, 2], [0, 1, 3]);
        assert!(detect_rectangle(&a, &b).is_none());
    }

    #[test]
    fn mixed_colors_are_rejected() {
        let (a, mut b) = tris(quad(), [0, 1, 2], [0, 2, 3]);
        b[2].col = 0xFFFF_FFFF;
        assert!(detect_rectangle(&a, &b).is_none());
    }

    #[test]
    fn off_corner_vertex_is_rejected() {
        let (a, mut b) = tris(quad(), [0, 1, 2], [0, 2, 3]);
        b[2].pos = Vec2::new(2.0, 8.5);
        assert!(detect_rectangle(&a, &b).is_none());
    }

    #[test]
    fn flipped_uv_mapping_is_rejected() {
        let mut q = quad();
        for vert in &mut q {
            vert.uv.x = 1.0 - vert.uv.x;
        }
        let (a, b) = tris(q, [0, 1, 2], [0, 2, 3]);
        assert!(detect_rectangle(&a, &b).is_none());
    }
}
