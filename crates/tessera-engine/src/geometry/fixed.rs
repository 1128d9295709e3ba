use crate::coords::{IRect, Vec2};

use super::EdgeFunction;

/// Fractional bits of the fixed-point grid.
pub const SUBPIXEL_BITS: u32 = 4;

/// Fixed-point units per pixel.
pub const SUBPIXEL_SCALE: f32 = (1 << SUBPIXEL_BITS) as f32;

const SUBPIXEL_MASK: i32 = (1 << SUBPIXEL_BITS) - 1;

/// Largest fixed-point magnitude a coordinate is clamped to: 2^27 steps, a
/// little over 8 million pixels in either direction.
pub const FIXED_LIMIT: i32 = 1 << 27;

/// Converts a pixel coordinate to fixed point, rounding to the nearest step.
///
/// Results are clamped to `[-FIXED_LIMIT, FIXED_LIMIT]` so snapping and edge
/// arithmetic stay in range for any finite input. NaN maps to 0.
#[inline]
pub fn to_fixed(v: f32) -> i32 {
    let limit = FIXED_LIMIT as f32;
    (v * SUBPIXEL_SCALE).round().clamp(-limit, limit) as i32
}

/// Smallest pixel index whose sample point (the pixel's top-left corner) is
/// at or after the fixed-point coordinate `v`.
///
/// Arithmetic shift keeps this a ceiling for negative coordinates too.
#[inline]
pub const fn snap_up(v: i32) -> i32 {
    (v + SUBPIXEL_MASK) >> SUBPIXEL_BITS
}

/// A point on the fixed-point grid.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FixedPoint {
    pub x: i32,
    pub y: i32,
}

impl FixedPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn from_vec2(p: Vec2) -> Self {
        Self::new(to_fixed(p.x), to_fixed(p.y))
    }

    /// Moves the point by whole pixels.
    #[inline]
    pub const fn offset_pixels(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + (dx << SUBPIXEL_BITS), self.y + (dy << SUBPIXEL_BITS))
    }
}

/// Twice the signed area of `p0 p1 p2`.
///
/// Positive when the vertices run counter-clockwise in a y-up frame, which is
/// clockwise on screen.
#[inline]
pub fn doubled_area(p0: FixedPoint, p1: FixedPoint, p2: FixedPoint) -> i64 {
    let (x0, y0) = (p0.x as i64, p0.y as i64);
    let (x1, y1) = (p1.x as i64, p1.y as i64);
    let (x2, y2) = (p2.x as i64, p2.y as i64);
    (x1 - x0) * (y2 - y0) - (y1 - y0) * (x2 - x0)
}

/// A non-degenerate triangle snapped to the fixed-point grid, with positive
/// winding and its covered pixel range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FixedTriangle {
    vertices: [FixedPoint; 3],
    pixel_bounds: IRect,
}

impl FixedTriangle {
    /// Snaps `positions` to the grid.
    ///
    /// Returns `None` for zero-area triangles and for triangles whose pixel
    /// range is empty; those can never cover a sample point.
    pub fn new(positions: [Vec2; 3]) -> Option<Self> {
        Self::from_fixed(positions.map(FixedPoint::from_vec2))
    }

    pub fn from_fixed(points: [FixedPoint; 3]) -> Option<Self> {
        let [p0, mut p1, mut p2] = points;
        let area = doubled_area(p0, p1, p2);
        if area == 0 {
            return None;
        }
        if area < 0 {
            core::mem::swap(&mut p1, &mut p2);
        }

        let min_x = p0.x.min(p1.x).min(p2.x);
        let min_y = p0.y.min(p1.y).min(p2.y);
        let max_x = p0.x.max(p1.x).max(p2.x);
        let max_y = p0.y.max(p1.y).max(p2.y);

        // Half-open [ceil(min), ceil(max)): a sample exactly on the max bound
        // lies on a right or bottom edge and is never owned by this triangle.
        let pixel_bounds =
            IRect::from_bounds(snap_up(min_x), snap_up(min_y), snap_up(max_x), snap_up(max_y));
        if pixel_bounds.is_empty() {
            return None;
        }

        Some(Self { vertices: [p0, p1, p2], pixel_bounds })
    }

    /// Vertices in positive winding order.
    #[inline]
    pub fn vertices(&self) -> [FixedPoint; 3] {
        self.vertices
    }

    /// Pixels `[x, right) x [y, bottom)` that may be covered.
    #[inline]
    pub fn pixel_bounds(&self) -> IRect {
        self.pixel_bounds
    }

    /// The three directed edges, each positive on the interior side.
    #[inline]
    pub fn edges(&self) -> [EdgeFunction; 3] {
        let [p0, p1, p2] = self.vertices;
        [
            EdgeFunction::new(p0, p1),
            EdgeFunction::new(p1, p2),
            EdgeFunction::new(p2, p0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> Option<FixedTriangle> {
        FixedTriangle::new([Vec2::new(a.0, a.1), Vec2::new(b.0, b.1), Vec2::new(c.0, c.1)])
    }

    // ── conversion ────────────────────────────────────────────────────────

    #[test]
    fn to_fixed_rounds_to_nearest_sixteenth() {
        assert_eq!(to_fixed(1.0), 16);
        assert_eq!(to_fixed(0.03), 0);
        assert_eq!(to_fixed(0.04), 1);
        assert_eq!(to_fixed(-2.5), -40);
    }

    #[test]
    fn snap_up_is_ceiling() {
        assert_eq!(snap_up(0), 0);
        assert_eq!(snap_up(1), 1);
        assert_eq!(snap_up(16), 1);
        assert_eq!(snap_up(17), 2);
        assert_eq!(snap_up(-1), 0);
        assert_eq!(snap_up(-16), -1);
        assert_eq!(snap_up(-17), -1);
    }

    #[test]
    fn far_coordinates_are_clamped() {
        assert_eq!(to_fixed(2.0e8), FIXED_LIMIT);
        assert_eq!(to_fixed(-1.0e30), -FIXED_LIMIT);
        assert_eq!(to_fixed(f32::INFINITY), FIXED_LIMIT);
        assert_eq!(to_fixed(f32::NAN), 0);
        assert_eq!(snap_up(FIXED_LIMIT), FIXED_LIMIT >> SUBPIXEL_BITS);
    }

    #[test]
    fn far_vertex_still_snaps() {
        let t = tri((0.0, 0.0), (2.0e8, 0.0), (0.0, 10.0)).unwrap();
        assert_eq!(t.pixel_bounds(), IRect::from_bounds(0, 0, FIXED_LIMIT >> SUBPIXEL_BITS, 10));
    }

    // ── triangle snapping ─────────────────────────────────────────────────

    #[test]
    fn pixel_bounds_are_half_open() {
        let t = tri((0.0, 0.0), (10.0, 0.0), (0.0, 10.0)).unwrap();
        assert_eq!(t.pixel_bounds(), IRect::new(0, 0, 10, 10));
    }

    #[test]
    fn fractional_max_keeps_last_sampled_pixel() {
        let t = tri((0.0, 0.0), (9.5, 0.0), (0.0, 9.5)).unwrap();
        assert_eq!(t.pixel_bounds(), IRect::new(0, 0, 10, 10));
    }

    #[test]
    fn winding_is_normalized() {
        let cw = tri((0.0, 0.0), (0.0, 10.0), (10.0, 0.0)).unwrap();
        let [p0, p1, p2] = cw.vertices();
        assert!(doubled_area(p0, p1, p2) > 0);
    }

    #[test]
    fn collinear_is_rejected() {
        assert!(tri((0.0, 0.0), (5.0, 5.0), (10.0, 10.0)).is_none());
    }

    #[test]
    fn sliver_between_samples_is_rejected() {
        // Spans x in (0.25, 0.75): no integer sample column.
        assert!(tri((0.25, 0.0), (0.75, 0.0), (0.5, 4.0)).is_none());
    }
}
