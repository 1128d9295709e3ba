use super::{FixedPoint, SUBPIXEL_BITS};

/// Edge function of a directed segment `p0 -> p1` on the fixed-point grid:
/// `E(x, y) = a*x + b*y + c` with `a = y0 - y1`, `b = x1 - x0`.
///
/// `E` is zero on the line and positive on the interior of a positively wound
/// triangle. Values are exact `i64`.
///
/// Tie breaking: a point with `E == 0` is inside iff `tie` is set, where `tie`
/// is the sign of `a`, or of `b` when `a == 0`. Reversing an edge flips the
/// sign of both coefficients, so exactly one of two triangles sharing an edge
/// owns the samples on it (top-left rule).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct EdgeFunction {
    a: i64,
    b: i64,
    c: i64,
    tie: bool,
}

impl EdgeFunction {
    pub fn new(p0: FixedPoint, p1: FixedPoint) -> Self {
        let (x0, y0) = (p0.x as i64, p0.y as i64);
        let (x1, y1) = (p1.x as i64, p1.y as i64);
        let a = y0 - y1;
        let b = x1 - x0;
        let c = -(a * x0 + b * y0);
        let tie = if a != 0 { a > 0 } else { b > 0 };
        Self { a, b, c, tie }
    }

    /// Value at a fixed-point position.
    #[inline]
    pub fn evaluate(&self, x: i64, y: i64) -> i64 {
        self.a * x + self.b * y + self.c
    }

    /// Value at the sample point of pixel `(px, py)`, biased by the tie flag so
    /// that "inside" is simply `> 0`.
    #[inline]
    pub fn biased_at_pixel(&self, px: i32, py: i32) -> i64 {
        let x = (px as i64) << SUBPIXEL_BITS;
        let y = (py as i64) << SUBPIXEL_BITS;
        self.evaluate(x, y) + self.tie as i64
    }

    /// Inside test for an unbiased value.
    #[inline]
    pub fn contains_value(&self, v: i64) -> bool {
        v > 0 || (v == 0 && self.tie)
    }

    #[inline]
    pub fn tie(&self) -> bool {
        self.tie
    }

    /// Change of `E` when moving one pixel right.
    #[inline]
    pub fn step_x(&self) -> i64 {
        self.a << SUBPIXEL_BITS
    }

    /// Change of `E` when moving one pixel down.
    #[inline]
    pub fn step_y(&self) -> i64 {
        self.b << SUBPIXEL_BITS
    }

    /// The same edge traversed the other way.
    #[inline]
    pub fn reversed(&self) -> Self {
        let tie = if self.a != 0 { self.a < 0 } else { self.b < 0 };
        Self { a: -self.a, b: -self.b, c: -self.c, tie }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(x: i32, y: i32) -> FixedPoint {
        FixedPoint::new(x << SUBPIXEL_BITS, y << SUBPIXEL_BITS)
    }

    #[test]
    fn zero_on_line_positive_inside() {
        // Top edge of a positively wound triangle, interior below (+y).
        let e = EdgeFunction::new(px(0, 0), px(10, 0));
        assert_eq!(e.evaluate(5 << 4, 0), 0);
        assert!(e.evaluate(5 << 4, 3 << 4) > 0);
        assert!(e.evaluate(5 << 4, -(3 << 4)) < 0);
    }

    #[test]
    fn horizontal_top_edge_owns_ties() {
        let e = EdgeFunction::new(px(0, 0), px(10, 0));
        assert!(e.tie());
        assert!(e.contains_value(0));
        assert!(!e.reversed().contains_value(0));
    }

    #[test]
    fn reversed_edge_flips_tie_and_sign() {
        let e = EdgeFunction::new(px(1, 7), px(4, 2));
        let r = EdgeFunction::new(px(4, 2), px(1, 7));
        assert_eq!(e.reversed(), r);
        assert_ne!(e.tie(), r.tie());
        for (x, y) in [(0, 0), (3, 3), (-5, 9)] {
            assert_eq!(e.evaluate(x, y), -r.evaluate(x, y));
        }
    }

    #[test]
    fn steps_match_direct_evaluation() {
        let e = EdgeFunction::new(FixedPoint::new(3, 70), FixedPoint::new(101, -9));
        let base = e.biased_at_pixel(2, 5);
        assert_eq!(base + e.step_x(), e.biased_at_pixel(3, 5));
        assert_eq!(base + e.step_y(), e.biased_at_pixel(2, 6));
    }
}
