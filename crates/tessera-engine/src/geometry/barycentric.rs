use crate::coords::Vec2;

/// Barycentric weights of a screen-space triangle, for interpolating vertex
/// attributes (UVs, color channels) at arbitrary points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Barycentric {
    p0: [f64; 2],
    p1: [f64; 2],
    p2: [f64; 2],
    divisor: f64,
}

impl Barycentric {
    /// Returns `None` for zero-area triangles.
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2) -> Option<Self> {
        let p0 = [p0.x as f64, p0.y as f64];
        let p1 = [p1.x as f64, p1.y as f64];
        let p2 = [p2.x as f64, p2.y as f64];
        let divisor = (p1[1] - p2[1]) * (p0[0] - p2[0]) + (p2[0] - p1[0]) * (p0[1] - p2[1]);
        if divisor == 0.0 || !divisor.is_finite() {
            return None;
        }
        Some(Self { p0, p1, p2, divisor })
    }

    /// Weights `[w0, w1, w2]` at `(x, y)`; they sum to one.
    #[inline]
    pub fn weights(&self, x: f64, y: f64) -> [f64; 3] {
        let (p0, p1, p2) = (self.p0, self.p1, self.p2);
        let dx = x - p2[0];
        let dy = y - p2[1];
        let w0 = ((p1[1] - p2[1]) * dx + (p2[0] - p1[0]) * dy) / self.divisor;
        let w1 = ((p2[1] - p0[1]) * dx + (p0[0] - p2[0]) * dy) / self.divisor;
        [w0, w1, 1.0 - w0 - w1]
    }

    /// Weighted combination of per-vertex `values` at `(x, y)`.
    #[inline]
    pub fn interpolate(&self, values: [f64; 3], x: f64, y: f64) -> f64 {
        let [w0, w1, w2] = self.weights(x, y);
        w0 * values[0] + w1 * values[1] + w2 * values[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Barycentric {
        Barycentric::new(Vec2::new(0.0, 0.0), Vec2::new(8.0, 0.0), Vec2::new(0.0, 4.0)).unwrap()
    }

    #[test]
    fn vertices_get_their_own_value() {
        let b = tri();
        let values = [1.0, 2.0, 3.0];
        assert!((b.interpolate(values, 0.0, 0.0) - 1.0).abs() < 1e-12);
        assert!((b.interpolate(values, 8.0, 0.0) - 2.0).abs() < 1e-12);
        assert!((b.interpolate(values, 0.0, 4.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn interpolation_is_linear_along_an_edge() {
        let b = tri();
        assert!((b.interpolate([0.0, 1.0, 0.0], 4.0, 0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn weights_sum_to_one() {
        let [w0, w1, w2] = tri().weights(3.3, 1.7);
        assert!((w0 + w1 + w2 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_area_has_no_weights() {
        let p = Vec2::new(1.0, 1.0);
        assert!(Barycentric::new(p, Vec2::new(2.0, 2.0), Vec2::new(3.0, 3.0)).is_none());
    }
}
