/// Integer pixel rectangle: clip rects, destination and source regions.
///
/// Half-open: covers `[x, x + width) x [y, y + height)`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl IRect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds a rect from a half-open pixel range `[x0, x1) x [y0, y1)`.
    #[inline]
    pub const fn from_bounds(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x < self.right() && y < self.bottom()
    }

    /// Same rect moved by `(dx, dy)`.
    #[inline]
    pub const fn translated(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Overlap of two rects, or `None` when it is empty.
    #[inline]
    pub fn intersect(self, other: IRect) -> Option<IRect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        let r = IRect::from_bounds(x0, y0, x1, y1);
        if r.is_empty() { None } else { Some(r) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = IRect::new(0, 0, 4, 3);
        assert!(r.contains(0, 0));
        assert!(r.contains(3, 2));
        assert!(!r.contains(4, 2));
        assert!(!r.contains(3, 3));
        assert!(!r.contains(-1, 0));
    }

    #[test]
    fn intersect_clamps_to_overlap() {
        let a = IRect::new(0, 0, 10, 10);
        let b = IRect::new(-5, 4, 8, 20);
        assert_eq!(a.intersect(b), Some(IRect::new(0, 4, 3, 6)));
        assert_eq!(a.intersect(IRect::new(10, 0, 2, 2)), None);
    }
}
