use super::{IRect, Vec2};

/// Axis-aligned rectangle in surface pixels (top-left origin), float precision.
///
/// Draw commands carry their clip rectangle in this form.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Builds a rect from its `(left, top)` and `(right, bottom)` corners.
    #[inline]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self { origin: min, size: max - min }
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Intersection of two rects; `None` when they do not overlap.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let min = a.min().max(b.min());
        let max = a.max().min(b.max());

        if max.x - min.x <= 0.0 || max.y - min.y <= 0.0 {
            None
        } else {
            Some(Rect::from_min_max(min, max))
        }
    }

    /// Converts to an integer pixel rect by truncating each field toward zero,
    /// the way scissor rects are handed to 2D APIs.
    #[inline]
    pub fn to_irect(self) -> IRect {
        let r = self.normalized();
        IRect::new(
            r.origin.x as i32,
            r.origin.y as i32,
            r.size.x as i32,
            r.size.y as i32,
        )
    }
}
