/// Switches for the fast paths of the draw-list processor.
///
/// Every combination renders the same pixels; turning everything off routes
/// all geometry through the generic interpolating rasterizer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RasterConfig {
    /// Merge uniform axis-aligned quads into one fill / copy.
    pub detect_rectangles: bool,
    /// Draw uniform untextured triangles with a constant color.
    pub uniform_fast_path: bool,
    /// Keep rasterized uniform triangles across frames.
    pub cache_uniform_triangles: bool,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            detect_rectangles: true,
            uniform_fast_path: true,
            cache_uniform_triangles: true,
        }
    }
}

impl RasterConfig {
    /// No fast paths, no cache.
    pub fn generic_only() -> Self {
        Self {
            detect_rectangles: false,
            uniform_fast_path: false,
            cache_uniform_triangles: false,
        }
    }

    pub fn with_detect_rectangles(mut self, on: bool) -> Self {
        self.detect_rectangles = on;
        self
    }

    pub fn with_uniform_fast_path(mut self, on: bool) -> Self {
        self.uniform_fast_path = on;
        self
    }

    pub fn with_cache_uniform_triangles(mut self, on: bool) -> Self {
        self.cache_uniform_triangles = on;
        self
    }
}
