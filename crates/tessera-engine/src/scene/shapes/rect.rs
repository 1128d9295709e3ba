use crate::coords::Vec2;
use crate::scene::{DrawCmdList, DrawVert};

/// Quad corner order: top-left, top-right, bottom-right, bottom-left.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

impl DrawCmdList {
    /// Records a solid axis-aligned rectangle as two triangles.
    pub fn add_rect_filled(&mut self, min: Vec2, max: Vec2, col: u32) {
        let uv = self.white_uv();
        self.add_image(min, max, uv, uv, col);
    }

    /// Records a textured rectangle mapping `uv_min..uv_max` onto `min..max`,
    /// modulated by `col`.
    pub fn add_image(&mut self, min: Vec2, max: Vec2, uv_min: Vec2, uv_max: Vec2, col: u32) {
        let verts = [
            DrawVert::new(min, uv_min, col),
            DrawVert::new(Vec2::new(max.x, min.y), Vec2::new(uv_max.x, uv_min.y), col),
            DrawVert::new(max, uv_max, col),
            DrawVert::new(Vec2::new(min.x, max.y), Vec2::new(uv_min.x, uv_max.y), col),
        ];
        self.push_geometry(&verts, &QUAD_INDICES);
    }

    /// Records an untextured rectangle with one color per corner
    /// (top-left, top-right, bottom-right, bottom-left).
    pub fn add_rect_multicolor(&mut self, min: Vec2, max: Vec2, cols: [u32; 4]) {
        let uv = self.white_uv();
        let verts = [
            DrawVert::new(min, uv, cols[0]),
            DrawVert::new(Vec2::new(max.x, min.y), uv, cols[1]),
            DrawVert::new(max, uv, cols[2]),
            DrawVert::new(Vec2::new(min.x, max.y), uv, cols[3]),
        ];
        self.push_geometry(&verts, &QUAD_INDICES);
    }
}
