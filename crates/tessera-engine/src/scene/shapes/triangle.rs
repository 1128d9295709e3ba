use crate::coords::Vec2;
use crate::scene::{DrawCmdList, DrawVert};

impl DrawCmdList {
    /// Records a solid triangle.
    pub fn add_triangle_filled(&mut self, p0: Vec2, p1: Vec2, p2: Vec2, col: u32) {
        let uv = self.white_uv();
        self.add_triangle(
            DrawVert::new(p0, uv, col),
            DrawVert::new(p1, uv, col),
            DrawVert::new(p2, uv, col),
        );
    }

    /// Records a triangle with arbitrary per-vertex attributes.
    pub fn add_triangle(&mut self, v0: DrawVert, v1: DrawVert, v2: DrawVert) {
        self.push_geometry(&[v0, v1, v2], &[0, 1, 2]);
    }
}
