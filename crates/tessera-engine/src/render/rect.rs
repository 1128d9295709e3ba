use crate::classify::DetectedRect;
use crate::coords::IRect;
use crate::geometry::{snap_up, FixedPoint};
use crate::paint::Color;
use crate::surface::Surface;
use crate::texture::Texture;

use super::triangle::overlaps;
use super::Target;

impl<S: Surface> Target<S> {
    /// Draws a merged quad with one fill or one region copy.
    pub(super) fn draw_rect(&mut self, rect: &DetectedRect, texture: &Texture, visible: Option<IRect>) {
        let bbox = &rect.bbox;

        // Same snapping as the triangle pair would get.
        let min = FixedPoint::from_vec2(bbox.min);
        let max = FixedPoint::from_vec2(bbox.max);
        let dst = IRect::from_bounds(snap_up(min.x), snap_up(min.y), snap_up(max.x), snap_up(max.y));
        if dst.is_empty() {
            self.stats.degenerate += 1;
            return;
        }
        if !overlaps(dst, visible) {
            self.stats.culled += 1;
            return;
        }

        let color = Color::from_packed(rect.col);
        if bbox.uses_only_color(texture) {
            self.surface.fill_rect(dst, color);
            self.stats.rects_filled += 1;
            return;
        }

        let (tw, th) = (texture.width() as f32, texture.height() as f32);
        let src = IRect::new(
            (bbox.uv_min.x * tw) as i32,
            (bbox.uv_min.y * th) as i32,
            (((bbox.uv_max.x - bbox.uv_min.x) * tw) as i32).max(1),
            (((bbox.uv_max.y - bbox.uv_min.y) * th) as i32).max(1),
        );
        self.surface.copy(texture.image_id(), Some(src), dst, Some(color));
        self.stats.rects_copied += 1;
    }
}
