use crate::classify::{Primitive, Primitives};
use crate::scene::{DrawCmd, DrawCmdList, DrawData};
use crate::surface::Surface;
use crate::texture::TextureSet;

use super::{RenderStats, Target};

impl<S: Surface> Target<S> {
    /// Draws one frame of GUI geometry onto the surface.
    ///
    /// Commands run in order: each sets the clip rect, then either invokes its
    /// callback or draws its index run. Clipping is disabled afterwards.
    pub fn render(&mut self, draw_data: &DrawData, textures: &TextureSet) {
        self.stats = RenderStats::default();

        for list in &draw_data.cmd_lists {
            for cmd in &list.cmd_buffer {
                self.render_cmd(list, cmd, textures);
            }
        }

        self.set_clip(None);
        log::trace!("Target: frame {}", self.stats);
    }

    fn render_cmd(&mut self, list: &DrawCmdList, cmd: &DrawCmd, textures: &TextureSet) {
        self.stats.commands += 1;
        self.set_clip(Some(cmd.clip_rect.to_irect()));

        if let Some(callback) = &cmd.user_callback {
            self.stats.callbacks += 1;
            callback(list, cmd);
            return;
        }

        let Some(texture) = textures.get(cmd.texture_id) else {
            log::warn!("Target: unknown texture {:?}; command skipped", cmd.texture_id);
            self.stats.skipped_commands += 1;
            return;
        };
        let Some(indices) = list.idx_buffer.get(cmd.index_range()) else {
            log::warn!(
                "Target: index run {:?} outside index buffer of {}; command skipped",
                cmd.index_range(),
                list.idx_buffer.len()
            );
            self.stats.skipped_commands += 1;
            return;
        };

        let visible = self.visible_region();
        let primitives = Primitives::new(&list.vtx_buffer, indices, self.config.detect_rectangles);
        for primitive in primitives {
            match primitive {
                Primitive::Rect(rect) => self.draw_rect(&rect, texture, visible),
                Primitive::Triangle { verts, bbox } => {
                    self.draw_triangle(&verts, &bbox, texture, visible)
                }
                Primitive::OutOfRange { first_index } => {
                    log::warn!(
                        "Target: triangle at index {} references missing vertices; skipped",
                        cmd.idx_offset as usize + first_index
                    );
                    self.stats.invalid_triangles += 1;
                }
            }
        }
    }
}
