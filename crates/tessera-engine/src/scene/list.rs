use std::rc::Rc;

use crate::coords::{Rect, Vec2};
use crate::texture::TextureId;

use super::{DrawCmd, DrawVert};

/// Vertex, index and command buffers for one window / layer of a frame.
///
/// The buffers are public so hosts can fill them from their own GUI library.
/// The recording helpers (`push_clip_rect`, `set_texture`, the `add_*` shape
/// helpers) keep commands contiguous: a new command starts whenever the clip
/// rect or texture changes.
///
/// ```ignore
/// list.push_clip_rect(panel_rect);
/// list.add_rect_filled(min, max, 0xFF30_3030);
/// list.pop_clip_rect();
/// ```
#[derive(Debug, Clone)]
pub struct DrawCmdList {
    pub vtx_buffer: Vec<DrawVert>,
    pub idx_buffer: Vec<u32>,
    pub cmd_buffer: Vec<DrawCmd>,

    display_rect: Rect,
    /// Stack of active clip rects, each already intersected with its parent.
    clip_stack: Vec<Rect>,
    texture: TextureId,
    white_uv: Vec2,
}

impl DrawCmdList {
    /// Creates an empty list clipped to `display_rect`, drawing with `texture`
    /// whose solid-color texel sits at `white_uv`.
    pub fn new(display_rect: Rect, texture: TextureId, white_uv: Vec2) -> Self {
        Self {
            vtx_buffer: Vec::new(),
            idx_buffer: Vec::new(),
            cmd_buffer: Vec::new(),
            display_rect,
            clip_stack: Vec::new(),
            texture,
            white_uv,
        }
    }

    /// Clears buffers and the clip stack. Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.vtx_buffer.clear();
        self.idx_buffer.clear();
        self.cmd_buffer.clear();
        self.clip_stack.clear();
    }

    /// UV of the solid-color texel, for untextured shapes.
    #[inline]
    pub fn white_uv(&self) -> Vec2 {
        self.white_uv
    }

    /// The clip rect new geometry is recorded with.
    #[inline]
    pub fn current_clip_rect(&self) -> Rect {
        self.clip_stack.last().copied().unwrap_or(self.display_rect)
    }

    /// Begins a scissor region, intersected with the current one.
    ///
    /// Calls must be balanced with [`pop_clip_rect`](Self::pop_clip_rect).
    pub fn push_clip_rect(&mut self, rect: Rect) {
        // No overlap yields a zero-area rect so the renderer draws nothing.
        let effective = self
            .current_clip_rect()
            .intersect(rect)
            .unwrap_or(Rect::new(rect.origin.x, rect.origin.y, 0.0, 0.0));
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip_rect`.
    pub fn pop_clip_rect(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip_rect called without matching push");
        self.clip_stack.pop();
    }

    /// Selects the texture for subsequently recorded geometry.
    pub fn set_texture(&mut self, texture: TextureId, white_uv: Vec2) {
        self.texture = texture;
        self.white_uv = white_uv;
    }

    /// Records a callback command. It runs at this point of the command stream
    /// instead of rasterizing anything.
    pub fn add_callback(&mut self, callback: impl Fn(&DrawCmdList, &DrawCmd) + 'static) {
        let mut cmd =
            DrawCmd::new(self.current_clip_rect(), self.texture, self.idx_buffer.len() as u32);
        cmd.user_callback = Some(Rc::new(callback));
        self.cmd_buffer.push(cmd);
    }

    /// Appends `vertices` and `indices` (relative to the first new vertex) to
    /// the current command.
    pub fn push_geometry(&mut self, vertices: &[DrawVert], indices: &[u32]) {
        self.open_cmd();

        let base = self.vtx_buffer.len() as u32;
        self.vtx_buffer.extend_from_slice(vertices);
        self.idx_buffer.extend(indices.iter().map(|&i| base + i));

        if let Some(cmd) = self.cmd_buffer.last_mut() {
            cmd.elem_count += indices.len() as u32;
        }
    }

    /// Makes sure the last command matches the current clip rect and texture,
    /// starting a new one when either changed.
    fn open_cmd(&mut self) {
        let clip = self.current_clip_rect();
        let texture = self.texture;

        let reusable = self.cmd_buffer.last().is_some_and(|last| {
            last.user_callback.is_none() && last.clip_rect == clip && last.texture_id == texture
        });
        if !reusable {
            self.cmd_buffer.push(DrawCmd::new(clip, texture, self.idx_buffer.len() as u32));
        }
    }
}
