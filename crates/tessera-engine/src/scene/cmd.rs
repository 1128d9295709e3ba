use std::fmt;
use std::rc::Rc;

use crate::coords::Rect;
use crate::texture::TextureId;

use super::DrawCmdList;

/// Host callback run in place of triangle rendering for a command.
pub type UserCallback = Rc<dyn Fn(&DrawCmdList, &DrawCmd)>;

/// One draw command: a run of indices sharing a texture and a clip rect.
///
/// A command with a `user_callback` draws nothing itself; the callback is
/// invoked instead.
#[derive(Clone)]
pub struct DrawCmd {
    /// Number of indices in the run. Consumed three at a time.
    pub elem_count: u32,
    /// First index of the run in the list's index buffer.
    pub idx_offset: u32,
    pub texture_id: TextureId,
    /// Scissor rect in surface pixels, stored as `(left, top)` + size.
    pub clip_rect: Rect,
    pub user_callback: Option<UserCallback>,
}

impl DrawCmd {
    #[inline]
    pub fn new(clip_rect: Rect, texture_id: TextureId, idx_offset: u32) -> Self {
        Self { elem_count: 0, idx_offset, texture_id, clip_rect, user_callback: None }
    }

    /// Index range of this command inside the list's index buffer.
    #[inline]
    pub fn index_range(&self) -> core::ops::Range<usize> {
        let start = self.idx_offset as usize;
        start..start + self.elem_count as usize
    }
}

impl fmt::Debug for DrawCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawCmd")
            .field("elem_count", &self.elem_count)
            .field("idx_offset", &self.idx_offset)
            .field("texture_id", &self.texture_id)
            .field("clip_rect", &self.clip_rect)
            .field("user_callback", &self.user_callback.is_some())
            .finish()
    }
}
