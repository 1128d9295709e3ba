use super::DrawCmdList;

/// Everything the host GUI produced for one frame.
#[derive(Debug, Clone, Default)]
pub struct DrawData {
    pub cmd_lists: Vec<DrawCmdList>,
}

impl DrawData {
    pub fn new(cmd_lists: Vec<DrawCmdList>) -> Self {
        Self { cmd_lists }
    }

    pub fn total_vtx_count(&self) -> usize {
        self.cmd_lists.iter().map(|l| l.vtx_buffer.len()).sum()
    }

    pub fn total_idx_count(&self) -> usize {
        self.cmd_lists.iter().map(|l| l.idx_buffer.len()).sum()
    }
}
