use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;

/// One vertex of the host GUI's draw list.
///
/// Layout matches the common immediate-mode GUI vertex (position, UV, packed
/// `0xAABBGGRR` color), so a host can reinterpret its raw vertex bytes with
/// [`bytemuck::cast_slice`].
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct DrawVert {
    /// Position in surface pixels.
    pub pos: Vec2,
    /// Normalized texture coordinate.
    pub uv: Vec2,
    /// Packed color, red in the low byte.
    pub col: u32,
}

impl DrawVert {
    #[inline]
    pub const fn new(pos: Vec2, uv: Vec2, col: u32) -> Self {
        Self { pos, uv, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_bytes_cast_to_vertices() {
        // Host buffers are at least 4-byte aligned; model that with u32 words.
        let mut words: Vec<u32> = [1.0f32, 2.0, 0.25, 0.75].iter().map(|f| f.to_bits()).collect();
        words.push(0xFF00_FF00);
        let bytes: &[u8] = bytemuck::cast_slice(&words);

        let verts: &[DrawVert] = bytemuck::try_cast_slice(bytes).unwrap();
        assert_eq!(
            verts,
            &[DrawVert::new(Vec2::new(1.0, 2.0), Vec2::new(0.25, 0.75), 0xFF00_FF00)]
        );
    }
}
