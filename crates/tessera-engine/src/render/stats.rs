use std::fmt;

/// Counters for one [`Target::render`](super::Target::render) call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct RenderStats {
    pub commands: u32,
    pub callbacks: u32,
    /// Commands dropped because their texture id was unknown or their index
    /// run fell outside the index buffer.
    pub skipped_commands: u32,

    pub triangles: u32,
    pub uniform_triangles: u32,
    pub generic_triangles: u32,
    pub degenerate: u32,
    /// Triangles referencing vertices past the end of the buffer.
    pub invalid_triangles: u32,
    /// Geometry entirely outside the clip rect or the surface.
    pub culled: u32,

    pub rects_filled: u32,
    pub rects_copied: u32,

    /// Scan conversions actually run.
    pub rasterizations: u32,
    pub cache_hits: u32,
    pub cache_misses: u32,
    pub allocation_failures: u32,
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmds={} cb={} tris={} (uniform={} generic={} degenerate={} culled={}) \
             rects={}+{} raster={} cache={}/{} alloc_fail={}",
            self.commands,
            self.callbacks,
            self.triangles,
            self.uniform_triangles,
            self.generic_triangles,
            self.degenerate,
            self.culled,
            self.rects_filled,
            self.rects_copied,
            self.rasterizations,
            self.cache_hits,
            self.cache_hits + self.cache_misses,
            self.allocation_failures,
        )
    }
}
