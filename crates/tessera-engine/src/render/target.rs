use crate::cache::TriangleCache;
use crate::coords::IRect;
use crate::surface::Surface;

use super::{RasterConfig, RenderStats};

/// Render state bound to one presentation surface.
///
/// Owns the surface, the triangle cache and the active clip rect. The cache
/// images live on the surface and are released on [`resize`](Self::resize),
/// [`clear_cache`](Self::clear_cache) and drop.
pub struct Target<S: Surface> {
    pub(super) surface: S,
    width: u32,
    height: u32,
    pub(super) clip: Option<IRect>,
    pub(super) cache: TriangleCache,
    pub(super) config: RasterConfig,
    pub(super) stats: RenderStats,
}

impl<S: Surface> Target<S> {
    pub fn new(width: u32, height: u32, surface: S) -> Self {
        Self::with_config(width, height, surface, RasterConfig::default())
    }

    pub fn with_config(width: u32, height: u32, surface: S, config: RasterConfig) -> Self {
        Self {
            surface,
            width,
            height,
            clip: None,
            cache: TriangleCache::new(),
            config,
            stats: RenderStats::default(),
        }
    }

    /// Records the new surface size and drops every cached triangle.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!(
            "Target: resize {}x{} -> {}x{}, dropping {} cached triangles",
            self.width,
            self.height,
            width,
            height,
            self.cache.len()
        );
        self.width = width;
        self.height = height;
        self.clear_cache();
    }

    /// Releases every cached image on the surface and empties the cache.
    pub fn clear_cache(&mut self) {
        for entry in self.cache.drain() {
            self.surface.destroy_render_target(entry.image);
        }
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Counters of the most recent frame.
    #[inline]
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    #[inline]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    pub fn config(&self) -> &RasterConfig {
        &self.config
    }

    /// Applies a clip rect to the surface and remembers it, so offscreen
    /// drawing can restore it.
    pub(super) fn set_clip(&mut self, clip: Option<IRect>) {
        self.clip = clip;
        self.surface.set_clip_rect(clip);
    }

    /// Region of the surface that writes can reach under the current clip.
    pub(super) fn visible_region(&self) -> Option<IRect> {
        let full = IRect::new(0, 0, self.width as i32, self.height as i32);
        match self.clip {
            None => (!full.is_empty()).then_some(full),
            Some(clip) => full.intersect(clip),
        }
    }
}

impl<S: Surface> Drop for Target<S> {
    fn drop(&mut self) {
        if !self.cache.is_empty() {
            log::debug!("Target: releasing {} cached triangles", self.cache.len());
        }
        self.clear_cache();
    }
}
