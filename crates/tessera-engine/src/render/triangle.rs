use crate::cache::{CacheEntry, CacheKey};
use crate::classify::{BoundingBox, TriangleClass};
use crate::coords::IRect;
use crate::geometry::FixedTriangle;
use crate::paint::Color;
use crate::raster::{rasterize_to_image, ColorRule, ConstantColor, Interpolated};
use crate::scene::DrawVert;
use crate::surface::Surface;
use crate::texture::Texture;

use super::Target;

impl<S: Surface> Target<S> {
    pub(super) fn draw_triangle(
        &mut self,
        verts: &[DrawVert; 3],
        bbox: &BoundingBox,
        texture: &Texture,
        visible: Option<IRect>,
    ) {
        self.stats.triangles += 1;

        let class = match TriangleClass::of(verts, bbox, texture) {
            TriangleClass::UniformColor(tri) if !self.config.uniform_fast_path => {
                TriangleClass::Generic(tri)
            }
            class => class,
        };

        let tri = match class {
            TriangleClass::Degenerate => {
                self.stats.degenerate += 1;
                return;
            }
            TriangleClass::UniformColor(tri) | TriangleClass::Generic(tri) => tri,
        };
        let Some(region) = visible.and_then(|v| tri.pixel_bounds().intersect(v)) else {
            self.stats.culled += 1;
            return;
        };

        match class {
            TriangleClass::UniformColor(_) => {
                self.stats.uniform_triangles += 1;
                self.draw_uniform(verts, &tri, region);
            }
            _ => {
                self.stats.generic_triangles += 1;
                match Interpolated::new(verts, texture) {
                    Some(rule) => self.draw_once(&tri, region, &rule),
                    None => self.stats.degenerate += 1,
                }
            }
        }
    }

    /// Draws a single-color triangle, through the cache when it is enabled
    /// and the triangle is fully visible.
    fn draw_uniform(&mut self, verts: &[DrawVert; 3], tri: &FixedTriangle, region: IRect) {
        let rule = ConstantColor(Color::from_packed(verts[0].col));
        // A clipped image only holds the visible part, so it cannot be reused
        // at another position.
        if !self.config.cache_uniform_triangles || region != tri.pixel_bounds() {
            self.draw_once(tri, region, &rule);
            return;
        }

        let (key, origin) = CacheKey::new(verts);
        let entry = match self.cache.get(&key) {
            Some(entry) => {
                self.stats.cache_hits += 1;
                entry
            }
            None => {
                self.stats.cache_misses += 1;
                let Some(out) = rasterize_to_image(&mut self.surface, tri, region, &rule, self.clip)
                else {
                    self.stats.allocation_failures += 1;
                    return;
                };
                self.stats.rasterizations += 1;
                let entry = CacheEntry {
                    image: out.image,
                    placement: out.placement.translated(-origin.0, -origin.1),
                };
                self.cache.insert(key, entry);
                entry
            }
        };

        self.surface.copy(entry.image, None, entry.placed_at(origin), None);
    }

    /// Rasterizes the part of `tri` inside `region` into a temporary image,
    /// copies it into place and frees it.
    fn draw_once<R: ColorRule + ?Sized>(&mut self, tri: &FixedTriangle, region: IRect, rule: &R) {
        let Some(out) = rasterize_to_image(&mut self.surface, tri, region, rule, self.clip) else {
            self.stats.allocation_failures += 1;
            return;
        };
        self.stats.rasterizations += 1;
        self.surface.copy(out.image, None, out.placement, None);
        self.surface.destroy_render_target(out.image);
    }
}

pub(super) fn overlaps(bounds: IRect, visible: Option<IRect>) -> bool {
    visible.is_some_and(|v| bounds.intersect(v).is_some())
}
