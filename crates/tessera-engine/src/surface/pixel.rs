use std::collections::HashMap;

use image::{Rgba, RgbaImage};

use crate::coords::IRect;
use crate::paint::Color;
use crate::texture::Texture;

use super::{ImageId, Surface};

/// Running totals of primitive calls, for diagnostics and tests.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct SurfaceCounters {
    pub points: u64,
    pub fills: u64,
    pub copies: u64,
    pub targets_created: u64,
    pub targets_destroyed: u64,
}

struct StoredImage {
    pixels: RgbaImage,
    render_target: bool,
}

/// CPU presentation surface backed by RGBA8 images.
///
/// Blending:
/// - every write is straight-alpha source-over
/// - writing onto a fully transparent pixel stores the source unchanged, so
///   rasterizing into a fresh offscreen image and copying it produces the same
///   pixels as drawing directly
///
/// Copies scale with nearest-neighbour sampling. The clip rect applies to
/// whichever target is current.
pub struct PixelSurface {
    screen: RgbaImage,
    images: HashMap<ImageId, StoredImage>,
    next_id: u64,
    target: Option<ImageId>,
    clip: Option<IRect>,
    render_target_limit: Option<usize>,
    counters: SurfaceCounters,
}

impl PixelSurface {
    /// Creates a transparent surface of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            screen: RgbaImage::new(width, height),
            images: HashMap::new(),
            next_id: 1,
            target: None,
            clip: None,
            render_target_limit: None,
            counters: SurfaceCounters::default(),
        }
    }

    /// Caps the number of live offscreen render targets. Allocations beyond the
    /// cap fail, as they would on a backend out of texture memory.
    pub fn with_render_target_limit(mut self, limit: usize) -> Self {
        self.render_target_limit = Some(limit);
        self
    }

    /// Registers `pixels` as a source image and returns a texture bound to it.
    pub fn upload_texture(&mut self, pixels: RgbaImage) -> Texture {
        let id = self.alloc_id();
        self.images.insert(
            id,
            StoredImage { pixels: pixels.clone(), render_target: false },
        );
        Texture::new(id, pixels)
    }

    /// Resizes the presentation image. Existing content is discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.screen = RgbaImage::new(width, height);
    }

    /// Fills the whole presentation image, ignoring the clip rect.
    pub fn clear(&mut self, color: Color) {
        let px = Rgba(color.to_rgba8());
        self.screen.pixels_mut().for_each(|p| *p = px);
    }

    /// Presentation pixel at `(x, y)`, if inside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.screen.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// The presentation image.
    pub fn image(&self) -> &RgbaImage {
        &self.screen
    }

    /// Pixels of a stored image (texture or render target).
    pub fn stored_image(&self, id: ImageId) -> Option<&RgbaImage> {
        self.images.get(&id).map(|i| &i.pixels)
    }

    /// Number of offscreen render targets currently allocated.
    pub fn live_render_targets(&self) -> usize {
        self.images.values().filter(|i| i.render_target).count()
    }

    pub fn counters(&self) -> SurfaceCounters {
        self.counters
    }

    pub fn reset_counters(&mut self) {
        self.counters = SurfaceCounters::default();
    }

    fn alloc_id(&mut self) -> ImageId {
        let id = ImageId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Current target image plus the region writes may touch.
    fn target_and_bounds(&mut self) -> Option<(&mut RgbaImage, IRect)> {
        let clip = self.clip;
        let image = match self.target {
            None => &mut self.screen,
            Some(id) => match self.images.get_mut(&id) {
                Some(stored) => &mut stored.pixels,
                None => return None,
            },
        };
        let full = IRect::new(0, 0, image.width() as i32, image.height() as i32);
        let bounds = match clip {
            None => Some(full),
            Some(c) => full.intersect(c),
        }?;
        Some((image, bounds))
    }
}

/// Straight-alpha source-over.
fn blend(dst: &mut Rgba<u8>, src: [u8; 4]) {
    let sa = src[3];
    if sa == 255 || dst.0[3] == 0 {
        dst.0 = src;
        return;
    }
    if sa == 0 {
        return;
    }

    let sa = sa as f32 / 255.0;
    let da = dst.0[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let mut out = [0u8; 4];
    for i in 0..3 {
        let s = src[i] as f32 / 255.0;
        let d = dst.0[i] as f32 / 255.0;
        let c = (s * sa + d * da * (1.0 - sa)) / out_a;
        out[i] = (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    }
    out[3] = (out_a.clamp(0.0, 1.0) * 255.0).round() as u8;
    dst.0 = out;
}

impl Surface for PixelSurface {
    fn draw_point(&mut self, x: i32, y: i32, color: Color) {
        self.counters.points += 1;
        let Some((image, bounds)) = self.target_and_bounds() else { return };
        if bounds.contains(x, y) {
            blend(image.get_pixel_mut(x as u32, y as u32), color.to_rgba8());
        }
    }

    fn fill_rect(&mut self, rect: IRect, color: Color) {
        self.counters.fills += 1;
        let Some((image, bounds)) = self.target_and_bounds() else { return };
        let Some(area) = rect.intersect(bounds) else { return };
        let src = color.to_rgba8();
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                blend(image.get_pixel_mut(x as u32, y as u32), src);
            }
        }
    }

    fn copy(&mut self, src: ImageId, src_rect: Option<IRect>, dst: IRect, modulate: Option<Color>) {
        self.counters.copies += 1;
        if dst.is_empty() {
            return;
        }
        if self.target == Some(src) {
            log::warn!("PixelSurface: copy from the current render target {src:?} ignored");
            return;
        }
        // Detach the source so the target can be borrowed mutably.
        let Some(source) = self.images.remove(&src) else {
            log::warn!("PixelSurface: copy from unknown image {src:?}");
            return;
        };

        let full = IRect::new(0, 0, source.pixels.width() as i32, source.pixels.height() as i32);
        let region = src_rect.unwrap_or(full);

        let target = if region.is_empty() { None } else { self.target_and_bounds() };
        if let Some((image, bounds)) = target {
            if let Some(area) = dst.intersect(bounds) {
                for y in area.y..area.bottom() {
                    // Nearest-neighbour: map the destination pixel center into the source region.
                    let sy = region.y
                        + (((y - dst.y) as f32 + 0.5) * region.height as f32 / dst.height as f32) as i32;
                    for x in area.x..area.right() {
                        let sx = region.x
                            + (((x - dst.x) as f32 + 0.5) * region.width as f32 / dst.width as f32)
                                as i32;
                        if !full.contains(sx, sy) {
                            continue;
                        }
                        let texel = source.pixels.get_pixel(sx as u32, sy as u32).0;
                        let texel = match modulate {
                            None => texel,
                            Some(m) => (Color::from_rgba8(texel) * m).to_rgba8(),
                        };
                        blend(image.get_pixel_mut(x as u32, y as u32), texel);
                    }
                }
            }
        }

        self.images.insert(src, source);
    }

    fn create_render_target(&mut self, width: u32, height: u32) -> Option<ImageId> {
        if width == 0 || height == 0 {
            return None;
        }
        if let Some(limit) = self.render_target_limit {
            if self.live_render_targets() >= limit {
                log::debug!("PixelSurface: render target limit ({limit}) reached");
                return None;
            }
        }
        let pixels = allocate_image(width, height)?;
        let id = self.alloc_id();
        self.images.insert(id, StoredImage { pixels, render_target: true });
        self.counters.targets_created += 1;
        Some(id)
    }

    fn destroy_render_target(&mut self, id: ImageId) {
        match self.images.get(&id) {
            Some(stored) if stored.render_target => {
                self.images.remove(&id);
                self.counters.targets_destroyed += 1;
                if self.target == Some(id) {
                    self.target = None;
                }
            }
            Some(_) => log::warn!("PixelSurface: {id:?} is a texture, not a render target"),
            None => log::warn!("PixelSurface: destroy of unknown render target {id:?}"),
        }
    }

    fn set_render_target(&mut self, target: Option<ImageId>) {
        self.target = target;
    }

    fn set_clip_rect(&mut self, clip: Option<IRect>) {
        self.clip = clip;
    }
}

/// Zeroed image storage, or `None` when the size overflows or the allocator
/// refuses it.
fn allocate_image(width: u32, height: u32) -> Option<RgbaImage> {
    let len = (width as usize).checked_mul(height as usize)?.checked_mul(4)?;
    let mut buf = Vec::new();
    if let Err(err) = buf.try_reserve_exact(len) {
        log::warn!("PixelSurface: cannot allocate {width}x{height} render target: {err}");
        return None;
    }
    buf.resize(len, 0);
    RgbaImage::from_raw(width, height, buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

    fn px(s: &PixelSurface, x: u32, y: u32) -> [u8; 4] {
        s.pixel(x, y).unwrap()
    }

    // ── points / fills ────────────────────────────────────────────────────

    #[test]
    fn draw_point_respects_clip() {
        let mut s = PixelSurface::new(4, 4);
        s.set_clip_rect(Some(IRect::new(1, 1, 2, 2)));
        s.draw_point(0, 0, RED);
        s.draw_point(1, 1, RED);
        assert_eq!(px(&s, 0, 0), [0, 0, 0, 0]);
        assert_eq!(px(&s, 1, 1), [255, 0, 0, 255]);
    }

    #[test]
    fn points_outside_surface_are_dropped() {
        let mut s = PixelSurface::new(2, 2);
        s.draw_point(-1, 0, RED);
        s.draw_point(2, 1, RED);
        assert!(s.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
        assert_eq!(s.counters().points, 2);
    }

    #[test]
    fn fill_rect_clamps_to_surface() {
        let mut s = PixelSurface::new(3, 3);
        s.fill_rect(IRect::new(-5, 1, 100, 1), RED);
        for x in 0..3 {
            assert_eq!(px(&s, x, 1), [255, 0, 0, 255]);
            assert_eq!(px(&s, x, 0), [0, 0, 0, 0]);
        }
    }

    // ── blending ──────────────────────────────────────────────────────────

    #[test]
    fn translucent_onto_transparent_is_stored_verbatim() {
        let mut s = PixelSurface::new(1, 1);
        s.draw_point(0, 0, Color::from_rgba8([200, 100, 50, 128]));
        assert_eq!(px(&s, 0, 0), [200, 100, 50, 128]);
    }

    #[test]
    fn half_alpha_over_opaque_mixes() {
        let mut s = PixelSurface::new(1, 1);
        s.clear(Color::black());
        s.draw_point(0, 0, Color::from_rgba8([255, 255, 255, 128]));
        let p = px(&s, 0, 0);
        assert_eq!(p[3], 255);
        assert!((127..=129).contains(&p[0]));
    }

    // ── render targets / copy ─────────────────────────────────────────────

    #[test]
    fn offscreen_then_copy_matches_direct_draw() {
        let color = Color::from_rgba8([10, 20, 30, 100]);

        let mut direct = PixelSurface::new(4, 4);
        direct.clear(Color::from_rgba8([90, 90, 90, 255]));
        direct.draw_point(2, 1, color);

        let mut via = PixelSurface::new(4, 4);
        via.clear(Color::from_rgba8([90, 90, 90, 255]));
        let img = via.create_render_target(2, 2).unwrap();
        via.set_render_target(Some(img));
        via.draw_point(1, 0, color);
        via.set_render_target(None);
        via.copy(img, None, IRect::new(1, 1, 2, 2), None);

        assert_eq!(direct.image(), via.image());
    }

    #[test]
    fn copy_sub_rect_with_modulation() {
        let mut s = PixelSurface::new(2, 1);
        let mut tex = RgbaImage::new(4, 1);
        tex.put_pixel(2, 0, Rgba([255, 255, 255, 255]));
        tex.put_pixel(3, 0, Rgba([255, 0, 255, 255]));
        let texture = s.upload_texture(tex);

        s.copy(
            texture.image_id(),
            Some(IRect::new(2, 0, 2, 1)),
            IRect::new(0, 0, 2, 1),
            Some(Color::new(0.0, 1.0, 1.0, 1.0)),
        );
        assert_eq!(px(&s, 0, 0), [0, 255, 255, 255]);
        assert_eq!(px(&s, 1, 0), [0, 0, 255, 255]);
    }

    #[test]
    fn copy_scales_nearest() {
        let mut s = PixelSurface::new(4, 1);
        let mut tex = RgbaImage::new(2, 1);
        tex.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        tex.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        let texture = s.upload_texture(tex);
        s.copy(texture.image_id(), None, IRect::new(0, 0, 4, 1), None);
        assert_eq!(px(&s, 0, 0), [255, 0, 0, 255]);
        assert_eq!(px(&s, 1, 0), [255, 0, 0, 255]);
        assert_eq!(px(&s, 2, 0), [0, 0, 255, 255]);
        assert_eq!(px(&s, 3, 0), [0, 0, 255, 255]);
    }

    #[test]
    fn oversized_render_target_fails_allocation() {
        let mut s = PixelSurface::new(1, 1);
        assert!(s.create_render_target(u32::MAX, u32::MAX).is_none());
        assert!(s.create_render_target(1 << 31, 1 << 30).is_none());
        assert_eq!(s.live_render_targets(), 0);
        assert_eq!(s.counters().targets_created, 0);
    }

    #[test]
    fn render_target_limit_fails_allocation() {
        let mut s = PixelSurface::new(1, 1).with_render_target_limit(1);
        let a = s.create_render_target(2, 2);
        assert!(a.is_some());
        assert!(s.create_render_target(2, 2).is_none());
        s.destroy_render_target(a.unwrap());
        assert_eq!(s.live_render_targets(), 0);
        assert!(s.create_render_target(2, 2).is_some());
    }

    #[test]
    fn textures_are_not_render_targets() {
        let mut s = PixelSurface::new(1, 1);
        let t = s.upload_texture(RgbaImage::new(1, 1));
        s.destroy_render_target(t.image_id());
        assert!(s.stored_image(t.image_id()).is_some());
        assert_eq!(s.live_render_targets(), 0);
    }
}
