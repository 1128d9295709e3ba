use crate::coords::IRect;
use crate::geometry::FixedTriangle;
use crate::surface::{ImageId, Surface};

use super::{rasterize_region, ColorRule};

/// A triangle rendered into its own offscreen image.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Rasterized {
    pub image: ImageId,
    /// Where the image goes on the presentation surface.
    pub placement: IRect,
    /// Pixels written into the image.
    pub pixels: usize,
}

/// Rasterizes the part of `tri` inside `region` into a fresh render target
/// sized to that part.
///
/// Clipping is off while drawing offscreen. Afterwards the presentation
/// surface is current again and `restore_clip` is re-applied.
///
/// Returns `None` when `region` misses the triangle or the surface cannot
/// allocate the image.
pub fn rasterize_to_image<S, R>(
    surface: &mut S,
    tri: &FixedTriangle,
    region: IRect,
    rule: &R,
    restore_clip: Option<IRect>,
) -> Option<Rasterized>
where
    S: Surface + ?Sized,
    R: ColorRule + ?Sized,
{
    let placement = tri.pixel_bounds().intersect(region)?;
    let Some(image) = surface.create_render_target(placement.width as u32, placement.height as u32)
    else {
        log::warn!(
            "raster: offscreen allocation of {}x{} failed",
            placement.width, placement.height
        );
        return None;
    };

    surface.set_render_target(Some(image));
    surface.set_clip_rect(None);

    let pixels = rasterize_region(tri, placement, rule, |x, y, color| {
        surface.draw_point(x - placement.x, y - placement.y, color);
    });

    surface.set_render_target(None);
    surface.set_clip_rect(restore_clip);

    Some(Rasterized { image, placement, pixels })
}
