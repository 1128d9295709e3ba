//! Presentation surface abstraction.
//!
//! The rasterizer never touches pixels directly. Everything it produces goes
//! through the [`Surface`] primitives:
//! - draw a point with a color
//! - fill a solid rectangle
//! - copy a region of an image to the current target, optionally modulated
//! - create / destroy offscreen render targets
//!
//! plus the usual state changes of an immediate 2D API (current render target,
//! clip rectangle). Hosts implement the trait over their own 2D backend;
//! [`PixelSurface`] is the in-crate CPU implementation.

mod pixel;

pub use pixel::{PixelSurface, SurfaceCounters};

use crate::coords::IRect;
use crate::paint::Color;

/// Handle to an image owned by a [`Surface`]: an offscreen render target or an
/// uploaded texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u64);

/// The 2D primitives the rasterizer needs from a presentation surface.
///
/// All drawing goes to the current render target (the presentation surface
/// when `None` was last passed to [`set_render_target`](Surface::set_render_target))
/// and is scissored by the current clip rect.
pub trait Surface {
    /// Writes one pixel.
    fn draw_point(&mut self, x: i32, y: i32, color: Color);

    /// Fills `rect` with a solid color.
    fn fill_rect(&mut self, rect: IRect, color: Color);

    /// Copies `src_rect` of image `src` (the whole image for `None`) into `dst`,
    /// scaling if the sizes differ. `modulate` multiplies every source texel.
    fn copy(&mut self, src: ImageId, src_rect: Option<IRect>, dst: IRect, modulate: Option<Color>);

    /// Allocates a transparent offscreen image usable as a render target.
    ///
    /// Returns `None` when the backend cannot allocate it.
    fn create_render_target(&mut self, width: u32, height: u32) -> Option<ImageId>;

    /// Releases an image created by [`create_render_target`](Surface::create_render_target).
    fn destroy_render_target(&mut self, id: ImageId);

    /// Redirects drawing to an offscreen image, or back to the presentation
    /// surface for `None`.
    fn set_render_target(&mut self, target: Option<ImageId>);

    /// Sets the scissor rect; `None` disables clipping.
    fn set_clip_rect(&mut self, clip: Option<IRect>);
}
