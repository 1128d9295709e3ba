//! Triangle scan conversion.
//!
//! One fixed-point core ([`rasterize`]) emits covered pixels to a sink; the
//! color of each pixel comes from a [`ColorRule`]. [`rasterize_to_image`]
//! runs the core into an offscreen render target of the triangle's size.

mod offscreen;
mod rule;
mod scan;

pub use offscreen::{rasterize_to_image, Rasterized};
pub use rule::{ColorRule, ConstantColor, Interpolated};
pub use scan::{rasterize, rasterize_region};
