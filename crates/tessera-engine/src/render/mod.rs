//! Draw-list processing.
//!
//! [`Target`] walks a frame's draw commands and routes every piece of
//! geometry to the cheapest path that produces the right pixels:
//! - merged quads: one fill or one texture region copy
//! - uniform triangles: rasterized once, then copied from the cache
//! - generic triangles: rasterized into a temporary image per draw
//!
//! Convention: positions are surface pixels, top-left origin, +Y down.

mod config;
mod draw;
mod rect;
mod stats;
mod target;
mod triangle;

pub use config::RasterConfig;
pub use stats::RenderStats;
pub use target::Target;
