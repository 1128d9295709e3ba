//! Coordinate and geometry types shared across the rasterizer and its hosts.
//!
//! Canonical space:
//! - surface pixels
//! - origin top-left
//! - +X right, +Y down
//!
//! A pixel `(x, y)` is the unit square whose top-left corner is `(x, y)`.

mod irect;
mod rect;
mod vec2;

pub use irect::IRect;
pub use rect::Rect;
pub use vec2::Vec2;
