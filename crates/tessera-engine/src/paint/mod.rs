//! Color model shared between the rasterizer, surfaces and hosts.
//!
//! Colors are straight (non-premultiplied) alpha. Blending policy belongs to the
//! surface that stores the pixels.

mod color;

pub use color::Color;
