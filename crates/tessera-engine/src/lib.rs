//! Tessera engine crate.
//!
//! Software rasterizer for immediate-mode GUI draw lists: turns a frame's
//! vertex / index / command buffers into pixels through a small set of 2D
//! surface primitives, with a cross-frame cache for repeated geometry.

pub mod coords;
pub mod paint;
pub mod geometry;
pub mod texture;
pub mod scene;
pub mod surface;

pub mod classify;
pub mod raster;
pub mod cache;
pub mod render;

pub mod logging;
