//! Source images sampled by the rasterizer.
//!
//! Textures are created by the host (font atlas upload, user images) and
//! referenced from draw commands through an opaque [`TextureId`].

mod set;
mod texture;

pub use set::{TextureId, TextureSet};
pub use texture::{Texture, TextureError};
