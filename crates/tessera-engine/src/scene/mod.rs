//! Per-frame draw data handed over by the host GUI.
//!
//! Responsibilities:
//! - the vertex / index / command buffer types the renderer consumes
//! - recording helpers so hosts and tests can build draw lists directly
//!   (shape helpers live under `scene::shapes`, one file per shape family)

mod cmd;
mod data;
mod list;
mod vert;

pub mod shapes;

pub use cmd::{DrawCmd, UserCallback};
pub use data::DrawData;
pub use list::DrawCmdList;
pub use vert::DrawVert;
