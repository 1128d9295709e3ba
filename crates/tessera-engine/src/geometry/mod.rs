//! Geometry math for scan conversion.
//!
//! Pure functions and small value types, no state:
//! - fixed-point conversion and pixel snapping (`fixed`)
//! - exact integer edge functions with top-left tie breaking (`edge`)
//! - barycentric attribute interpolation (`barycentric`)

mod barycentric;
mod edge;
mod fixed;

pub use barycentric::Barycentric;
pub use edge::EdgeFunction;
pub use fixed::{
    doubled_area, snap_up, to_fixed, FixedPoint, FixedTriangle, FIXED_LIMIT, SUBPIXEL_BITS,
    SUBPIXEL_SCALE,
};
