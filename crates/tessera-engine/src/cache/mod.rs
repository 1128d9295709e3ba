//! Cross-frame cache of rasterized uniform-color triangles.
//!
//! GUI frames redraw the same widgets over and over; a triangle whose key was
//! seen before is copied from its stored image instead of scan-converted.

mod key;
mod table;

pub use key::{CacheKey, KeyVertex};
pub use table::{CacheEntry, TriangleCache};
