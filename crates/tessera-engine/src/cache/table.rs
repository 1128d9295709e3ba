use std::collections::HashMap;

use crate::coords::IRect;
use crate::surface::ImageId;

use super::CacheKey;

/// A rasterized triangle kept across frames.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CacheEntry {
    pub image: ImageId,
    /// Image placement relative to the key origin.
    pub placement: IRect,
}

impl CacheEntry {
    /// Destination rect when the key origin sits at `origin`.
    #[inline]
    pub fn placed_at(&self, origin: (i32, i32)) -> IRect {
        self.placement.translated(origin.0, origin.1)
    }
}

/// Keyed store of offscreen images.
///
/// The table only tracks handles; releasing the images on the surface is the
/// owner's job, done through [`drain`](Self::drain).
#[derive(Debug, Default)]
pub struct TriangleCache {
    entries: HashMap<CacheKey, CacheEntry>,
}

impl TriangleCache {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.entries.get(key).copied()
    }

    /// Stores `entry`, returning the one it replaced.
    pub fn insert(&mut self, key: CacheKey, entry: CacheEntry) -> Option<CacheEntry> {
        self.entries.insert(key, entry)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the table, yielding every entry so its image can be released.
    pub fn drain(&mut self) -> impl Iterator<Item = CacheEntry> + '_ {
        self.entries.drain().map(|(_, entry)| entry)
    }
}
