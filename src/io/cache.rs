use crate::library::tiles::Tile;
use image::RgbImage;
use image::imageops::{FilterType, resize};
use std::collections::HashMap;

/// Memoization cache for scaled tile renders
///
/// A tile usually appears many times in one mosaic. Each distinct tile is
/// resized once to the render edge and reused for every cell it occupies.
pub struct TileRenderCache {
    edge: u32,
    renders: HashMap<usize, RgbImage>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl TileRenderCache {
    /// Create an empty cache rendering tiles at `edge` x `edge` pixels
    pub fn new(edge: u32) -> Self {
        Self {
            edge,
            renders: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Edge length of every cached render
    pub const fn edge(&self) -> u32 {
        self.edge
    }

    /// Number of distinct tiles rendered so far
    pub fn len(&self) -> usize {
        self.renders.len()
    }

    /// Check whether nothing has been rendered yet
    pub fn is_empty(&self) -> bool {
        self.renders.is_empty()
    }

    /// Retrieve the cached render of a tile or resize and store it
    pub fn get_or_render(&mut self, tile: &Tile) -> &RgbImage {
        use std::collections::hash_map::Entry;

        match self.renders.entry(tile.id()) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                let image = tile.image();
                let render = if image.dimensions() == (self.edge, self.edge) {
                    image.clone()
                } else {
                    resize(image, self.edge, self.edge, FilterType::Lanczos3)
                };
                entry.insert(render)
            }
        }
    }
}
