//! Per-conversion record of tiles already placed in the mosaic

use crate::algorithm::bitset::TileBitset;
use crate::library::tiles::TileLibrary;

/// Used-tile state for one mosaic conversion
///
/// Tiles are remembered both in the order they were first assigned (the
/// fallback reuse pass walks that order) and in a bitset for membership
/// tests. A session only grows; reusing an already placed tile leaves it
/// unchanged.
#[derive(Debug, Clone)]
pub struct MatchSession {
    order: Vec<usize>,
    membership: TileBitset,
    stats: MatchStats,
}

/// Counters describing how matches were found
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Matches satisfied by an unused tile in the primary pass
    pub primary: usize,
    /// Matches satisfied by an unused tile in the widened pass
    pub widened: usize,
    /// Matches that reused an already placed tile
    pub reused: usize,
    /// Threshold increases across all matches
    pub escalations: usize,
}

impl MatchStats {
    /// Total number of matches made
    pub const fn total(&self) -> usize {
        self.primary + self.widened + self.reused
    }
}

impl MatchSession {
    /// Create an empty session for a library of `tile_count` tiles
    pub fn new(tile_count: usize) -> Self {
        Self {
            order: Vec::new(),
            membership: TileBitset::new(tile_count),
            stats: MatchStats::default(),
        }
    }

    /// Create an empty session sized for a library
    pub fn for_library(library: &TileLibrary) -> Self {
        Self::new(library.len())
    }

    /// Check whether a tile has been placed in this session
    pub fn is_used(&self, tile: usize) -> bool {
        self.membership.contains(tile)
    }

    /// Record a tile as placed; already placed tiles are not added twice
    pub fn mark_used(&mut self, tile: usize) {
        if self.membership.insert(tile) {
            self.order.push(tile);
        }
    }

    /// Placed tiles in the order they were first assigned
    pub fn used_tiles(&self) -> &[usize] {
        &self.order
    }

    /// Number of distinct tiles placed
    pub const fn used_count(&self) -> usize {
        self.order.len()
    }

    /// Match counters accumulated so far
    pub const fn stats(&self) -> MatchStats {
        self.stats
    }

    pub(crate) const fn stats_mut(&mut self) -> &mut MatchStats {
        &mut self.stats
    }
}
