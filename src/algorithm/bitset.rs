use bitvec::prelude::*;
use std::fmt;

/// Bitset over tile identifiers
///
/// Identifiers are the dense 0-based library indices. Sized for the library
/// up front and grown on insert if a larger identifier arrives. Provides O(1)
/// membership testing for the matcher's used set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a bitset with no tiles present
    pub fn new(max_tiles: usize) -> Self {
        Self {
            bits: bitvec![0; max_tiles],
        }
    }

    /// Insert a tile identifier, returning whether it was newly added
    pub fn insert(&mut self, tile: usize) -> bool {
        if self.contains(tile) {
            return false;
        }
        if tile >= self.bits.len() {
            self.bits.resize(tile + 1, false);
        }
        self.bits.set(tile, true);
        true
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Number of identifiers the set can hold
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Extract all tile identifiers in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileBitset({} tiles: {:?})", self.count(), self.to_vec())
    }
}
