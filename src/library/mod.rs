//! Tile library construction

/// Tile loading and the immutable tile set
pub mod tiles;

pub use tiles::{Tile, TileLibrary};
