//! Spatial layout of the mosaic
//!
//! This module contains spatial-related functionality including:
//! - Segmentation of the source image into cells
//! - The assembled grid of tile assignments

/// Assembled mosaic grid
pub mod grid;
/// Grid sizing and cell rectangles
pub mod segmentation;

pub use grid::MosaicGrid;
pub use segmentation::{CellRect, GridLayout};
