//! Photomosaic construction from a library of tile images
//!
//! The source image is cut into a grid of cells, each cell's mean color is
//! compared against the precomputed mean colors of the library tiles in CIE
//! L*a*b*, and a greedy search assigns a tile to every cell while preferring
//! tiles that have not been placed yet.

#![forbid(unsafe_code)]

/// Tile matching and mosaic assembly
pub mod algorithm;
/// Color averaging and perceptual distance
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile library loading
pub mod library;
/// Source segmentation and the assembled grid
pub mod spatial;

pub use algorithm::assembler::{MosaicAssembler, assemble};
pub use io::error::{MosaicError, Result};
pub use library::{Tile, TileLibrary};
pub use spatial::MosaicGrid;
