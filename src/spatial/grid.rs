//! Assembled mosaic grid of borrowed library tiles

use crate::io::error::{Result, invalid_parameter};
use crate::library::tiles::Tile;
use ndarray::{Array2, ArrayView1};
use std::collections::HashSet;

/// Row-major grid of tile assignments
///
/// Cells borrow tiles from the library, so a tile that recurs across the
/// mosaic is stored once. Dimensions are fixed at construction.
#[derive(Debug, Clone)]
pub struct MosaicGrid<'a> {
    cells: Array2<&'a Tile>,
}

impl<'a> MosaicGrid<'a> {
    /// Build a grid from tiles listed in row-major order
    ///
    /// # Errors
    ///
    /// Returns an error if the number of tiles does not equal `rows * columns`
    pub fn from_row_major(rows: usize, columns: usize, tiles: Vec<&'a Tile>) -> Result<Self> {
        let count = tiles.len();
        let cells = Array2::from_shape_vec((rows, columns), tiles).map_err(|e| {
            invalid_parameter(
                "tiles",
                &count,
                &format!("cannot shape into {rows}x{columns} grid: {e}"),
            )
        })?;
        Ok(Self { cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions (rows, columns)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Tile at a grid position
    pub fn get(&self, row: usize, column: usize) -> Option<&'a Tile> {
        self.cells.get((row, column)).copied()
    }

    /// Iterate rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = ArrayView1<'_, &'a Tile>> {
        self.cells.outer_iter()
    }

    /// Iterate `(row, column, tile)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &'a Tile)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, column), &tile)| (row, column, tile))
    }

    /// Tile identifiers laid out as rows
    pub fn tile_ids(&self) -> Vec<Vec<usize>> {
        self.iter_rows()
            .map(|row| row.iter().map(|tile| tile.id()).collect())
            .collect()
    }

    /// Number of distinct tiles appearing in the grid
    pub fn distinct_tiles(&self) -> usize {
        self.cells
            .iter()
            .map(|tile| tile.id())
            .collect::<HashSet<_>>()
            .len()
    }
}
