//! Source image partitioning into equally sized cells
//!
//! The grid is sized from the requested output width and the nominal tile
//! edge length. The output height is never supplied: it is derived from the
//! source aspect ratio. Cells tile the source from its top-left corner and
//! the remainder pixels left by integer division at the right and bottom
//! edges are dropped rather than stretched or padded.

use crate::io::error::{MosaicError, Result, invalid_parameter};

/// One grid cell in source pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    /// Grid row (0 is the top row)
    pub row: usize,
    /// Grid column (0 is the left column)
    pub column: usize,
    /// Left edge in source pixels
    pub x: u32,
    /// Top edge in source pixels
    pub y: u32,
    /// Width in source pixels
    pub width: u32,
    /// Height in source pixels
    pub height: u32,
}

/// Derived grid dimensions for one source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of cells per row
    pub horizontal_steps: u32,
    /// Number of rows
    pub vertical_steps: u32,
    /// Cell width in source pixels
    pub cell_width: u32,
    /// Cell height in source pixels
    pub cell_height: u32,
    /// Requested output width
    pub desired_width: u32,
    /// Output height derived from the source aspect ratio
    pub desired_height: u32,
}

impl GridLayout {
    /// Derive the grid for a source of the given dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tile_size` or `desired_width` is zero, or the source is empty
    /// - The tile size exceeds the requested output in either direction
    /// - The grid has more steps than the source has pixels, leaving
    ///   zero-sized cells
    pub fn compute(
        source_width: u32,
        source_height: u32,
        tile_size: u32,
        desired_width: u32,
    ) -> Result<Self> {
        if tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be positive",
            ));
        }
        if desired_width == 0 {
            return Err(invalid_parameter(
                "desired_width",
                &desired_width,
                &"must be positive",
            ));
        }
        if source_width == 0 || source_height == 0 {
            return Err(invalid_parameter(
                "source",
                &format!("{source_width}x{source_height}"),
                &"source image has no pixels",
            ));
        }

        let desired_height = derive_height(source_width, source_height, desired_width);
        let degenerate = |reason: String| MosaicError::DegenerateGrid {
            tile_size,
            desired_width,
            desired_height,
            reason,
        };

        let horizontal_steps = desired_width / tile_size;
        let vertical_steps = desired_height / tile_size;
        if horizontal_steps == 0 || vertical_steps == 0 {
            return Err(degenerate(format!(
                "grid would be {horizontal_steps}x{vertical_steps} cells"
            )));
        }

        let cell_width = source_width / horizontal_steps;
        let cell_height = source_height / vertical_steps;
        if cell_width == 0 || cell_height == 0 {
            return Err(degenerate(format!(
                "source {source_width}x{source_height} cannot hold {horizontal_steps}x{vertical_steps} cells"
            )));
        }

        Ok(Self {
            horizontal_steps,
            vertical_steps,
            cell_width,
            cell_height,
            desired_width,
            desired_height,
        })
    }

    /// Number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.vertical_steps as usize
    }

    /// Number of columns in the grid
    pub const fn columns(&self) -> usize {
        self.horizontal_steps as usize
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.rows() * self.columns()
    }

    /// Rectangle of the cell at a grid position
    pub const fn cell(&self, row: usize, column: usize) -> CellRect {
        CellRect {
            row,
            column,
            x: self.cell_width * column as u32,
            y: self.cell_height * row as u32,
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Cells in row-major order: row 0 first, column 0 first within a row
    pub fn cells(&self) -> impl Iterator<Item = CellRect> + '_ {
        (0..self.rows())
            .flat_map(move |row| (0..self.columns()).map(move |column| self.cell(row, column)))
    }
}

/// Segment a source image into a grid of cell rectangles
///
/// # Errors
///
/// Same conditions as [`GridLayout::compute`]
pub fn segment(
    source_width: u32,
    source_height: u32,
    tile_size: u32,
    desired_width: u32,
) -> Result<(GridLayout, Vec<CellRect>)> {
    let layout = GridLayout::compute(source_width, source_height, tile_size, desired_width)?;
    let cells = layout.cells().collect();
    Ok((layout, cells))
}

// round(desired_width * source_height / source_width), halves rounded up
fn derive_height(source_width: u32, source_height: u32, desired_width: u32) -> u32 {
    let numerator = u64::from(desired_width) * u64::from(source_height);
    let denominator = u64::from(source_width);
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
