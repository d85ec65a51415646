//! Mosaic assembly: segmentation, averaging and matching in row-major order
//!
//! The matcher's used set is shared across cells, so the order in which
//! cells are matched decides the result. Cells are always visited row by row
//! from the top, left to right within a row, which makes assembly fully
//! deterministic for a given source and library.

use crate::algorithm::matcher::TileMatcher;
use crate::algorithm::session::{MatchSession, MatchStats};
use crate::color::average::average;
use crate::io::error::{Result, invalid_parameter};
use crate::library::tiles::TileLibrary;
use crate::spatial::grid::MosaicGrid;
use crate::spatial::segmentation::GridLayout;
use image::RgbImage;
use image::imageops::crop_imm;

/// Finished grid together with how it was produced
#[derive(Debug, Clone)]
pub struct Assembly<'a> {
    /// Tile assignments in row-major order
    pub grid: MosaicGrid<'a>,
    /// Segmentation the grid was built from
    pub layout: GridLayout,
    /// Match counters of the conversion's session
    pub stats: MatchStats,
}

/// Drives one mosaic conversion per call
#[derive(Debug, Clone, Copy, Default)]
pub struct MosaicAssembler {
    matcher: TileMatcher,
}

impl MosaicAssembler {
    /// Create an assembler using the given matcher tolerances
    pub const fn new(matcher: TileMatcher) -> Self {
        Self { matcher }
    }

    /// Assemble a mosaic grid for a source image
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is degenerate for the requested size or a
    /// parameter is zero. Nothing is matched when validation fails.
    pub fn assemble<'a>(
        &self,
        source: &RgbImage,
        library: &'a TileLibrary,
        tile_size: u32,
        desired_width: u32,
    ) -> Result<Assembly<'a>> {
        self.assemble_with_progress(source, library, tile_size, desired_width, |_, _| {})
    }

    /// Assemble a mosaic grid, reporting `(matched, total)` after each cell
    ///
    /// # Errors
    ///
    /// Same conditions as [`MosaicAssembler::assemble`]
    pub fn assemble_with_progress<'a, F>(
        &self,
        source: &RgbImage,
        library: &'a TileLibrary,
        tile_size: u32,
        desired_width: u32,
        mut on_cell: F,
    ) -> Result<Assembly<'a>>
    where
        F: FnMut(usize, usize),
    {
        let layout = GridLayout::compute(source.width(), source.height(), tile_size, desired_width)?;
        let total = layout.cell_count();
        log::info!(
            "Assembling {}x{} grid of {}x{} cells",
            layout.columns(),
            layout.rows(),
            layout.cell_width,
            layout.cell_height
        );

        let mut session = MatchSession::for_library(library);
        let mut tiles = Vec::with_capacity(total);
        for cell in layout.cells() {
            let region = crop_imm(source, cell.x, cell.y, cell.width, cell.height);
            let color = average(&*region)?;
            let tile = self
                .matcher
                .match_tile(color, &mut session, library)
                .ok_or_else(|| {
                    invalid_parameter(
                        "cell color",
                        &format!("{color:?}"),
                        &format!("no tile matched at row {} column {}", cell.row, cell.column),
                    )
                })?;
            tiles.push(tile);
            on_cell(tiles.len(), total);
        }

        let grid = MosaicGrid::from_row_major(layout.rows(), layout.columns(), tiles)?;
        Ok(Assembly {
            grid,
            layout,
            stats: session.stats(),
        })
    }
}

/// Assemble a mosaic grid with the default matcher
///
/// # Errors
///
/// Same conditions as [`MosaicAssembler::assemble`]
pub fn assemble<'a>(
    source: &RgbImage,
    library: &'a TileLibrary,
    tile_size: u32,
    desired_width: u32,
) -> Result<MosaicGrid<'a>> {
    MosaicAssembler::default()
        .assemble(source, library, tile_size, desired_width)
        .map(|assembly| assembly.grid)
}
