//! Source image decoding and PNG rendering of assembled mosaics

use crate::io::cache::TileRenderCache;
use crate::io::configuration::MAX_RENDER_DIMENSION;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::grid::MosaicGrid;
use image::imageops::replace;
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Decode a source photograph into an RGB buffer
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_source_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgb8())
}

/// Render a mosaic grid with every tile scaled to the cache's edge length
///
/// The output is `columns * edge` by `rows * edge` pixels. Repeated tiles
/// are resized once through the cache.
///
/// # Errors
///
/// Returns an error if the render edge is zero or the output would exceed
/// the maximum render dimension
pub fn render_mosaic(grid: &MosaicGrid<'_>, cache: &mut TileRenderCache) -> Result<RgbImage> {
    let edge = cache.edge();
    if edge == 0 {
        return Err(invalid_parameter("render_size", &edge, &"must be positive"));
    }

    let (rows, columns) = grid.dimensions();
    let width = output_dimension(columns, edge)?;
    let height = output_dimension(rows, edge)?;

    let mut canvas = RgbImage::new(width, height);
    for (row, column, tile) in grid.iter() {
        let render = cache.get_or_render(tile);
        let x = column as i64 * i64::from(edge);
        let y = row as i64 * i64::from(edge);
        replace(&mut canvas, render, x, y);
    }

    Ok(canvas)
}

fn output_dimension(cells: usize, edge: u32) -> Result<u32> {
    u32::try_from(cells)
        .ok()
        .and_then(|count| count.checked_mul(edge))
        .filter(|&pixels| pixels <= MAX_RENDER_DIMENSION)
        .ok_or_else(|| {
            invalid_parameter(
                "render_size",
                &edge,
                &format!("{cells} cells would exceed {MAX_RENDER_DIMENSION} pixels"),
            )
        })
}

/// Save a rendered mosaic as PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_mosaic_as_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
