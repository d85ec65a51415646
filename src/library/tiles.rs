//! Tile library loading with precomputed average colors
//!
//! Scans a directory for tile images, decodes each one and stores it with its
//! mean color. Identifiers follow the sorted path order of the scan so a given
//! directory always produces the same library.

use crate::color::average::{Color, average};
use crate::color::distance::to_lab;
use crate::io::configuration::TILE_EXTENSION;
use crate::io::error::{MosaicError, Result, library_load_error};
use image::RgbImage;
use palette::Lab;
use palette::white_point::D65;
use std::path::{Path, PathBuf};

/// Library image eligible to represent a mosaic cell
#[derive(Debug, Clone)]
pub struct Tile {
    id: usize,
    image: RgbImage,
    average_color: Color,
    lab: Lab<D65, f64>,
    path: Option<PathBuf>,
}

impl Tile {
    fn build(id: usize, image: RgbImage, path: Option<PathBuf>) -> Result<Self> {
        let average_color = average(&image)?;
        Ok(Self {
            id,
            image,
            average_color,
            lab: to_lab(average_color),
            path,
        })
    }

    /// Stable identifier assigned at load time
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Decoded pixel buffer
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Mean color of the whole tile
    pub const fn average_color(&self) -> Color {
        self.average_color
    }

    /// Average color in CIE L*a*b*, precomputed for distance queries
    pub const fn lab(&self) -> Lab<D65, f64> {
        self.lab
    }

    /// File the tile was decoded from, if it came from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Immutable set of tiles indexed by identifier
///
/// Identifiers are dense and equal to the tile's position, so lookups are
/// plain slice indexing. The library always holds at least one tile.
#[derive(Debug, Clone)]
pub struct TileLibrary {
    tiles: Vec<Tile>,
}

impl TileLibrary {
    /// Load every tile image in a directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory does not exist or cannot be read
    /// - The directory contains no file with the tile extension
    /// - Any tile image fails to decode (the load is aborted)
    pub fn load<P: AsRef<Path>>(directory: P) -> Result<Self> {
        Self::load_with_progress(directory, |_, _| {})
    }

    /// Load a tile directory, reporting `(loaded, total)` after each file
    ///
    /// # Errors
    ///
    /// Same conditions as [`TileLibrary::load`]
    pub fn load_with_progress<P, F>(directory: P, mut on_tile: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: FnMut(usize, usize),
    {
        let directory = directory.as_ref();
        let paths = collect_tile_paths(directory)?;
        let total = paths.len();
        log::info!(
            "Loading {total} tiles from '{}'",
            directory.display()
        );

        let mut tiles = Vec::with_capacity(total);
        for (id, path) in paths.into_iter().enumerate() {
            let image = image::open(&path)
                .map_err(|e| MosaicError::ImageLoad {
                    path: path.clone(),
                    source: e,
                })?
                .to_rgb8();
            let display = path.display().to_string();
            let tile = Tile::build(id, image, Some(path))?;
            log::debug!("Tile {id} '{display}' averages {:?}", tile.average_color);

            tiles.push(tile);
            on_tile(id + 1, total);
        }

        Ok(Self { tiles })
    }

    /// Build a library from in-memory images, identified in slice order
    ///
    /// # Errors
    ///
    /// Returns an error if no images are given or any image has no area
    pub fn from_images(images: Vec<RgbImage>) -> Result<Self> {
        if images.is_empty() {
            return Err(library_load_error(
                "<memory>",
                &"at least one tile image is required",
            ));
        }

        let tiles = images
            .into_iter()
            .enumerate()
            .map(|(id, image)| Tile::build(id, image, None))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { tiles })
    }

    /// Look up a tile by identifier
    pub fn get(&self, id: usize) -> Option<&Tile> {
        self.tiles.get(id)
    }

    /// Tiles in ascending identifier order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Iterate tiles in ascending identifier order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Number of tiles in the library
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a successfully built library
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl<'a> IntoIterator for &'a TileLibrary {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Check whether a path carries the tile extension
pub fn has_tile_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TILE_EXTENSION))
}

// Top level only; sorting gives a scan order independent of the filesystem
fn collect_tile_paths(directory: &Path) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(library_load_error(
            directory,
            &"directory does not exist",
        ));
    }

    let entries = std::fs::read_dir(directory)
        .map_err(|e| library_load_error(directory, &format!("cannot read directory: {e}")))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| library_load_error(directory, &format!("cannot read entry: {e}")))?
            .path();
        if path.is_file() && has_tile_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(library_load_error(
            directory,
            &format!("no .{TILE_EXTENSION} tile images found"),
        ));
    }

    Ok(paths)
}
