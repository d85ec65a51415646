//! Command-line interface for rendering a photomosaic from a tile directory

use crate::algorithm::assembler::MosaicAssembler;
use crate::io::cache::TileRenderCache;
use crate::io::configuration::{
    DEFAULT_OUTPUT_WIDTH, DEFAULT_RENDER_SIZE, DEFAULT_TILE_SIZE, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_mosaic_as_png, load_source_image, render_mosaic};
use crate::io::progress::ProgressManager;
use crate::library::tiles::TileLibrary;
use clap::Parser;
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tilemosaic")]
#[command(
    author,
    version,
    about = "Build a photomosaic from a directory of tile images"
)]
/// Command-line arguments for the mosaic builder
pub struct Cli {
    /// Source photograph to approximate
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory of .jpg tile images
    #[arg(short, long, value_name = "DIR")]
    pub tiles: PathBuf,

    /// Nominal tile edge length in output pixels
    #[arg(short = 's', long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Requested output width in pixels (height follows the source aspect ratio)
    #[arg(short, long, default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub width: u32,

    /// Edge length of each tile in the rendered PNG
    #[arg(short, long, default_value_t = DEFAULT_RENDER_SIZE)]
    pub render_size: u32,

    /// Output PNG path (defaults to <source>_mosaic.png next to the source)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output and informational logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log per-tile diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by the verbosity flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Warn
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Path the rendered mosaic is written to
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.source))
    }

    /// Reject zero-valued size parameters before any file is read
    ///
    /// # Errors
    ///
    /// Returns an error naming the first zero parameter
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("tile_size", self.tile_size),
            ("width", self.width),
            ("render_size", self.render_size),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }
        Ok(())
    }
}

/// Runs load, assembly, rendering and export for one source image
pub struct MosaicProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MosaicProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Build and save the mosaic, returning the output path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A size parameter is zero
    /// - The source image cannot be decoded
    /// - The tile library cannot be loaded
    /// - The grid is degenerate for the requested size
    /// - The rendered image cannot be written
    pub fn process(&mut self) -> Result<PathBuf> {
        let start_time = Instant::now();
        self.cli.validate()?;

        let source = load_source_image(&self.cli.source)?;
        log::info!(
            "Source '{}' is {}x{}",
            self.cli.source.display(),
            source.width(),
            source.height()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_phase("tiles", 0);
        }
        let library = TileLibrary::load_with_progress(&self.cli.tiles, |loaded, total| {
            if let Some(ref pm) = self.progress_manager {
                pm.update(loaded, total);
            }
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_phase("cells", 0);
        }
        let assembly = MosaicAssembler::default().assemble_with_progress(
            &source,
            &library,
            self.cli.tile_size,
            self.cli.width,
            |matched, total| {
                if let Some(ref pm) = self.progress_manager {
                    pm.update(matched, total);
                }
            },
        )?;

        let stats = assembly.stats;
        log::info!(
            "Matched {} cells with {} distinct tiles ({} reused, {} widened, {} escalations)",
            stats.total(),
            assembly.grid.distinct_tiles(),
            stats.reused,
            stats.widened,
            stats.escalations
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_phase("render", 1);
        }
        let mut cache = TileRenderCache::new(self.cli.render_size);
        let rendered = render_mosaic(&assembly.grid, &mut cache)?;
        log::debug!(
            "Render cache: {} hits, {} misses",
            cache.stats.hits,
            cache.stats.misses
        );

        let output_path = self.cli.output_path();
        export_mosaic_as_png(&rendered, &output_path)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.update(1, 1);
            pm.finish();
        }

        log::info!(
            "Wrote '{}' in {:.1}s",
            output_path.display(),
            start_time.elapsed().as_secs_f64()
        );
        Ok(output_path)
    }
}

fn default_output_path(source: &Path) -> PathBuf {
    let stem = source.file_stem().unwrap_or_default();
    let output_name = format!(
        "{}{}.{}",
        stem.to_string_lossy(),
        OUTPUT_SUFFIX,
        OUTPUT_EXTENSION
    );

    if let Some(parent) = source.parent() {
        parent.join(output_name)
    } else {
        PathBuf::from(output_name)
    }
}
