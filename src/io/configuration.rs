//! Matching constants and runtime configuration defaults

// Threshold escalation for the tile matcher
/// Color distance accepted on the first matching cycle
pub const INITIAL_THRESHOLD: f64 = 1.0;
/// Amount the threshold grows after a cycle without a match
pub const THRESHOLD_STEP: f64 = 2.0;
/// Extra tolerance for the widened pass when a close tile was already used
pub const WIDENED_MARGIN: f64 = 5.0;
// Largest delta E between two sRGB colors is about 259 (blue against green)
/// Threshold past which escalation stops; every finite color matches before it
pub const THRESHOLD_CEILING: f64 = 400.0;

// Tile library
/// File extension accepted when scanning a tile directory (case-insensitive)
pub const TILE_EXTENSION: &str = "jpg";

// Default values for configurable parameters
/// Nominal tile edge length in output pixels
pub const DEFAULT_TILE_SIZE: u32 = 5;
/// Requested output width in pixels
pub const DEFAULT_OUTPUT_WIDTH: u32 = 2000;
/// Edge length of each tile in the rendered PNG
pub const DEFAULT_RENDER_SIZE: u32 = 20;

// Safety limit to prevent excessive memory allocation when rendering
/// Maximum allowed rendered image dimension
pub const MAX_RENDER_DIMENSION: u32 = 40_000;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Extension of rendered output files
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
