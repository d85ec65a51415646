//! Error types for library loading, segmentation and mosaic export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Pixel region passed to color averaging has no area
    InvalidRegion {
        /// Region width in pixels
        width: u32,
        /// Region height in pixels
        height: u32,
    },

    /// Tile library could not be built
    ///
    /// Occurs when the directory is missing or unreadable, or when it
    /// holds no file with the tile extension.
    LibraryLoad {
        /// Directory that was scanned
        path: PathBuf,
        /// Description of what went wrong
        reason: String,
    },

    /// Requested output cannot be divided into a grid of non-empty cells
    DegenerateGrid {
        /// Nominal tile edge length in output pixels
        tile_size: u32,
        /// Requested output width
        desired_width: u32,
        /// Output height derived from the source aspect ratio
        desired_height: u32,
        /// Explanation of which dimension collapsed
        reason: String,
    },

    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save the rendered mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion { width, height } => {
                write!(f, "Invalid pixel region {width}x{height}: region has no area")
            }
            Self::LibraryLoad { path, reason } => {
                write!(
                    f,
                    "Failed to load tile library '{}': {reason}",
                    path.display()
                )
            }
            Self::DegenerateGrid {
                tile_size,
                desired_width,
                desired_height,
                reason,
            } => {
                write!(
                    f,
                    "Degenerate grid for tile size {tile_size} at {desired_width}x{desired_height}: {reason}"
                )
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a library load error for the given directory
pub fn library_load_error(path: impl Into<PathBuf>, reason: &impl ToString) -> MosaicError {
    MosaicError::LibraryLoad {
        path: path.into(),
        reason: reason.to_string(),
    }
}
