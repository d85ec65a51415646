//! Color extraction and comparison

/// Mean color of pixel regions
pub mod average;
/// CIE L*a*b* conversion and delta E
pub mod distance;

pub use average::Color;
