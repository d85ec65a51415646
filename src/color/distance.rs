//! Perceptual color difference in CIE L*a*b* space
//!
//! Colors are treated as sRGB-encoded intensities on the 0-255 scale, decoded
//! to linear light, taken through XYZ and mapped to L*a*b* against the D65
//! reference white. The difference is the CIE 1976 delta E, the Euclidean
//! distance between the two L*a*b* triples.

use crate::color::average::Color;
use palette::white_point::D65;
use palette::color_difference::DeltaE;
use palette::{FromColor, Lab, Srgb};

/// Convert a 0-255 RGB color to CIE L*a*b* (D65)
pub fn to_lab(color: Color) -> Lab<D65, f64> {
    let srgb = Srgb::new(color.red / 255.0, color.green / 255.0, color.blue / 255.0);
    Lab::from_color(srgb)
}

/// CIE 1976 delta E between two colors
///
/// Symmetric, zero for identical colors and bounded for in-gamut inputs,
/// which is what lets threshold escalation terminate.
pub fn distance(a: Color, b: Color) -> f64 {
    lab_distance(to_lab(a), to_lab(b))
}

/// CIE 1976 delta E between two L*a*b* triples
pub fn lab_distance(a: Lab<D65, f64>, b: Lab<D65, f64>) -> f64 {
    a.delta_e(b)
}
