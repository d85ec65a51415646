//! Mean color extraction over rectangular pixel regions

use crate::io::error::{MosaicError, Result};
use image::{GenericImageView, Rgb};

/// RGB color with real-valued channels on the 0-255 scale
///
/// Averages are not integral, so channels are kept as `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red intensity
    pub red: f64,
    /// Green intensity
    pub green: f64,
    /// Blue intensity
    pub blue: f64,
}

impl Color {
    /// Create a color from channel intensities
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Create a color from an 8-bit pixel
    pub fn from_pixel(pixel: Rgb<u8>) -> Self {
        let [red, green, blue] = pixel.0;
        Self::new(f64::from(red), f64::from(green), f64::from(blue))
    }

    /// Channels as an array in RGB order
    pub const fn channels(&self) -> [f64; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Mean color of every pixel in a region
///
/// Accepts any RGB view: whole tile images as well as cells cropped out of a
/// source photograph.
///
/// # Errors
///
/// Returns `InvalidRegion` if the region has zero width or height
pub fn average<V>(region: &V) -> Result<Color>
where
    V: GenericImageView<Pixel = Rgb<u8>>,
{
    let (width, height) = region.dimensions();
    if width == 0 || height == 0 {
        return Err(MosaicError::InvalidRegion { width, height });
    }

    let mut sums = [0.0_f64; 3];
    for (_, _, pixel) in region.pixels() {
        for (sum, &channel) in sums.iter_mut().zip(pixel.0.iter()) {
            *sum += f64::from(channel);
        }
    }

    let pixel_count = f64::from(width) * f64::from(height);
    let [red, green, blue] = sums.map(|sum| sum / pixel_count);
    Ok(Color::new(red, green, blue))
}
