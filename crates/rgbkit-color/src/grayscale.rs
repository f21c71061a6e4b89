//! Grayscale conversion
//!
//! Two flavors:
//! - [`weighted_grayscale`]: perceptual weights 0.299 / 0.587 / 0.114, all
//!   three applied to the red channel (green and blue inputs are ignored)
//! - [`grayscale`]: unweighted integer average of the three channels

use rgbkit_core::{Grid, Rgb};
use tracing::{debug, trace};

/// Red-weighted luminance of a pixel, truncated.
///
/// Sums `r * 0.299 + r * 0.587 + r * 0.114` in `f64`, left to right. The sum
/// can land just under an integer (1 yields 0.999..., so 0), and the
/// truncation keeps that result.
#[inline]
pub fn weighted_luminance(px: Rgb) -> u8 {
    let r = f64::from(px.red);
    let total = r * 0.299 + r * 0.587 + r * 0.114;
    total as u8
}

/// Convert to gray using the red-weighted luminance.
pub fn weighted_grayscale(grid: &mut Grid) {
    trace!(width = grid.width(), height = grid.height(), "weighted_grayscale");
    grid.map_pixels(|px| Rgb::gray(weighted_luminance(px)));
    debug!(pixels = grid.len(), "Applied weighted grayscale");
}

/// Convert to gray using the plain channel average.
pub fn grayscale(grid: &mut Grid) {
    trace!(width = grid.width(), height = grid.height(), "grayscale");
    grid.map_pixels(|px| Rgb::gray(px.brightness()));
    debug!(pixels = grid.len(), "Applied grayscale");
}
