//! Threshold-based color maps
//!
//! - [`solarize`]: invert channels below a threshold
//! - [`three_band_grayscale`]: quantize brightness to black / gray / white
//! - [`extreme_contrast`]: push every channel to 0 or 255

use rgbkit_core::{Grid, Rgb};
use tracing::{debug, trace};

/// Brightness below this is black in [`three_band_grayscale`]
pub const BAND_LOW: u8 = 85;
/// Brightness at or above this is white in [`three_band_grayscale`]
pub const BAND_HIGH: u8 = 171;
/// Channels below this become 0 in [`extreme_contrast`], others 255
pub const CONTRAST_CUTOFF: u8 = 127;

/// Invert every channel whose intensity is below `threshold`.
///
/// Each channel is tested on its own. A threshold of 0 changes nothing;
/// any threshold above 255 inverts every channel.
pub fn solarize(grid: &mut Grid, threshold: u16) {
    trace!(width = grid.width(), height = grid.height(), threshold, "solarize");
    grid.map_pixels(|px| {
        px.map_channels(|c| {
            if u16::from(c) < threshold {
                255 - c
            } else {
                c
            }
        })
    });
    debug!(threshold, "Applied solarize");
}

/// Map each pixel to black, mid-gray or white by its brightness.
///
/// - brightness < 85: black
/// - 85 <= brightness < 171: (128, 128, 128)
/// - brightness >= 171: white
pub fn three_band_grayscale(grid: &mut Grid) {
    trace!(width = grid.width(), height = grid.height(), "three_band_grayscale");
    grid.map_pixels(|px| match px.brightness() {
        b if b < BAND_LOW => Rgb::BLACK,
        b if b < BAND_HIGH => Rgb::MID_GRAY,
        _ => Rgb::WHITE,
    });
    debug!(pixels = grid.len(), "Applied three-band grayscale");
}

/// Set each channel to 0 if below 127, otherwise 255.
pub fn extreme_contrast(grid: &mut Grid) {
    trace!(width = grid.width(), height = grid.height(), "extreme_contrast");
    grid.map_pixels(|px| px.map_channels(|c| if c < CONTRAST_CUTOFF { 0 } else { 255 }));
    debug!(pixels = grid.len(), "Applied extreme contrast");
}
