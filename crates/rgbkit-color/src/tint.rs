//! Sepia tinting
//!
//! Sepia is two independent passes run back to back: a full
//! [`weighted_grayscale`] conversion, then [`sepia_tone`] over the gray
//! result.

use crate::grayscale::weighted_grayscale;
use rgbkit_core::{Grid, Rgb};
use tracing::{debug, trace};

/// Red/blue scale factors for one red band.
struct ToneBand {
    red: f64,
    blue: f64,
}

const SHADOWS: ToneBand = ToneBand {
    red: 1.1,
    blue: 0.9,
};
const MIDTONES: ToneBand = ToneBand {
    red: 1.15,
    blue: 0.85,
};
const HIGHLIGHTS: ToneBand = ToneBand {
    red: 1.08,
    blue: 0.93,
};

fn tone_pixel(px: Rgb) -> Rgb {
    let band = match px.red {
        0..63 => &SHADOWS,
        63..=191 => &MIDTONES,
        _ => &HIGHLIGHTS,
    };
    Rgb::from_f64_channels(
        f64::from(px.red) * band.red,
        f64::from(px.green),
        f64::from(px.blue) * band.blue,
    )
}

/// Warm each pixel by scaling red up and blue down.
///
/// The band is chosen by the red channel:
/// - red < 63: red x1.1, blue x0.9
/// - 63 <= red <= 191: red x1.15, blue x0.85
/// - red > 191: red x1.08, blue x0.93
///
/// Green is unchanged. Scaled values are truncated and saturate at 255.
pub fn sepia_tone(grid: &mut Grid) {
    trace!(width = grid.width(), height = grid.height(), "sepia_tone");
    grid.map_pixels(tone_pixel);
    debug!(pixels = grid.len(), "Applied sepia tone");
}

/// Convert to sepia: weighted grayscale followed by [`sepia_tone`].
pub fn sepia_tint(grid: &mut Grid) {
    weighted_grayscale(grid);
    sepia_tone(grid);
}
