//! Color inversion

use rgbkit_core::{Grid, Rgb};
use tracing::{debug, trace};

/// Replace every channel `c` with `255 - c`.
///
/// Applying it twice restores the original grid exactly.
pub fn negative(grid: &mut Grid) {
    trace!(width = grid.width(), height = grid.height(), "negative");
    grid.map_pixels(|px: Rgb| px.map_channels(|c| 255 - c));
    debug!(pixels = grid.len(), "Applied negative");
}
