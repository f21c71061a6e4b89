//! 3x3 box blur
//!
//! The blur writes into a duplicate of the source and reads only from the
//! source, so the result does not depend on the order in which interior
//! pixels are visited.

use crate::window::{WINDOW_AREA, interior, window_sum};
use rgbkit_core::Grid;
use tracing::{debug, trace};

/// Return a blurred copy of `source`.
///
/// Each interior pixel becomes the truncated mean of its 3x3 neighborhood,
/// per channel. Border pixels keep their source values. Grids narrower or
/// shorter than 3 come back as an unmodified copy.
///
/// # Examples
///
/// ```
/// use rgbkit_core::{Grid, Rgb};
/// use rgbkit_filter::blur;
///
/// let mut src = Grid::new(3, 3).unwrap();
/// src.set(1, 1, Rgb::gray(90)).unwrap();
/// let out = blur(&src);
/// assert_eq!(out.get(1, 1).unwrap(), Rgb::gray(10));
/// assert_eq!(src.get(1, 1).unwrap(), Rgb::gray(90));
/// ```
pub fn blur(source: &Grid) -> Grid {
    let (width, height) = source.dimensions();
    trace!(width, height, "blur");

    let mut target = source.duplicate();
    let region = interior(width, height);
    if region.len() == 0 {
        debug!(width, height, "No interior pixels; blur is a copy");
        return target;
    }

    let count = region.len();
    for (x, y) in region {
        let mean = window_sum(source, x, y).average(WINDOW_AREA);
        target.set_unchecked(x, y, mean);
    }

    debug!(width, height, pixels = count, "Applied 3x3 box blur");
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgbkit_core::Rgb;

    fn gradient(width: u32, height: u32) -> Grid {
        let mut grid = Grid::new(width, height).unwrap();
        for (x, y, px) in grid.pixels_mut() {
            *px = Rgb::new((x * 20) as u8, (y * 30) as u8, ((x + y) * 7) as u8);
        }
        grid
    }

    #[test]
    fn test_blur_preserves_dimensions() {
        let src = gradient(7, 5);
        let out = blur(&src);
        assert_eq!(out.dimensions(), (7, 5));
    }

    #[test]
    fn test_blur_small_grids_are_copies() {
        for (w, h) in [(0, 0), (1, 1), (2, 2), (2, 8), (8, 2), (1, 10)] {
            let src = gradient(w, h);
            assert_eq!(blur(&src), src, "{w}x{h}");
        }
    }

    #[test]
    fn test_blur_uniform_is_identity() {
        let src = Grid::new_filled(6, 6, Rgb::new(37, 120, 201)).unwrap();
        assert_eq!(blur(&src), src);
    }

    #[test]
    fn test_blur_borders_untouched() {
        let src = gradient(6, 5);
        let out = blur(&src);
        for (x, y, px) in &out {
            if x == 0 || y == 0 || x == 5 || y == 4 {
                assert_eq!(px, src.get(x, y).unwrap(), "border ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_blur_reads_only_source() {
        let mut src = Grid::new(5, 3).unwrap();
        src.set(1, 1, Rgb::gray(255)).unwrap();
        let out = blur(&src);
        // (2,1) sees the original bright pixel, not the blurred (1,1)
        assert_eq!(out.get(1, 1).unwrap(), Rgb::gray(28));
        assert_eq!(out.get(2, 1).unwrap(), Rgb::gray(28));
        assert_eq!(out.get(3, 1).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_blur_truncates() {
        let mut src = Grid::new(3, 3).unwrap();
        src.set(0, 0, Rgb::new(8, 9, 17)).unwrap();
        let out = blur(&src);
        assert_eq!(out.get(1, 1).unwrap(), Rgb::new(0, 1, 1));
    }
}
