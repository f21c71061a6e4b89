//! Edge detection by brightness gradient
//!
//! Each interior pixel is compared with its right and bottom neighbors
//! only. The grid is rewritten in place: row-major order guarantees that
//! both neighbors are still unmodified when they are read, and the
//! overwritten pixels above and to the left are never read again.
//! Border pixels keep their original colors.

use crate::window::interior;
use rgbkit_core::{Grid, Rgb};
use tracing::{debug, trace, warn};

/// Absolute brightness differences `(bottom, right)` at an interior pixel.
///
/// # Panics
///
/// Panics if `(x + 1, y)` or `(x, y + 1)` is outside the grid.
pub fn brightness_gradient(grid: &Grid, x: u32, y: u32) -> (u8, u8) {
    let center = grid.get_unchecked(x, y).brightness();
    let bottom = grid.get_unchecked(x, y + 1).brightness();
    let right = grid.get_unchecked(x + 1, y).brightness();
    (center.abs_diff(bottom), center.abs_diff(right))
}

/// Mark interior pixels as edges (black) or flat (white).
///
/// A pixel is an edge when its brightness differs from the bottom or the
/// right neighbor by more than `threshold`. A NaN threshold leaves the grid
/// unchanged. A negative threshold marks every interior pixel as an edge.
pub fn detect_edges(grid: &mut Grid, threshold: f64) {
    let (width, height) = grid.dimensions();
    trace!(width, height, threshold, "detect_edges");

    if threshold.is_nan() {
        warn!("NaN edge threshold; grid left unchanged");
        return;
    }

    let mut edges = 0usize;
    let mut visited = 0usize;
    for (x, y) in interior(width, height) {
        let (bottom, right) = brightness_gradient(grid, x, y);
        let is_edge = f64::from(bottom) > threshold || f64::from(right) > threshold;
        if is_edge {
            edges += 1;
        }
        visited += 1;
        grid.set_unchecked(x, y, if is_edge { Rgb::BLACK } else { Rgb::WHITE });
    }

    debug!(width, height, visited, edges, threshold, "Applied edge detection");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_grid_is_white_inside() {
        let color = Rgb::new(40, 90, 140);
        let mut grid = Grid::new_filled(5, 4, color).unwrap();
        detect_edges(&mut grid, 0.0);
        for (x, y, px) in &grid {
            let border = x == 0 || y == 0 || x == 4 || y == 3;
            let expected = if border { color } else { Rgb::WHITE };
            assert_eq!(px, expected, "({x}, {y})");
        }
    }

    #[test]
    fn test_vertical_step_edge() {
        // Left two columns dark, right three bright
        let mut grid = Grid::new(5, 3).unwrap();
        for (x, _, px) in grid.pixels_mut() {
            *px = if x < 2 { Rgb::gray(10) } else { Rgb::gray(200) };
        }
        detect_edges(&mut grid, 20.0);
        assert_eq!(grid.get(1, 1).unwrap(), Rgb::BLACK);
        assert_eq!(grid.get(2, 1).unwrap(), Rgb::WHITE);
        assert_eq!(grid.get(3, 1).unwrap(), Rgb::WHITE);
        assert_eq!(grid.get(0, 1).unwrap(), Rgb::gray(10));
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut grid = Grid::new_filled(3, 3, Rgb::gray(100)).unwrap();
        grid.set(2, 1, Rgb::gray(110)).unwrap();
        let mut at = grid.duplicate();
        detect_edges(&mut at, 10.0);
        assert_eq!(at.get(1, 1).unwrap(), Rgb::WHITE);
        detect_edges(&mut grid, 9.5);
        assert_eq!(grid.get(1, 1).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_left_and_top_neighbors_are_ignored() {
        let mut grid = Grid::new_filled(4, 4, Rgb::gray(50)).unwrap();
        grid.set(0, 1, Rgb::WHITE).unwrap();
        grid.set(1, 0, Rgb::WHITE).unwrap();
        detect_edges(&mut grid, 5.0);
        assert_eq!(grid.get(1, 1).unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_nan_threshold_is_noop() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(2, 2, Rgb::WHITE).unwrap();
        let before = grid.duplicate();
        detect_edges(&mut grid, f64::NAN);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_negative_threshold_marks_all() {
        let mut grid = Grid::new_filled(4, 4, Rgb::gray(77)).unwrap();
        detect_edges(&mut grid, -1.0);
        for (x, y) in interior(4, 4) {
            assert_eq!(grid.get(x, y).unwrap(), Rgb::BLACK);
        }
    }

    #[test]
    fn test_small_grids_unchanged() {
        for (w, h) in [(0, 0), (1, 1), (2, 5), (5, 2)] {
            let mut grid = Grid::new_filled(w, h, Rgb::gray(3)).unwrap();
            let before = grid.duplicate();
            detect_edges(&mut grid, 0.0);
            assert_eq!(grid, before, "{w}x{h}");
        }
    }

    #[test]
    fn test_brightness_gradient() {
        let mut grid = Grid::new_filled(3, 3, Rgb::gray(100)).unwrap();
        grid.set(1, 2, Rgb::new(30, 30, 31)).unwrap();
        grid.set(2, 1, Rgb::gray(160)).unwrap();
        assert_eq!(brightness_gradient(&grid, 1, 1), (70, 60));
    }
}
