//! rgbkit-test - Regression test framework for rgbkit
//!
//! Regression tests create a [`RegParams`], record numbered checks against
//! it, and assert on [`RegParams::cleanup`] at the end. Two modes:
//!
//! - **Compare**: run every check (default)
//! - **Display**: also write intermediate grids to `tests/regout` for
//!   visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use rgbkit_test::{RegParams, gradient_grid};
//!
//! let mut rp = RegParams::new("blur");
//! let grid = gradient_grid(8, 8).unwrap();
//! rp.compare_values(8.0, grid.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use rgbkit_core::{Grid, Rgb};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // rgbkit-test is at crates/rgbkit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// A grid whose channels vary smoothly with position.
///
/// Red grows with `x`, green with `y`, blue with `x + y`, each wrapping
/// modulo 256.
pub fn gradient_grid(width: u32, height: u32) -> TestResult<Grid> {
    let mut grid = Grid::new(width, height)?;
    for (x, y, px) in grid.pixels_mut() {
        *px = Rgb::new(
            (x.wrapping_mul(7) % 256) as u8,
            (y.wrapping_mul(11) % 256) as u8,
            ((x + y).wrapping_mul(5) % 256) as u8,
        );
    }
    Ok(grid)
}

/// A checkerboard of `cell`-sized squares alternating between two colors.
pub fn checker_grid(width: u32, height: u32, cell: u32, a: Rgb, b: Rgb) -> TestResult<Grid> {
    let cell = cell.max(1);
    let mut grid = Grid::new(width, height)?;
    for (x, y, px) in grid.pixels_mut() {
        *px = if (x / cell + y / cell) % 2 == 0 { a } else { b };
    }
    Ok(grid)
}

/// A grid where pixel `(x, y)` has all channels set from a hash of its
/// coordinates, covering the full 0..=255 range.
pub fn pattern_grid(width: u32, height: u32) -> TestResult<Grid> {
    let mut grid = Grid::new(width, height)?;
    for (x, y, px) in grid.pixels_mut() {
        let h = x.wrapping_mul(73_856_093) ^ y.wrapping_mul(19_349_663);
        *px = Rgb::new(h as u8, (h >> 8) as u8, (h >> 16) as u8);
    }
    Ok(grid)
}
