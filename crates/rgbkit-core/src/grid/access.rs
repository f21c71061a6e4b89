//! Pixel access functions
//!
//! Bounded get/set of individual pixels. The checked forms return
//! [`Error::OutOfBounds`]; the unchecked forms are for inner loops whose
//! coordinates are already known to be in range.

use super::Grid;
use crate::Rgb;
use crate::error::{Error, Result};

impl Grid {
    /// Check whether `(x, y)` lies inside the grid.
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn check_bounds(&self, x: u32, y: u32) -> Result<usize> {
        if self.contains(x, y) {
            Ok(self.index(x, y))
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Get the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `x >= width` or `y >= height`.
    pub fn get(&self, x: u32, y: u32) -> Result<Rgb> {
        let idx = self.check_bounds(x, y)?;
        Ok(self.data[idx])
    }

    /// Overwrite the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `x >= width` or `y >= height`.
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgb) -> Result<()> {
        let idx = self.check_bounds(x, y)?;
        self.data[idx] = pixel;
        Ok(())
    }

    /// Get a pixel without the bounds error.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> Rgb {
        assert!(self.contains(x, y), "({x}, {y}) outside {}x{}", self.width, self.height);
        self.data[self.index(x, y)]
    }

    /// Set a pixel without the bounds error.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, pixel: Rgb) {
        assert!(self.contains(x, y), "({x}, {y}) outside {}x{}", self.width, self.height);
        let idx = self.index(x, y);
        self.data[idx] = pixel;
    }
}
