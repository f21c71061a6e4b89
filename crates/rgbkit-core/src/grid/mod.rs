//! GRID - The pixel container
//!
//! A [`Grid`] is a rectangular, row-major array of [`Rgb`] pixels whose
//! width and height are fixed for its lifetime.
//!
//! # Pixel layout
//!
//! - Pixel `(x, y)` is stored at index `y * width + x`
//! - Coordinates satisfy `0 <= x < width` and `0 <= y < height`
//! - Zero-sized grids are valid and contain no pixels
//!
//! # Ownership model
//!
//! A `Grid` owns its buffer outright. Transforms either borrow it mutably
//! and rewrite it in place, or borrow it immutably and return a new grid.
//! [`Grid::duplicate`] always produces an independent copy.

mod access;
mod iter;

pub use iter::{Pixels, PixelsMut};

use crate::Rgb;
use crate::error::{Error, Result};

/// Main image container
///
/// # Examples
///
/// ```
/// use rgbkit_core::{Grid, Rgb};
///
/// let mut grid = Grid::new(4, 3).unwrap();
/// grid.set(1, 2, Rgb::WHITE).unwrap();
/// assert_eq!(grid.get(1, 2).unwrap(), Rgb::WHITE);
/// assert!(grid.get(4, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major pixel data, `width * height` entries
    data: Vec<Rgb>,
}

impl Grid {
    /// Create a new all-black grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, Rgb::BLACK)
    }

    /// Create a new grid with every pixel set to `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` overflows `usize`.
    pub fn new_filled(width: u32, height: u32, color: Rgb) -> Result<Self> {
        let len = Self::pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![color; len],
        })
    }

    /// Wrap an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<Rgb>) -> Result<Self> {
        let expected = Self::pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a grid from packed 3-byte RGB samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `bytes.len() != width * height * 3`.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let len = Self::pixel_count(width, height)?;
        let expected = len.checked_mul(3).ok_or(Error::InvalidDimension { width, height })?;
        if bytes.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Pack the pixels into 3-byte RGB samples, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.channels()).collect()
    }

    #[inline]
    fn pixel_count(width: u32, height: u32) -> Result<usize> {
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the grid has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw row-major pixel data.
    #[inline]
    pub fn as_slice(&self) -> &[Rgb] {
        &self.data
    }

    /// A single row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgb] {
        assert!(y < self.height, "row {y} out of range for height {}", self.height);
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Create an independent copy with identical dimensions and content.
    ///
    /// Mutating the copy never affects `self`, and vice versa.
    pub fn duplicate(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }

    /// Check if two grids have the same width and height.
    pub fn sizes_equal(&self, other: &Grid) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Apply a per-pixel color map to every pixel in row-major order.
    ///
    /// Each result is written back before the next pixel is visited.
    pub fn map_pixels(&mut self, mut f: impl FnMut(Rgb) -> Rgb) {
        for px in self.data.iter_mut() {
            *px = f(*px);
        }
    }

    /// Consume the grid, returning its pixel buffer.
    pub fn into_raw(self) -> Vec<Rgb> {
        self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
