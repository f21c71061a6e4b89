//! rgbkit Core - Basic data structures for image transformation
//!
//! This crate provides the fundamental data structures used throughout
//! the rgbkit library:
//!
//! - [`Rgb`] - An 8-bit (red, green, blue) pixel
//! - [`Grid`] - The bounded, row-major pixel container
//! - [`Pixels`] / [`PixelsMut`] - Row-major `(x, y, pixel)` iterators
//! - [`Error`] - Bounds and dimension errors

pub mod error;
pub mod grid;
pub mod rgb;

pub use error::{Error, Result};
pub use grid::{Grid, Pixels, PixelsMut};
pub use rgb::Rgb;
