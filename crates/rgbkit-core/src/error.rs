//! Error types for rgbkit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant carries the coordinates or sizes involved so callers can
//! report the failure without re-deriving it.

use thiserror::Error;

/// rgbkit core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Coordinate outside the grid extent
    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Dimensions whose pixel count cannot be addressed
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the requested dimensions
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
