//! rgbkit - Image transformation library for 8-bit RGB grids
//!
//! # Overview
//!
//! - Point transforms: grayscale, solarize, three-band gray, extreme
//!   contrast, sepia, negative ([`color`])
//! - Neighborhood transforms: 3x3 box blur, edge detection ([`filter`])
//! - Image file I/O ([`io`])
//! - Text-configured pipelines of the above ([`Operation`], [`Pipeline`])
//!
//! # Example
//!
//! ```
//! use rgbkit::{Grid, Pipeline, Rgb};
//!
//! let grid = Grid::new_filled(8, 8, Rgb::new(200, 50, 10)).unwrap();
//! let pipeline: Pipeline = "solarize:128,blur".parse().unwrap();
//! let out = pipeline.apply(grid);
//! assert_eq!(out.get(4, 4).unwrap(), Rgb::new(200, 205, 245));
//! ```

pub mod ops;

// Re-export core types (primary data structures used everywhere)
pub use rgbkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rgbkit_color as color;
pub use rgbkit_filter as filter;
pub use rgbkit_io as io;

pub use ops::{Operation, ParseOperationError, Pipeline};
