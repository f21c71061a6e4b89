//! rgbkit-io - Image I/O
//!
//! Decodes image files into [`Grid`]s and encodes grids back, using the
//! `image` crate for every codec. Decoded images are always reduced to
//! 8-bit RGB.
//!
//! # Example
//!
//! ```no_run
//! use rgbkit_io::{read_image, write_image};
//!
//! let grid = read_image("photo.png").unwrap();
//! write_image(&grid, "copy.bmp").unwrap();
//! ```

mod convert;
mod error;

pub use convert::{grid_from_dynamic, grid_from_rgb_image, grid_to_rgb_image};
pub use error::{IoError, IoResult};
pub use image::ImageFormat;

use rgbkit_core::Grid;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read an image file into a grid.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Grid> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| IoError::Decode {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let grid = grid_from_dynamic(img)?;
    debug!(path = %path.display(), width = grid.width(), height = grid.height(), "Read image");
    Ok(grid)
}

/// Decode an in-memory encoded image into a grid.
pub fn read_image_from_memory(bytes: &[u8]) -> IoResult<Grid> {
    let img = image::load_from_memory(bytes).map_err(|e| IoError::Decode {
        path: "<memory>".to_string(),
        message: e.to_string(),
    })?;
    grid_from_dynamic(img)
}

/// Write a grid, choosing the format from the file extension.
pub fn write_image<P: AsRef<Path>>(grid: &Grid, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path)
        .map_err(|_| IoError::UnsupportedFormat(path.display().to_string()))?;
    write_image_format(grid, path, format)
}

/// Write a grid in an explicit format.
///
/// Missing parent directories are created.
pub fn write_image_format<P: AsRef<Path>>(
    grid: &Grid,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let img = grid_to_rgb_image(grid)?;
    img.save_with_format(path, format)
        .map_err(|e| IoError::Encode {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    debug!(path = %path.display(), ?format, "Wrote image");
    Ok(())
}
