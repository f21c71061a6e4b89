//! Conversion between [`Grid`] and `image` buffers

use crate::IoResult;
use image::{DynamicImage, RgbImage};
use rgbkit_core::Grid;

/// Copy an 8-bit RGB image into a new grid.
pub fn grid_from_rgb_image(img: &RgbImage) -> IoResult<Grid> {
    Ok(Grid::from_rgb_bytes(img.width(), img.height(), img.as_raw())?)
}

/// Convert any decoded image to a grid, discarding alpha and reducing
/// higher bit depths to 8 bits per channel.
pub fn grid_from_dynamic(img: DynamicImage) -> IoResult<Grid> {
    grid_from_rgb_image(&img.into_rgb8())
}

/// Copy a grid into an 8-bit RGB image.
///
/// # Errors
///
/// Returns [`crate::IoError::UnsupportedFormat`] for grids with a zero
/// dimension, which no encoder accepts.
pub fn grid_to_rgb_image(grid: &Grid) -> IoResult<RgbImage> {
    if grid.is_empty() {
        return Err(crate::IoError::UnsupportedFormat(format!(
            "cannot encode empty {}x{} grid",
            grid.width(),
            grid.height()
        )));
    }
    RgbImage::from_raw(grid.width(), grid.height(), grid.to_rgb_bytes()).ok_or_else(|| {
        crate::IoError::UnsupportedFormat("pixel buffer does not match dimensions".into())
    })
}
