//! rgbkit Color - Per-pixel color transforms
//!
//! Every function here maps each pixel's color independently of its
//! neighbors and rewrites the grid in place:
//!
//! - **Grayscale** ([`grayscale`]): red-weighted luminance, plain average
//! - **Thresholding** ([`threshold`]): solarize, three-band gray, extreme contrast
//! - **Tinting** ([`tint`]): sepia
//! - **Inversion** ([`invert`]): negative
//!
//! Channel values produced by float multipliers are truncated toward zero
//! and saturated into `[0, 255]`.

pub mod grayscale;
pub mod invert;
pub mod threshold;
pub mod tint;

// Re-export core types
pub use rgbkit_core;

pub use grayscale::{grayscale, weighted_grayscale, weighted_luminance};
pub use invert::negative;
pub use threshold::{
    BAND_HIGH, BAND_LOW, CONTRAST_CUTOFF, extreme_contrast, solarize, three_band_grayscale,
};
pub use tint::{sepia_tint, sepia_tone};
