//! rgbkit Filter - Neighborhood filtering operations
//!
//! Both filters visit only interior pixels, i.e. those with a full 3x3
//! neighborhood inside the grid. The outermost ring is never recomputed.
//!
//! - [`blur`]: 3x3 box average into a new grid
//! - [`detect_edges`]: in-place brightness gradient threshold

pub mod blur;
pub mod edge;
pub mod window;

pub use blur::blur;
pub use edge::{brightness_gradient, detect_edges};
pub use window::{ChannelSums, Interior, interior, window_sum};
