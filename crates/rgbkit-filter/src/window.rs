//! 3x3 neighborhood primitives
//!
//! [`interior`] enumerates the coordinates that own a full 3x3 window, in
//! row-major order. [`window_sum`] totals the channels of that window.

use rgbkit_core::{Grid, Rgb};

/// Number of pixels in a 3x3 window
pub const WINDOW_AREA: u32 = 9;

/// Running per-channel totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelSums {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl ChannelSums {
    /// Add one pixel to the totals.
    #[inline]
    pub fn add(&mut self, px: Rgb) {
        self.red += u32::from(px.red);
        self.green += u32::from(px.green);
        self.blue += u32::from(px.blue);
    }

    /// Integer-divide each total by `count`, saturating at 255.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    #[inline]
    pub fn average(self, count: u32) -> Rgb {
        let quotient = |sum: u32| (sum / count).min(255) as u8;
        Rgb::new(quotient(self.red), quotient(self.green), quotient(self.blue))
    }
}

/// Sum the 3x3 window centered at `(cx, cy)`.
///
/// # Panics
///
/// Panics unless `(cx, cy)` is an interior coordinate.
pub fn window_sum(grid: &Grid, cx: u32, cy: u32) -> ChannelSums {
    let mut sums = ChannelSums::default();
    for y in cy - 1..=cy + 1 {
        for x in cx - 1..=cx + 1 {
            sums.add(grid.get_unchecked(x, y));
        }
    }
    sums
}

/// Row-major iterator over interior coordinates.
#[derive(Debug, Clone)]
pub struct Interior {
    x_end: u32,
    y_end: u32,
    x: u32,
    y: u32,
}

impl Iterator for Interior {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x >= self.x_end || self.y >= self.y_end {
            return None;
        }
        let item = (self.x, self.y);
        self.x += 1;
        if self.x == self.x_end {
            self.x = 1;
            self.y += 1;
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.x >= self.x_end || self.y >= self.y_end {
            return (0, Some(0));
        }
        let row = (self.x_end - 1) as usize;
        let full_rows = (self.y_end - self.y - 1) as usize;
        let n = full_rows * row + (self.x_end - self.x) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Interior {}

/// Interior coordinates of a `width x height` grid: `1..=width-2` by
/// `1..=height-2`, y outer.
///
/// Empty when either dimension is below 3.
pub fn interior(width: u32, height: u32) -> Interior {
    Interior {
        x_end: width.saturating_sub(1),
        y_end: height.saturating_sub(1),
        x: 1,
        y: 1,
    }
}
