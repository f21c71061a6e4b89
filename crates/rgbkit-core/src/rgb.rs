//! RGB pixel value
//!
//! An [`Rgb`] is an ordered (red, green, blue) triple of 8-bit intensities.
//! Transforms that compute intermediate values outside `[0, 255]` convert
//! back through [`Rgb::from_f64_channels`], which truncates toward zero and
//! saturates.

/// A single 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red intensity
    pub red: u8,
    /// Green intensity
    pub green: u8,
    /// Blue intensity
    pub blue: u8,
}

impl Rgb {
    /// Pure black (0, 0, 0)
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Middle gray (128, 128, 128)
    pub const MID_GRAY: Rgb = Rgb::new(128, 128, 128);
    /// Pure white (255, 255, 255)
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a pixel from its three channels.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Create a gray pixel with all three channels equal to `value`.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Build a pixel from floating-point channel values.
    ///
    /// Each value is truncated toward zero and saturated into `[0, 255]`
    /// (NaN maps to 0). This is the single rounding rule shared by every
    /// transform that scales channels by a float factor.
    #[inline]
    pub fn from_f64_channels(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red as u8, green as u8, blue as u8)
    }

    /// Integer average of the three channels, truncated.
    #[inline]
    pub fn brightness(self) -> u8 {
        let sum = u16::from(self.red) + u16::from(self.green) + u16::from(self.blue);
        (sum / 3) as u8
    }

    /// Apply `f` to each channel independently.
    #[inline]
    pub fn map_channels(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }

    /// The channels as an array in (red, green, blue) order.
    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        (rgb.red, rgb.green, rgb.blue)
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}
