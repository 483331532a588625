//! Normalized RGBA components.

use crate::buffer::Pixel;

/// The four channels of a [`Pixel`] rescaled to `0.0..=1.0`.
///
/// Intermediate filter results may leave the unit range; the range is only
/// enforced when converting back with [`Components::to_pixel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Components {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Components {
    #[inline]
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Arithmetic mean of red, green and blue.
    ///
    /// Filters historically call this the "median" of the pixel.
    #[inline]
    pub fn mean(&self) -> f64 {
        (self.red + self.green + self.blue) / 3.0
    }

    /// The standard threshold gate: every color channel is `>= threshold`.
    #[inline]
    pub fn all_at_least(&self, threshold: f64) -> bool {
        self.red >= threshold && self.green >= threshold && self.blue >= threshold
    }

    /// Apply `f` to red, green and blue, leaving alpha untouched.
    #[inline]
    pub fn map_rgb(self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self {
            red: f(self.red),
            green: f(self.green),
            blue: f(self.blue),
            alpha: self.alpha,
        }
    }

    /// Convert back to 8-bit channels, clamping each to `0..=255`.
    #[inline]
    pub fn to_pixel(self) -> Pixel {
        Pixel::new(
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
            channel_to_u8(self.alpha),
        )
    }
}

impl From<Pixel> for Components {
    #[inline]
    fn from(pixel: Pixel) -> Self {
        Self {
            red: pixel.red as f64 / 255.0,
            green: pixel.green as f64 / 255.0,
            blue: pixel.blue as f64 / 255.0,
            alpha: pixel.alpha as f64 / 255.0,
        }
    }
}

/// Saturating conversion of one normalized channel to 8 bits.
///
/// `> 1.0` maps to 255, `< 0.0` (and NaN) to 0, anything else to
/// `round(value * 255)`.
#[inline]
pub fn channel_to_u8(value: f64) -> u8 {
    if value.is_nan() || value < 0.0 {
        0
    } else if value > 1.0 {
        255
    } else {
        (value * 255.0).round() as u8
    }
}
