//! Per-pixel color filters.
//!
//! A filter is a pure function from one pixel's [`Components`] to its new
//! [`Pixel`]. It never looks at neighbours or at the processing order, which
//! is what separates filters from the [`dither`](crate::dither) engine.
//!
//! # Filters
//!
//! | Filter | Gate | Effect |
//! |--------|------|--------|
//! | [`Binary`] | all channels >= threshold | black or white by mean vs `level` |
//! | [`Gray`] | all channels >= threshold | one channel (or the mean) to all three |
//! | [`Shading`] | all channels >= threshold | scale each channel by its factor |
//! | [`Tint`] | all channels >= threshold | push each channel toward white/black |
//! | [`Solarize`] | mean > threshold | invert channels below their factor |
//! | [`Invert`] | all channels >= threshold | `1 - c` |
//! | [`Gamma`] | all channels >= threshold | `c ^ (1 / (level * 5))` |
//! | [`Brightness`] | all channels >= threshold | `c + level` |
//! | [`Contrast`] | all channels >= threshold | scale around 0.5 |
//! | [`Sepia`] | all channels >= threshold | sepia matrix scaled by `level * 5` |
//!
//! Pixels failing the gate pass through unchanged. Every numeric parameter
//! must lie in `-1.0..=1.0`; constructors check this once and return
//! [`EngineError::InvalidParameter`] otherwise, so applying a filter cannot
//! fail.
//!
//! # Example
//!
//! ```
//! use pixel_engine::{apply_filter, Invert, Pixel, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::from_pixels(1, 1, vec![Pixel::new(10, 20, 30, 255)]).unwrap();
//! apply_filter(&mut buffer, &Invert::new(0.0).unwrap());
//!
//! assert_eq!(buffer.get(0, 0).unwrap(), Pixel::new(245, 235, 225, 255));
//! ```

mod channel;
mod level;
mod tone;

pub use channel::{Shading, Solarize, Tint};
pub use level::{Brightness, Contrast, Gamma, Sepia};
pub use tone::{Binary, Gray, GrayTone, Invert};

use std::fmt;

use crate::api::EngineError;
use crate::buffer::{Pixel, PixelBuffer};
use crate::color::Components;

/// A single-pixel transform.
///
/// Implementations must be stateless across pixels: the result may depend
/// only on the given components and the parameters captured at construction.
pub trait PixelKernel {
    /// Compute the new value of one pixel.
    fn apply(&self, components: Components) -> Pixel;
}

impl<K: PixelKernel + ?Sized> PixelKernel for &K {
    #[inline]
    fn apply(&self, components: Components) -> Pixel {
        (**self).apply(components)
    }
}

/// Apply `kernel` to every pixel of `buffer`, in place.
///
/// Each pixel is converted to [`Components`], transformed, and clamped back
/// to 8 bits. Pixels are independent of each other.
pub fn apply_filter<K: PixelKernel + ?Sized>(buffer: &mut PixelBuffer, kernel: &K) {
    let (width, height) = buffer.dimensions();
    tracing::debug!(width, height, "Applying filter");

    for pixel in buffer.pixels_mut() {
        *pixel = kernel.apply(Components::from(*pixel));
    }
}

/// Like [`apply_filter`], but returns a filtered copy and leaves `buffer`
/// untouched.
pub fn filtered<K: PixelKernel + ?Sized>(buffer: &PixelBuffer, kernel: &K) -> PixelBuffer {
    let mut out = buffer.clone();
    apply_filter(&mut out, kernel);
    out
}

/// Check that a filter parameter lies in `-1.0..=1.0`.
pub(crate) fn check_param(name: &'static str, value: f64) -> Result<f64, EngineError> {
    if (-1.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(EngineError::InvalidParameter { name, value })
    }
}

/// Any of the built-in filters, selected at run time.
///
/// Useful when the filter comes from configuration rather than code.
///
/// ```
/// use pixel_engine::{filtered, Filter, Pixel, PixelBuffer, Sepia};
///
/// let filter = Filter::from(Sepia::new(0.2, 0.0).unwrap());
/// assert_eq!(filter.name(), "sepia");
///
/// let buffer = PixelBuffer::from_pixels(1, 1, vec![Pixel::BLACK]).unwrap();
/// assert_eq!(filtered(&buffer, &filter), buffer);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    Binary(Binary),
    Gray(Gray),
    Shading(Shading),
    Tint(Tint),
    Solarize(Solarize),
    Invert(Invert),
    Gamma(Gamma),
    Brightness(Brightness),
    Contrast(Contrast),
    Sepia(Sepia),
}

impl Filter {
    /// Names of all filters, as returned by [`Filter::name`].
    pub const NAMES: [&'static str; 10] = [
        "binary",
        "gray",
        "shading",
        "tint",
        "solarize",
        "invert",
        "gamma",
        "brightness",
        "contrast",
        "sepia",
    ];

    /// Lowercase filter name.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Binary(_) => "binary",
            Filter::Gray(_) => "gray",
            Filter::Shading(_) => "shading",
            Filter::Tint(_) => "tint",
            Filter::Solarize(_) => "solarize",
            Filter::Invert(_) => "invert",
            Filter::Gamma(_) => "gamma",
            Filter::Brightness(_) => "brightness",
            Filter::Contrast(_) => "contrast",
            Filter::Sepia(_) => "sepia",
        }
    }
}

impl PixelKernel for Filter {
    fn apply(&self, components: Components) -> Pixel {
        match self {
            Filter::Binary(f) => f.apply(components),
            Filter::Gray(f) => f.apply(components),
            Filter::Shading(f) => f.apply(components),
            Filter::Tint(f) => f.apply(components),
            Filter::Solarize(f) => f.apply(components),
            Filter::Invert(f) => f.apply(components),
            Filter::Gamma(f) => f.apply(components),
            Filter::Brightness(f) => f.apply(components),
            Filter::Contrast(f) => f.apply(components),
            Filter::Sepia(f) => f.apply(components),
        }
    }
}

impl fmt::Display for Filter {
    /// `name:key=value,...` with every parameter spelled out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Binary(filter) => fmt::Display::fmt(filter, f),
            Filter::Gray(filter) => fmt::Display::fmt(filter, f),
            Filter::Shading(filter) => fmt::Display::fmt(filter, f),
            Filter::Tint(filter) => fmt::Display::fmt(filter, f),
            Filter::Solarize(filter) => fmt::Display::fmt(filter, f),
            Filter::Invert(filter) => fmt::Display::fmt(filter, f),
            Filter::Gamma(filter) => fmt::Display::fmt(filter, f),
            Filter::Brightness(filter) => fmt::Display::fmt(filter, f),
            Filter::Contrast(filter) => fmt::Display::fmt(filter, f),
            Filter::Sepia(filter) => fmt::Display::fmt(filter, f),
        }
    }
}

macro_rules! impl_from_filter {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Filter {
                fn from(filter: $variant) -> Self {
                    Filter::$variant(filter)
                }
            }
        )*
    };
}

impl_from_filter!(
    Binary, Gray, Shading, Tint, Solarize, Invert, Gamma, Brightness, Contrast, Sepia,
);
