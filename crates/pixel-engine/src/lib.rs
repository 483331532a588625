//! pixel-engine: per-pixel color filters and error diffusion dithering
//!
//! This library operates on plain in-memory RGBA8 rasters. It knows nothing
//! about image files; callers decode into a [`PixelBuffer`] and encode the
//! result themselves.
//!
//! # Quick Start
//!
//! ```
//! use pixel_engine::{apply_dither, apply_filter, DitherAlgorithm, Pixel, PixelBuffer, Sepia};
//!
//! let pixels = vec![Pixel::new(120, 90, 60, 255); 6];
//! let mut buffer = PixelBuffer::from_pixels(3, 2, pixels).unwrap();
//!
//! apply_filter(&mut buffer, &Sepia::new(0.34, 0.0).unwrap());
//! apply_dither(&mut buffer, DitherAlgorithm::Atkinson);
//!
//! assert_eq!(buffer.dimensions(), (3, 2));
//! ```
//!
//! # Data Model
//!
//! - [`Pixel`]: four 8-bit channels, red, green, blue and alpha.
//! - [`PixelBuffer`]: a `width x height` grid of pixels in row-major order.
//!   Coordinates are `(row, col)`; out-of-range access is an
//!   [`EngineError::OutOfBounds`], never a panic.
//! - [`Components`]: the same four channels as `f64` in `[0, 1]`, which is
//!   what filters compute with. [`channel_to_u8`] converts back, clamping
//!   and rounding (NaN becomes 0).
//!
//! # Filters
//!
//! Ten per-pixel filters implement [`PixelKernel`]: [`Binary`], [`Gray`],
//! [`Shading`], [`Tint`], [`Solarize`], [`Invert`], [`Gamma`],
//! [`Brightness`], [`Contrast`] and [`Sepia`]. [`Filter`] wraps any of them
//! for run-time selection. Each takes a `threshold` gate: pixels that fail
//! it pass through unchanged.
//!
//! All parameters are validated when the filter is built. Applying a filter
//! is infallible.
//!
//! # Dithering
//!
//! [`apply_dither`] reduces every color channel to 0 or 255 with one of
//! eight error diffusion matrices selected by [`DitherAlgorithm`]
//! (Jarvis-Judice-Ninke by default). [`dither_with_matrix`] accepts a custom
//! [`DiffusionMatrix`].
//!
//! Dithering is inherently sequential: the result for a pixel depends on
//! every pixel scanned before it. Filters have no such constraint, but this
//! crate runs both single-threaded.
//!
//! # Logging
//!
//! Pass boundaries emit `tracing` events at debug level. Nothing is logged
//! per pixel.

pub mod api;
pub mod buffer;
pub mod color;
pub mod dither;
pub mod filter;


pub use api::{EngineError, ParseNameError};
pub use buffer::{Pixel, PixelBuffer};
pub use color::{channel_to_u8, Components};
pub use dither::{
    apply_dither, dither_with_matrix, dithered, DiffusionEntry, DiffusionMatrix, DitherAlgorithm,
};
pub use filter::{
    apply_filter, filtered, Binary, Brightness, Contrast, Filter, Gamma, Gray, GrayTone, Invert,
    PixelKernel, Sepia, Shading, Solarize, Tint,
};
