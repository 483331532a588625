//! Normalized color components used by the filter math.
//!
//! Filters never operate on raw bytes. Each [`Pixel`](crate::Pixel) is
//! converted to [`Components`] in `0.0..=1.0`, transformed, and converted
//! back with a saturating, rounding conversion, so no out-of-range value can
//! reach a stored pixel.
//!
//! # Example
//!
//! ```
//! use pixel_engine::{Components, Pixel};
//!
//! let components = Components::from(Pixel::new(255, 0, 51, 255));
//! assert_eq!(components.red, 1.0);
//! assert!((components.blue - 0.2).abs() < 1e-12);
//!
//! // Saturating on the way back
//! let bright = Components::new(1.7, -0.3, 0.2, 1.0);
//! assert_eq!(bright.to_pixel(), Pixel::new(255, 0, 51, 255));
//! ```

mod components;

pub use components::{channel_to_u8, Components};
