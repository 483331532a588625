//! Owned RGBA8 raster storage.
//!
//! [`PixelBuffer`] replaces raw pointer walks over bitmap memory with a
//! contiguous, row-major `Vec<Pixel>` and bounds-checked `(row, col)` access.
//! Offsets follow `row * width + col` throughout the crate.

mod pixel;
mod pixel_buffer;

pub use pixel::Pixel;
pub use pixel_buffer::PixelBuffer;
