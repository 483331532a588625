//! Row-major RGBA8 raster with bounds-checked access.

use super::Pixel;
use crate::api::EngineError;

/// Bytes per interleaved RGBA8 pixel.
const CHANNELS: usize = 4;

/// An owned RGBA8 raster stored in row-major order.
///
/// Pixel `(row, col)` lives at offset `row * width + col`. Whether row 0 is
/// the top or the bottom of the picture is up to the caller, as long as it is
/// consistent. No engine operation ever changes the dimensions.
///
/// A `PixelBuffer` has no interior mutability; concurrent writers need
/// separate buffers (it is `Clone`) or external serialization.
///
/// # Example
///
/// ```
/// use pixel_engine::{Pixel, PixelBuffer};
///
/// let bytes = vec![0u8; 2 * 2 * 4];
/// let mut buffer = PixelBuffer::from_rgba(2, 2, &bytes).unwrap();
///
/// buffer.set(1, 0, Pixel::WHITE).unwrap();
/// assert_eq!(buffer.get(1, 0).unwrap(), Pixel::WHITE);
/// assert!(buffer.get(2, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixels in row-major order, `width * height` entries.
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Create a buffer of the given size filled with [`Pixel::TRANSPARENT`].
    ///
    /// Fails with [`EngineError::SizeMismatch`] if `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let len = pixel_count(&[width, height], 0)?;
        Ok(Self {
            pixels: vec![Pixel::TRANSPARENT; len],
            width,
            height,
        })
    }

    /// Create a buffer from interleaved RGBA8 bytes.
    ///
    /// `bytes` must hold exactly `width * height * 4` bytes, otherwise this
    /// fails with [`EngineError::SizeMismatch`].
    pub fn from_rgba(width: usize, height: usize, bytes: &[u8]) -> Result<Self, EngineError> {
        let expected = pixel_count(&[width, height, CHANNELS], bytes.len())?;
        if bytes.len() != expected {
            return Err(EngineError::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(CHANNELS)
            .map(|px| Pixel::new(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Create a buffer from pixels already in row-major order.
    ///
    /// Fails with [`EngineError::SizeMismatch`] unless
    /// `pixels.len() == width * height`.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Pixel>,
    ) -> Result<Self, EngineError> {
        let expected = pixel_count(&[width, height], pixels.len())?;
        if pixels.len() != expected {
            return Err(EngineError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Fail with [`EngineError::EmptyBuffer`] if the buffer has zero area.
    pub fn ensure_not_empty(&self) -> Result<(), EngineError> {
        if self.is_empty() {
            Err(EngineError::EmptyBuffer)
        } else {
            Ok(())
        }
    }

    /// Row-major offset of `(row, col)`, or `None` when out of bounds.
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Read the pixel at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Pixel, EngineError> {
        self.offset(row, col)
            .map(|i| self.pixels[i])
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Overwrite the pixel at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) -> Result<(), EngineError> {
        let i = self
            .offset(row, col)
            .ok_or_else(|| self.out_of_bounds(row, col))?;
        self.pixels[i] = pixel;
        Ok(())
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Mutable access to all pixels in row-major order.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Flatten to interleaved RGBA8 bytes (`width * height * 4`).
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * CHANNELS);
        for pixel in &self.pixels {
            rgba.extend_from_slice(&pixel.to_bytes());
        }
        rgba
    }

    /// Consume the buffer, returning interleaved RGBA8 bytes.
    pub fn into_rgba(self) -> Vec<u8> {
        self.pixels.into_iter().flat_map(Pixel::to_bytes).collect()
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> EngineError {
        EngineError::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        }
    }
}

/// Product of `dims`; on overflow the mismatch reports `actual`, the length
/// the caller was given.
fn pixel_count(dims: &[usize], actual: usize) -> Result<usize, EngineError> {
    dims.iter()
        .try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
        .ok_or(EngineError::SizeMismatch {
            expected: usize::MAX,
            actual,
        })
}
