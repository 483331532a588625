//! Error diffusion dithering.
//!
//! Reduces every color channel to pure 0 or 255 while spreading each pixel's
//! quantization error over its not-yet-visited neighbours, so the local
//! average brightness survives the reduction.
//!
//! # Algorithm
//!
//! The buffer is scanned strictly row-major, top-left to bottom-right. At
//! each pixel:
//!
//! 1. Quantize red, green and blue independently (`< 128` -> 0, else 255) and
//!    store the result immediately. Alpha is carried through.
//! 2. Compute the per-channel error `max(0, current - quantized)`.
//! 3. For every matrix entry whose target lies inside the buffer, add
//!    `error * weight / divisor` to the target's color channels, saturating
//!    at 255. Targets outside the buffer are dropped.
//!
//! Every matrix entry points forward in raster order, so a pixel's
//! accumulated error is settled before the scan reaches it. The scan order
//! is load-bearing: dithering must never be split across threads, though
//! separate buffers may be dithered concurrently.
//!
//! # Example
//!
//! ```
//! use pixel_engine::{apply_dither, DitherAlgorithm, Pixel, PixelBuffer};
//!
//! let gray = Pixel::new(100, 100, 100, 255);
//! let mut buffer = PixelBuffer::from_pixels(4, 4, vec![gray; 16]).unwrap();
//! apply_dither(&mut buffer, DitherAlgorithm::FloydSteinberg);
//!
//! assert!(buffer
//!     .pixels()
//!     .iter()
//!     .all(|p| p.rgb().iter().all(|&c| c == 0 || c == 255)));
//! ```

mod kernel;

pub use kernel::*;

use std::fmt;
use std::str::FromStr;

use crate::api::{normalize_name, ParseNameError};
use crate::buffer::{Pixel, PixelBuffer};

/// Named dithering algorithm.
///
/// Each variant maps to a fixed [`DiffusionMatrix`]. The default is
/// Jarvis-Judice-Ninke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherAlgorithm {
    /// 75% propagation over 6 neighbours; crisp, high-contrast output.
    Atkinson,

    /// Classic 4-neighbour matrix, 100% propagation.
    FloydSteinberg,

    /// Two-row Stucki variant, 7 neighbours.
    Burkes,

    /// Full three-row Sierra, 10 neighbours.
    Sierra,

    /// Two-row Sierra, 7 neighbours.
    SierraTwoRow,

    /// Minimal Sierra, 3 neighbours.
    SierraLite,

    /// Three rows, 12 neighbours, heavier centre weights than JJN.
    Stucki,

    /// Three rows, 12 neighbours; smoothest gradients.
    #[default]
    JarvisJudiceNinke,

    /// Plain thresholding with no error diffusion.
    Threshold,
}

impl DitherAlgorithm {
    /// Every error diffusion algorithm ([`Threshold`](Self::Threshold)
    /// excluded).
    pub const ALL: [DitherAlgorithm; 8] = [
        DitherAlgorithm::Atkinson,
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::Burkes,
        DitherAlgorithm::Sierra,
        DitherAlgorithm::SierraTwoRow,
        DitherAlgorithm::SierraLite,
        DitherAlgorithm::Stucki,
        DitherAlgorithm::JarvisJudiceNinke,
    ];

    /// Kebab-case name, accepted back by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            DitherAlgorithm::Atkinson => "atkinson",
            DitherAlgorithm::FloydSteinberg => "floyd-steinberg",
            DitherAlgorithm::Burkes => "burkes",
            DitherAlgorithm::Sierra => "sierra",
            DitherAlgorithm::SierraTwoRow => "sierra-two-row",
            DitherAlgorithm::SierraLite => "sierra-lite",
            DitherAlgorithm::Stucki => "stucki",
            DitherAlgorithm::JarvisJudiceNinke => "jarvis-judice-ninke",
            DitherAlgorithm::Threshold => "threshold",
        }
    }

    /// The diffusion matrix this algorithm uses.
    pub fn matrix(self) -> &'static DiffusionMatrix {
        match self {
            DitherAlgorithm::Atkinson => &ATKINSON,
            DitherAlgorithm::FloydSteinberg => &FLOYD_STEINBERG,
            DitherAlgorithm::Burkes => &BURKES,
            DitherAlgorithm::Sierra => &SIERRA,
            DitherAlgorithm::SierraTwoRow => &SIERRA_TWO_ROW,
            DitherAlgorithm::SierraLite => &SIERRA_LITE,
            DitherAlgorithm::Stucki => &STUCKI,
            DitherAlgorithm::JarvisJudiceNinke => &JARVIS_JUDICE_NINKE,
            DitherAlgorithm::Threshold => &NO_DIFFUSION,
        }
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DitherAlgorithm {
    type Err = ParseNameError;

    /// Parse an algorithm name.
    ///
    /// Case, `-`, `_` and spaces are ignored, so `floyd-steinberg`,
    /// `Floyd_Steinberg` and `FloydSteinberg` are equivalent. Short aliases
    /// `fs`, `jjn`, `sierra3`, `sierra2`, `sierra1` and `none` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let algorithm = match normalize_name(s).as_str() {
            "atkinson" => DitherAlgorithm::Atkinson,
            "floydsteinberg" | "fs" => DitherAlgorithm::FloydSteinberg,
            "burkes" => DitherAlgorithm::Burkes,
            "sierra" | "sierra3" => DitherAlgorithm::Sierra,
            "sierratworow" | "sierra2" => DitherAlgorithm::SierraTwoRow,
            "sierralite" | "sierra1" => DitherAlgorithm::SierraLite,
            "stucki" => DitherAlgorithm::Stucki,
            "jarvisjudiceninke" | "jjn" => DitherAlgorithm::JarvisJudiceNinke,
            "threshold" | "none" => DitherAlgorithm::Threshold,
            _ => return Err(ParseNameError::new("dither algorithm", s)),
        };
        Ok(algorithm)
    }
}

/// Dither `buffer` in place with the named algorithm.
pub fn apply_dither(buffer: &mut PixelBuffer, algorithm: DitherAlgorithm) {
    tracing::debug!(algorithm = %algorithm, "Selected dither algorithm");
    dither_with_matrix(buffer, algorithm.matrix());
}

/// Like [`apply_dither`], but returns a dithered copy and leaves `buffer`
/// untouched.
pub fn dithered(buffer: &PixelBuffer, algorithm: DitherAlgorithm) -> PixelBuffer {
    let mut out = buffer.clone();
    apply_dither(&mut out, algorithm);
    out
}

/// Dither `buffer` in place with an arbitrary diffusion matrix.
///
/// Zero-area and single-pixel buffers are fine: the former is a no-op, the
/// latter a single quantization with nowhere to send the error.
pub fn dither_with_matrix(buffer: &mut PixelBuffer, matrix: &DiffusionMatrix) {
    let (width, height) = buffer.dimensions();
    tracing::debug!(
        width,
        height,
        entries = matrix.entries().len(),
        divisor = matrix.divisor(),
        "Dithering"
    );

    let pixels = buffer.pixels_mut();
    for row in 0..height {
        for col in 0..width {
            let offset = row * width + col;
            let current = pixels[offset];
            let quantized = quantize(current);
            let error = quantization_error(current, quantized);
            pixels[offset] = quantized;

            if error == [0; 3] {
                continue;
            }
            for &(row_offset, col_offset, weight) in matrix.entries() {
                let Some(target) = neighbor(row, col, row_offset, col_offset, width, height)
                else {
                    continue;
                };
                pixels[target] = diffuse(pixels[target], error, weight, matrix.divisor());
            }
        }
    }
}

/// Snap each color channel to 0 or 255.
#[inline]
fn quantize(pixel: Pixel) -> Pixel {
    let snap = |c: u8| if c < 128 { 0 } else { 255 };
    Pixel::new(snap(pixel.red), snap(pixel.green), snap(pixel.blue), pixel.alpha)
}

/// Per-channel `current - quantized`, floored at zero.
#[inline]
fn quantization_error(current: Pixel, quantized: Pixel) -> [u8; 3] {
    let [r, g, b] = current.rgb();
    let [qr, qg, qb] = quantized.rgb();
    [r.saturating_sub(qr), g.saturating_sub(qg), b.saturating_sub(qb)]
}

/// Add a weighted share of `error` to `pixel`, saturating at 255.
#[inline]
fn diffuse(pixel: Pixel, error: [u8; 3], weight: u32, divisor: u32) -> Pixel {
    // Custom weights may be close to u32::MAX, so the share is widened first
    let add = |c: u8, e: u8| {
        let share = u64::from(e) * u64::from(weight) / u64::from(divisor);
        c.saturating_add(share.min(255) as u8)
    };
    Pixel::new(
        add(pixel.red, error[0]),
        add(pixel.green, error[1]),
        add(pixel.blue, error[2]),
        pixel.alpha,
    )
}

/// Offset of `(row + row_offset, col + col_offset)` if it lies in bounds.
#[inline]
fn neighbor(
    row: usize,
    col: usize,
    row_offset: i32,
    col_offset: i32,
    width: usize,
    height: usize,
) -> Option<usize> {
    let r = row.checked_add_signed(row_offset as isize)?;
    let c = col.checked_add_signed(col_offset as isize)?;
    (r < height && c < width).then(|| r * width + c)
}
