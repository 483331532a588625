//! Error diffusion matrices.
//!
//! Each matrix lists which not-yet-visited neighbours receive a share of the
//! current pixel's quantization error, and how large that share is.

use std::borrow::Cow;

use crate::api::EngineError;

/// One diffusion target: `(row_offset, col_offset, weight)`.
///
/// - `row_offset`: rows below the current pixel (`0` = same row)
/// - `col_offset`: columns to the right (negative = left)
/// - `weight`: numerator of the share, see [`DiffusionMatrix::divisor`]
pub type DiffusionEntry = (i32, i32, u32);

/// An error diffusion matrix.
///
/// A neighbour receives `error * weight / divisor` (integer division). Every
/// entry points strictly forward in raster order, either further along the
/// current row or into a later row, so error only ever lands on pixels the
/// scan has not reached yet.
///
/// The total share propagated is `sum(weights) / divisor`. Most matrices
/// propagate 100% of the error; [`ATKINSON`] deliberately propagates 75%.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffusionMatrix {
    entries: Cow<'static, [DiffusionEntry]>,
    divisor: u32,
}

impl DiffusionMatrix {
    /// Build a custom matrix.
    ///
    /// Fails with [`EngineError::InvalidParameter`] when `divisor` is zero or
    /// an entry would push error backwards (onto an already-visited pixel or
    /// the current one).
    ///
    /// ```
    /// use pixel_engine::DiffusionMatrix;
    ///
    /// // Push everything to the right-hand neighbour
    /// let right = DiffusionMatrix::new(vec![(0, 1, 1)], 1).unwrap();
    /// assert_eq!(right.entries(), &[(0, 1, 1)]);
    ///
    /// assert!(DiffusionMatrix::new(vec![(0, -1, 1)], 1).is_err());
    /// assert!(DiffusionMatrix::new(vec![(1, 0, 1)], 0).is_err());
    /// ```
    pub fn new(entries: Vec<DiffusionEntry>, divisor: u32) -> Result<Self, EngineError> {
        if divisor == 0 {
            return Err(EngineError::InvalidParameter {
                name: "divisor",
                value: 0.0,
            });
        }
        for &(row, col, _) in &entries {
            if row < 0 {
                return Err(EngineError::InvalidParameter {
                    name: "row_offset",
                    value: row as f64,
                });
            }
            if row == 0 && col <= 0 {
                return Err(EngineError::InvalidParameter {
                    name: "col_offset",
                    value: col as f64,
                });
            }
        }
        Ok(Self {
            entries: Cow::Owned(entries),
            divisor,
        })
    }

    const fn fixed(entries: &'static [DiffusionEntry], divisor: u32) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
            divisor,
        }
    }

    /// The diffusion targets, in application order.
    #[inline]
    pub fn entries(&self) -> &[DiffusionEntry] {
        &self.entries
    }

    /// Denominator shared by every entry's weight.
    #[inline]
    pub fn divisor(&self) -> u32 {
        self.divisor
    }
}

/// Diffuses nothing; dithering with it is plain 50% thresholding.
pub static NO_DIFFUSION: DiffusionMatrix = DiffusionMatrix::fixed(&[], 1);

/// Atkinson dithering matrix.
///
/// Distributes error to 6 neighbours with 75% total propagation (6/8).
/// The lost quarter keeps highlights and shadows crisp.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Originally developed by Bill Atkinson for the Apple Macintosh.
pub static ATKINSON: DiffusionMatrix = DiffusionMatrix::fixed(
    &[
        (0, 1, 1),  // right
        (0, 2, 1),  // two right
        (1, -1, 1), // bottom-left
        (1, 0, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (2, 0, 1),  // two below
    ],
    8,
);

/// Floyd-Steinberg dithering matrix.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub static FLOYD_STEINBERG: DiffusionMatrix = DiffusionMatrix::fixed(
    &[
        (0, 1, 7),  // right
        (1, -1, 3), // bottom-left
        (1, 0, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    16,
);

/// Burkes dithering matrix, a two-row reduction of Stucki.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub static BURKES: DiffusionMatrix = DiffusionMatrix::fixed(
    &[
        (0, 1, 8),
        (0, 2, 4),
        (1, -2, 2),
        (1, -1, 4),
        (1, 0, 8),
        (1, 1, 4),
        (1, 2, 2),
    ],
    32,
);

/// Sierra (full, three-row) dithering matrix.
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
pub static SIERRA: DiffusionMatrix = DiffusionMatrix::fixed(
    &[
        (0, 1, 5),
        (0, 2, 3),
        (1, -2, 2),
        (1, -1, 4),
        (1, 0, 5),
        (1, 1, 4),
        (1, 2, 2),
        (2, -1, 2),
        (2, 0, 3),
        (2, 1, 2),
    ],
    32,
);

/// Sierra two-row dithering matrix.
///
/// ```text
///            X   4   3
///    1   2   3   2   1
/// ```
pub static SIERRA_TWO_ROW: DiffusionMatrix = DiffusionMatrix::fixed(
    &[
        (0, 1, 4),
        (0, 2, 3),
        (1, -2, 1),
        (1, -1, 2),
        (1, 0, 3),
        (1, 1, 2),
        (1, 2, 1),
    ],
    16,
);

/// Sierra Lite dithering matrix.
///
/// ```text
///    X   2
///    1   1
/// ```
pub static SIERRA_LITE: DiffusionMatrix =
    DiffusionMatrix::fixed(&[(0, 1, 2), (1, -1, 1), (1, 0, 1)], 4);

/// Stucki dithering matrix.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub static STUCKI: DiffusionMatrix = DiffusionMatrix::fixed(
    &[
        (0, 1, 8),
        (0, 2, 4),
        (1, -2, 2),
        (1, -1, 4),
        (1, 0, 8),
        (1, 1, 4),
        (1, 2, 2),
        (2, -2, 1),
        (2, -1, 2),
        (2, 0, 4),
        (2, 1, 2),
        (2, 2, 1),
    ],
    42,
);

/// Jarvis-Judice-Ninke dithering matrix.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub static JARVIS_JUDICE_NINKE: DiffusionMatrix = DiffusionMatrix::fixed(
    &[
        (0, 1, 7),
        (0, 2, 5),
        (1, -2, 3),
        (1, -1, 5),
        (1, 0, 7),
        (1, 1, 5),
        (1, 2, 3),
        (2, -2, 1),
        (2, -1, 3),
        (2, 0, 5),
        (2, 1, 3),
        (2, 2, 1),
    ],
    48,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn weight_sum(matrix: &DiffusionMatrix) -> u32 {
        matrix.entries().iter().map(|&(_, _, w)| w).sum()
    }

    fn named() -> [(&'static str, &'static DiffusionMatrix); 8] {
        [
            ("Atkinson", &ATKINSON),
            ("Floyd-Steinberg", &FLOYD_STEINBERG),
            ("Burkes", &BURKES),
            ("Sierra", &SIERRA),
            ("Sierra Two-Row", &SIERRA_TWO_ROW),
            ("Sierra Lite", &SIERRA_LITE),
            ("Stucki", &STUCKI),
            ("JJN", &JARVIS_JUDICE_NINKE),
        ]
    }

    #[test]
    fn test_atkinson_propagation_75_percent() {
        assert_eq!(weight_sum(&ATKINSON), 6, "Atkinson should have 6 weight units");
        assert_eq!(ATKINSON.divisor(), 8, "Atkinson divisor should be 8");
    }

    #[test]
    fn test_full_propagation_matrices() {
        for (name, matrix) in named().iter().skip(1) {
            assert_eq!(
                weight_sum(matrix),
                matrix.divisor(),
                "{name} weights should sum to its divisor"
            );
        }
    }

    #[test]
    fn test_divisors() {
        let divisors: Vec<u32> = named().iter().map(|(_, m)| m.divisor()).collect();
        assert_eq!(divisors, [8, 16, 32, 32, 16, 4, 42, 48]);
    }

    #[test]
    fn test_entry_counts() {
        let counts: Vec<usize> = named().iter().map(|(_, m)| m.entries().len()).collect();
        assert_eq!(counts, [6, 4, 7, 10, 7, 3, 12, 12]);
    }

    #[test]
    fn test_named_matrices_point_forward() {
        for (name, matrix) in named() {
            let rebuilt = DiffusionMatrix::new(matrix.entries().to_vec(), matrix.divisor());
            assert_eq!(rebuilt.as_ref(), Ok(matrix), "{name} failed validation");
        }
    }

    #[test]
    fn test_new_rejects_backward_entries() {
        assert_eq!(
            DiffusionMatrix::new(vec![(-1, 0, 1)], 4),
            Err(EngineError::InvalidParameter {
                name: "row_offset",
                value: -1.0
            })
        );
        assert_eq!(
            DiffusionMatrix::new(vec![(1, 0, 1), (0, 0, 1)], 4),
            Err(EngineError::InvalidParameter {
                name: "col_offset",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_new_rejects_zero_divisor() {
        assert!(matches!(
            DiffusionMatrix::new(vec![(0, 1, 1)], 0),
            Err(EngineError::InvalidParameter { name: "divisor", .. })
        ));
    }

    #[test]
    fn test_no_diffusion_is_empty() {
        assert!(NO_DIFFUSION.entries().is_empty());
        assert_eq!(NO_DIFFUSION.divisor(), 1);
    }
}
