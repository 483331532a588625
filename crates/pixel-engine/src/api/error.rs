//! Unified error type for the pixel-engine public API.

use thiserror::Error;

/// Unified error type for the pixel-engine public API.
///
/// All errors are raised eagerly, before any pixel is touched, so a failed
/// call never leaves a buffer half-processed.
///
/// # Example
///
/// ```
/// use pixel_engine::{EngineError, Sepia};
///
/// let err = Sepia::new(1.5, 0.0).unwrap_err();
/// assert!(matches!(err, EngineError::InvalidParameter { name: "level", .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Pixel coordinate outside the buffer extent
    #[error("pixel ({row}, {col}) is outside the {width}x{height} buffer")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// Byte or pixel count does not match the declared dimensions
    #[error("buffer size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Numeric parameter out of its allowed range (or NaN): filter
    /// parameters must lie in `-1.0..=1.0`, diffusion matrices need a
    /// non-zero divisor and strictly forward offsets
    #[error("parameter `{name}` = {value} is out of range")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Zero-area buffer where an image is required
    #[error("buffer has zero area")]
    EmptyBuffer,
}

/// Error returned when parsing a named option (gray tone, dither algorithm).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{name}`")]
pub struct ParseNameError {
    /// What was being parsed, e.g. `"gray tone"`
    pub kind: &'static str,
    /// The rejected input
    pub name: String,
}

impl ParseNameError {
    pub(crate) fn new(kind: &'static str, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

/// Normalize a user-supplied option name: lowercase, `-`/`_`/spaces removed.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = EngineError::OutOfBounds {
            row: 3,
            col: 7,
            width: 4,
            height: 2,
        };
        assert_eq!(err.to_string(), "pixel (3, 7) is outside the 4x2 buffer");
    }

    #[test]
    fn test_size_mismatch_message() {
        let err = EngineError::SizeMismatch {
            expected: 16,
            actual: 10,
        };
        assert_eq!(err.to_string(), "buffer size mismatch: expected 16, got 10");
    }

    #[test]
    fn test_invalid_parameter_message() {
        let err = EngineError::InvalidParameter {
            name: "level",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "parameter `level` = 1.5 is out of range");
    }

    #[test]
    fn test_empty_buffer_message() {
        assert_eq!(EngineError::EmptyBuffer.to_string(), "buffer has zero area");
    }

    #[test]
    fn test_parse_name_error_message() {
        let err = ParseNameError::new("gray tone", "sparkly");
        assert_eq!(err.to_string(), "unknown gray tone `sparkly`");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Jarvis-Judice_Ninke"), "jarvisjudiceninke");
        assert_eq!(normalize_name("  sierra lite "), "sierralite");
    }
}
