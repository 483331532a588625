use pixel_engine::{EngineError, ParseNameError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported PNG color type: {0}")]
    UnsupportedColorType(String),

    #[error("Image too large: {width}x{height}")]
    ImageTooLarge { width: u32, height: u32 },

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("Invalid step: {0}")]
    Step(#[from] StepError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to turn a textual pipeline step into a [`Step`](crate::models::Step).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StepError {
    #[error("Empty step")]
    Empty,

    #[error("Unknown step `{0}`")]
    UnknownStep(String),

    #[error("Malformed option `{0}`, expected key=value")]
    MalformedOption(String),

    #[error("Unknown option `{key}` for `{step}`")]
    UnknownOption { step: &'static str, key: String },

    #[error("Invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },

    #[error(transparent)]
    UnknownName(#[from] ParseNameError),

    #[error(transparent)]
    Parameter(#[from] EngineError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_png_decode() {
        let error = RenderError::PngDecode("Invalid signature".to_string());
        assert_eq!(error.to_string(), "PNG decode error: Invalid signature");
    }

    #[test]
    fn test_render_error_png_encode() {
        let error = RenderError::PngEncode("Encoding failed".to_string());
        assert_eq!(error.to_string(), "PNG encode error: Encoding failed");
    }

    #[test]
    fn test_render_error_image_too_large() {
        let error = RenderError::ImageTooLarge {
            width: 70_000,
            height: 70_000,
        };
        assert_eq!(error.to_string(), "Image too large: 70000x70000");
    }

    #[test]
    fn test_render_error_from_engine_error() {
        let error: RenderError = EngineError::EmptyBuffer.into();
        assert!(matches!(error, RenderError::Engine(EngineError::EmptyBuffer)));
        assert_eq!(error.to_string(), "Engine error: buffer has zero area");
    }

    #[test]
    fn test_render_error_from_step_error() {
        let error: RenderError = StepError::UnknownStep("blur".to_string()).into();
        assert_eq!(error.to_string(), "Invalid step: Unknown step `blur`");
    }

    #[test]
    fn test_step_error_unknown_option() {
        let error = StepError::UnknownOption {
            step: "sepia",
            key: "red".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown option `red` for `sepia`");
    }

    #[test]
    fn test_step_error_invalid_value() {
        let error = StepError::InvalidValue {
            key: "level".to_string(),
            value: "bright".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid value `bright` for `level`");
    }

    #[test]
    fn test_step_error_wraps_engine_error_transparently() {
        let error: StepError = EngineError::InvalidParameter {
            name: "level",
            value: 2.0,
        }
        .into();
        assert_eq!(error.to_string(), "parameter `level` = 2 is out of range");
    }
}
