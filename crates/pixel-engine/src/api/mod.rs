//! Public error surface of the engine.
//!
//! [`EngineError`] covers every failure the buffer, filter and dither
//! operations can report; [`ParseNameError`] covers named-option parsing.

mod error;

pub(crate) use error::normalize_name;
pub use error::{EngineError, ParseNameError};
