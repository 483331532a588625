//! FilterPlay - parametric image filters and dithering
//!
//! Loads PNGs, runs them through pipelines of [`pixel_engine`] filters and
//! dither passes, and writes the results back out.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
