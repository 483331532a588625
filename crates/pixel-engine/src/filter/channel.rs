//! Per-channel filters: shading, tint and solarize.
//!
//! Each takes one factor per color channel. A factor of exactly `0.0` leaves
//! its channel alone, so `Shading::new(0.0, 0.5, 0.0, 0.0)` only touches
//! green.

use std::fmt;

use super::{check_param, PixelKernel};
use crate::api::EngineError;
use crate::buffer::Pixel;
use crate::color::Components;

/// Validated red/green/blue factors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Factors {
    red: f64,
    green: f64,
    blue: f64,
}

impl Factors {
    fn new(red: f64, green: f64, blue: f64) -> Result<Self, EngineError> {
        Ok(Self {
            red: check_param("red", red)?,
            green: check_param("green", green)?,
            blue: check_param("blue", blue)?,
        })
    }

    /// Run `f(channel, factor)` on every channel whose factor is non-zero.
    fn apply(&self, c: Components, f: impl Fn(f64, f64) -> f64) -> Pixel {
        let channel = |value: f64, factor: f64| {
            if factor == 0.0 {
                value
            } else {
                f(value, factor)
            }
        };
        Components::new(
            channel(c.red, self.red),
            channel(c.green, self.green),
            channel(c.blue, self.blue),
            c.alpha,
        )
        .to_pixel()
    }
}

/// Multiplies each channel by its factor.
///
/// Negative factors drive the channel below zero, which clamps to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shading {
    factors: Factors,
    threshold: f64,
}

impl Shading {
    pub fn new(red: f64, green: f64, blue: f64, threshold: f64) -> Result<Self, EngineError> {
        Ok(Self {
            factors: Factors::new(red, green, blue)?,
            threshold: check_param("threshold", threshold)?,
        })
    }
}

impl PixelKernel for Shading {
    fn apply(&self, c: Components) -> Pixel {
        if !c.all_at_least(self.threshold) {
            return c.to_pixel();
        }
        self.factors.apply(c, |value, factor| value * factor)
    }
}

/// Tints each channel toward white (positive factor) or black (negative).
///
/// A factor of `1.0` saturates the channel, `-1.0` zeroes it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tint {
    factors: Factors,
    threshold: f64,
}

impl Tint {
    pub fn new(red: f64, green: f64, blue: f64, threshold: f64) -> Result<Self, EngineError> {
        Ok(Self {
            factors: Factors::new(red, green, blue)?,
            threshold: check_param("threshold", threshold)?,
        })
    }
}

impl PixelKernel for Tint {
    fn apply(&self, c: Components) -> Pixel {
        if !c.all_at_least(self.threshold) {
            return c.to_pixel();
        }
        self.factors.apply(c, |value, factor| {
            if factor > 0.0 {
                value + (1.0 - value) * factor
            } else {
                value + value * factor
            }
        })
    }
}

/// Inverts channels whose value lies below their factor.
///
/// Unlike the other filters the gate compares the pixel mean, strictly,
/// against the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Solarize {
    factors: Factors,
    threshold: f64,
}

impl Solarize {
    pub fn new(red: f64, green: f64, blue: f64, threshold: f64) -> Result<Self, EngineError> {
        Ok(Self {
            factors: Factors::new(red, green, blue)?,
            threshold: check_param("threshold", threshold)?,
        })
    }
}

impl PixelKernel for Solarize {
    fn apply(&self, c: Components) -> Pixel {
        if c.mean() <= self.threshold {
            return c.to_pixel();
        }
        self.factors.apply(c, |value, factor| {
            if value < factor {
                1.0 - value
            } else {
                value
            }
        })
    }
}

macro_rules! impl_display_channel {
    ($($filter:ident => $name:literal),* $(,)?) => {
        $(
            impl fmt::Display for $filter {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let Factors { red, green, blue } = self.factors;
                    write!(
                        f,
                        concat!($name, ":red={},green={},blue={},threshold={}"),
                        red, green, blue, self.threshold
                    )
                }
            }
        )*
    };
}

impl_display_channel!(Shading => "shading", Tint => "tint", Solarize => "solarize");
