//! Tone filters: binary, grayscale and inversion.

use std::fmt;
use std::str::FromStr;

use super::{check_param, PixelKernel};
use crate::api::{normalize_name, EngineError, ParseNameError};
use crate::buffer::Pixel;
use crate::color::Components;

/// Black-and-white threshold filter.
///
/// Gated pixels become pure white when their mean exceeds `level`, pure black
/// otherwise. With `transparent` set, pixels turned white also get alpha 0,
/// which lets a binary layer be composited over something else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binary {
    level: f64,
    threshold: f64,
    transparent: bool,
}

impl Binary {
    pub fn new(level: f64, threshold: f64, transparent: bool) -> Result<Self, EngineError> {
        Ok(Self {
            level: check_param("level", level)?,
            threshold: check_param("threshold", threshold)?,
            transparent,
        })
    }
}

impl Default for Binary {
    /// `level = 0.5`, `threshold = 0`, opaque output.
    fn default() -> Self {
        Self {
            level: 0.5,
            threshold: 0.0,
            transparent: false,
        }
    }
}

impl PixelKernel for Binary {
    fn apply(&self, c: Components) -> Pixel {
        if !c.all_at_least(self.threshold) {
            return c.to_pixel();
        }
        let white = c.mean() > self.level;
        let value = if white { 1.0 } else { 0.0 };
        let alpha = if white && self.transparent { 0.0 } else { c.alpha };
        Components::new(value, value, value, alpha).to_pixel()
    }
}

/// Which value a [`Gray`] filter copies into all three channels.
///
/// The names are historical: the "median" tone is the green channel, not a
/// statistical median.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayTone {
    /// Red channel
    Bright,
    /// Green channel
    #[default]
    Median,
    /// Blue channel
    Dark,
    /// Mean of red, green and blue
    Luminosity,
}

impl GrayTone {
    /// Every tone, in declaration order.
    pub const ALL: [GrayTone; 4] = [
        GrayTone::Bright,
        GrayTone::Median,
        GrayTone::Dark,
        GrayTone::Luminosity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GrayTone::Bright => "bright",
            GrayTone::Median => "median",
            GrayTone::Dark => "dark",
            GrayTone::Luminosity => "luminosity",
        }
    }

    fn pick(self, c: &Components) -> f64 {
        match self {
            GrayTone::Bright => c.red,
            GrayTone::Median => c.green,
            GrayTone::Dark => c.blue,
            GrayTone::Luminosity => c.mean(),
        }
    }
}

impl fmt::Display for GrayTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GrayTone {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GrayTone::ALL
            .into_iter()
            .find(|tone| tone.name() == normalize_name(s))
            .ok_or_else(|| ParseNameError::new("gray tone", s))
    }
}

/// Grayscale filter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gray {
    tone: GrayTone,
    threshold: f64,
}

impl Gray {
    pub fn new(tone: GrayTone, threshold: f64) -> Result<Self, EngineError> {
        Ok(Self {
            tone,
            threshold: check_param("threshold", threshold)?,
        })
    }
}

impl PixelKernel for Gray {
    fn apply(&self, c: Components) -> Pixel {
        if !c.all_at_least(self.threshold) {
            return c.to_pixel();
        }
        let v = self.tone.pick(&c);
        Components::new(v, v, v, c.alpha).to_pixel()
    }
}

/// Color inversion, `c' = 1 - c` on red, green and blue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Invert {
    threshold: f64,
}

impl Invert {
    pub fn new(threshold: f64) -> Result<Self, EngineError> {
        Ok(Self {
            threshold: check_param("threshold", threshold)?,
        })
    }
}

impl PixelKernel for Invert {
    fn apply(&self, c: Components) -> Pixel {
        if !c.all_at_least(self.threshold) {
            return c.to_pixel();
        }
        c.map_rgb(|v| 1.0 - v).to_pixel()
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "binary:level={},threshold={},transparent={}",
            self.level, self.threshold, self.transparent
        )
    }
}

impl fmt::Display for Gray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gray:tone={},threshold={}", self.tone, self.threshold)
    }
}

impl fmt::Display for Invert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invert:threshold={}", self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(r: u8, g: u8, b: u8, a: u8) -> Components {
        Components::from(Pixel::new(r, g, b, a))
    }

    #[test]
    fn test_binary_splits_on_mean() {
        let binary = Binary::default();
        assert_eq!(binary.apply(px(200, 200, 100, 255)), Pixel::WHITE);
        assert_eq!(binary.apply(px(100, 100, 100, 255)), Pixel::BLACK);
        // Mean exactly at the level stays black (strict comparison)
        let at_level = Binary::new(0.0, 0.0, false).unwrap();
        assert_eq!(at_level.apply(px(0, 0, 0, 255)), Pixel::BLACK);
        assert_eq!(at_level.apply(px(1, 0, 0, 255)), Pixel::WHITE);
    }

    #[test]
    fn test_binary_transparent_only_clears_white() {
        let binary = Binary::new(0.5, 0.0, true).unwrap();
        assert_eq!(
            binary.apply(px(250, 250, 250, 255)),
            Pixel::new(255, 255, 255, 0)
        );
        assert_eq!(binary.apply(px(10, 10, 10, 180)), Pixel::new(0, 0, 0, 180));
    }

    #[test]
    fn test_binary_gate_passes_dark_pixels_through() {
        let binary = Binary::new(0.1, 0.5, false).unwrap();
        let input = Pixel::new(200, 90, 200, 255);
        assert_eq!(binary.apply(Components::from(input)), input);
    }

    #[test]
    fn test_binary_rejects_out_of_range() {
        assert!(matches!(
            Binary::new(1.2, 0.0, false),
            Err(EngineError::InvalidParameter { name: "level", .. })
        ));
        assert!(matches!(
            Binary::new(0.5, -3.0, false),
            Err(EngineError::InvalidParameter {
                name: "threshold",
                ..
            })
        ));
    }

    #[test]
    fn test_gray_tones_pick_channels() {
        let c = px(30, 60, 90, 128);
        let expect = |v: u8| Pixel::new(v, v, v, 128);

        let bright = Gray::new(GrayTone::Bright, 0.0).unwrap();
        let median = Gray::new(GrayTone::Median, 0.0).unwrap();
        let dark = Gray::new(GrayTone::Dark, 0.0).unwrap();
        let lum = Gray::new(GrayTone::Luminosity, 0.0).unwrap();

        assert_eq!(bright.apply(c), expect(30));
        assert_eq!(median.apply(c), expect(60));
        assert_eq!(dark.apply(c), expect(90));
        assert_eq!(lum.apply(c), expect(60));
    }

    #[test]
    fn test_gray_tone_parsing() {
        assert_eq!("bright".parse::<GrayTone>(), Ok(GrayTone::Bright));
        assert_eq!("Luminosity".parse::<GrayTone>(), Ok(GrayTone::Luminosity));
        assert!("sparkly".parse::<GrayTone>().is_err());
        for tone in GrayTone::ALL {
            assert_eq!(tone.to_string().parse::<GrayTone>(), Ok(tone));
        }
    }

    #[test]
    fn test_invert() {
        let invert = Invert::default();
        assert_eq!(invert.apply(px(0, 100, 255, 77)), Pixel::new(255, 155, 0, 77));
    }

    #[test]
    fn test_invert_gate() {
        let invert = Invert::new(0.5).unwrap();
        let dark = Pixel::new(200, 200, 20, 255);
        assert_eq!(invert.apply(Components::from(dark)), dark);
    }
}
