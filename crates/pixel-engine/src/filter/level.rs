//! Single-level adjustments: gamma, brightness, contrast and sepia.

use std::fmt;

use super::{check_param, PixelKernel};
use crate::api::EngineError;
use crate::buffer::Pixel;
use crate::color::Components;

/// Classic sepia weights, rows produce red, green, blue.
const SEPIA: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Gamma correction with exponent `1 / (level * 5)`.
///
/// `level = 0.2` is the identity. Smaller positive levels darken, larger
/// levels brighten; `level = 0` sends everything below full intensity to
/// black and negative levels invert the curve before clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma {
    level: f64,
    threshold: f64,
}

impl Gamma {
    pub fn new(level: f64, threshold: f64) -> Result<Self, EngineError> {
        Ok(Self {
            level: check_param("level", level)?,
            threshold: check_param("threshold", threshold)?,
        })
    }

    fn exponent(&self) -> f64 {
        1.0 / (self.level * 5.0)
    }
}

impl Default for Gamma {
    /// `level = 1.0` (exponent 0.2).
    fn default() -> Self {
        Self {
            level: 1.0,
            threshold: 0.0,
        }
    }
}

impl PixelKernel for Gamma {
    fn apply(&self, c: Components) -> Pixel {
        if !c.all_at_least(self.threshold) {
            return c.to_pixel();
        }
        let exponent = self.exponent();
        c.map_rgb(|v| v.powf(exponent)).to_pixel()
    }
}

/// Adds `level` to red, green and blue.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Brightness {
    level: f64,
    threshold: f64,
}

impl Brightness {
    pub fn new(level: f64, threshold: f64) -> Result<Self, EngineError> {
        Ok(Self {
            level: check_param("level", level)?,
            threshold: check_param("threshold", threshold)?,
        })
    }
}

impl PixelKernel for Brightness {
    fn apply(&self, c: Components) -> Pixel {
        if !c.all_at_least(self.threshold) {
            return c.to_pixel();
        }
        c.map_rgb(|v| v + self.level).to_pixel()
    }
}

/// Scales channels around mid-gray by `(level + 1) / (1 - level)`.
///
/// `level = 0` is the identity; `level = 1` is a hard threshold at 0.5.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Contrast {
    level: f64,
    threshold: f64,
}

impl Contrast {
    pub fn new(level: f64, threshold: f64) -> Result<Self, EngineError> {
        Ok(Self {
            level: check_param("level", level)?,
            threshold: check_param("threshold", threshold)?,
        })
    }

    fn factor(&self) -> f64 {
        (self.level + 1.0) / (1.0 - self.level)
    }
}

impl PixelKernel for Contrast {
    fn apply(&self, c: Components) -> Pixel {
        if !c.all_at_least(self.threshold) {
            return c.to_pixel();
        }
        let factor = self.factor();
        c.map_rgb(|v| factor * (v - 0.5) + 0.5).to_pixel()
    }
}

/// Sepia toning, the classic matrix scaled by `level * 5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sepia {
    level: f64,
    threshold: f64,
}

impl Sepia {
    pub fn new(level: f64, threshold: f64) -> Result<Self, EngineError> {
        Ok(Self {
            level: check_param("level", level)?,
            threshold: check_param("threshold", threshold)?,
        })
    }
}

impl Default for Sepia {
    /// `level = 1.0`.
    fn default() -> Self {
        Self {
            level: 1.0,
            threshold: 0.0,
        }
    }
}

impl PixelKernel for Sepia {
    fn apply(&self, c: Components) -> Pixel {
        if !c.all_at_least(self.threshold) {
            return c.to_pixel();
        }
        let scale = self.level * 5.0;
        let [red, green, blue] =
            SEPIA.map(|[wr, wg, wb]| (c.red * wr + c.green * wg + c.blue * wb) * scale);
        Components::new(red, green, blue, c.alpha).to_pixel()
    }
}

macro_rules! impl_display_level {
    ($($filter:ident => $name:literal),* $(,)?) => {
        $(
            impl fmt::Display for $filter {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(
                        f,
                        concat!($name, ":level={},threshold={}"),
                        self.level, self.threshold
                    )
                }
            }
        )*
    };
}

impl_display_level!(
    Gamma => "gamma",
    Brightness => "brightness",
    Contrast => "contrast",
    Sepia => "sepia",
);

#[cfg(test)]
mod tests {
    use super::*;

    fn px(r: u8, g: u8, b: u8) -> Components {
        Components::from(Pixel::new(r, g, b, 255))
    }

    #[test]
    fn test_gamma_identity_at_one_fifth() {
        let gamma = Gamma::new(0.2, 0.0).unwrap();
        for v in [0u8, 1, 64, 128, 200, 255] {
            assert_eq!(gamma.apply(px(v, v, v)).rgb(), [v, v, v]);
        }
    }

    #[test]
    fn test_gamma_default_brightens() {
        let out = Gamma::default().apply(px(64, 64, 64));
        assert!(out.red > 64, "exponent 0.2 should brighten, got {}", out.red);
        // Endpoints are fixed points of any positive exponent
        assert_eq!(Gamma::default().apply(px(0, 255, 0)).rgb(), [0, 255, 0]);
    }

    #[test]
    fn test_gamma_degenerate_levels_stay_in_range() {
        let zero = Gamma::new(0.0, 0.0).unwrap();
        assert_eq!(zero.apply(px(254, 255, 0)).rgb(), [0, 255, 0]);

        let negative = Gamma::new(-0.5, 0.0).unwrap();
        // Exponent -0.4: 0 -> inf (clamped), 1 -> 1
        assert_eq!(negative.apply(px(0, 255, 128)).rgb(), [255, 255, 255]);
    }

    #[test]
    fn test_brightness_adds_and_clamps() {
        let brighter = Brightness::new(0.2, 0.0).unwrap();
        assert_eq!(brighter.apply(px(0, 51, 250)).rgb(), [51, 102, 255]);

        let darker = Brightness::new(-1.0, 0.0).unwrap();
        assert_eq!(darker.apply(px(255, 128, 3)).rgb(), [0, 0, 0]);
    }

    #[test]
    fn test_contrast() {
        assert_eq!(Contrast::default().apply(px(10, 128, 240)).rgb(), [10, 128, 240]);

        // factor 3: 0.6 -> 0.8, 0.4 -> 0.2
        let contrast = Contrast::new(0.5, 0.0).unwrap();
        assert_eq!(contrast.apply(px(153, 102, 255)).rgb(), [204, 51, 255]);
    }

    #[test]
    fn test_contrast_level_one_is_hard_threshold() {
        let contrast = Contrast::new(1.0, 0.0).unwrap();
        assert_eq!(contrast.apply(px(127, 128, 0)).rgb(), [0, 255, 0]);
    }

    #[test]
    fn test_sepia_matrix() {
        // level 0.2 -> scale 1.0, the plain sepia matrix
        let sepia = Sepia::new(0.2, 0.0).unwrap();
        let out = sepia.apply(px(100, 100, 100));
        // 100 * (0.393 + 0.769 + 0.189) = 135.1
        assert_eq!(out.rgb(), [135, 120, 94]);
    }

    #[test]
    fn test_sepia_rejects_out_of_range_level() {
        assert_eq!(
            Sepia::new(1.5, 0.0),
            Err(EngineError::InvalidParameter {
                name: "level",
                value: 1.5
            })
        );
    }

    #[test]
    fn test_gate_passes_through() {
        let input = Pixel::new(10, 250, 250, 99);
        let c = Components::from(input);
        assert_eq!(Gamma::new(0.5, 0.5).unwrap().apply(c), input);
        assert_eq!(Brightness::new(0.5, 0.5).unwrap().apply(c), input);
        assert_eq!(Contrast::new(0.5, 0.5).unwrap().apply(c), input);
        assert_eq!(Sepia::new(0.5, 0.5).unwrap().apply(c), input);
    }
}
