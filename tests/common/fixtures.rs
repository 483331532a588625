//! Test fixtures and constants.

use pixel_engine::{Pixel, PixelBuffer};

/// Presets file with one valid and one broken preset
pub const MIXED_PRESETS: &str = r#"
presets:
  - name: negative
    steps:
      - invert
  - name: broken
    steps:
      - invert
      - blur:radius=3
  - name: poster
    steps:
      - dither:floyd-steinberg
      - binary
"#;

/// Uniform opaque gray
pub fn gray(width: usize, height: usize, value: u8) -> PixelBuffer {
    let pixel = Pixel::new(value, value, value, 255);
    PixelBuffer::from_pixels(width, height, vec![pixel; width * height]).unwrap()
}

/// Horizontal black-to-white ramp with a vertical alpha ramp
pub fn gradient(width: usize, height: usize) -> PixelBuffer {
    let mut pixels = Vec::with_capacity(width * height);
    for row in 0..height {
        let alpha = (255 - row * 255 / height.max(1)) as u8;
        for col in 0..width {
            let v = (col * 255 / (width - 1).max(1)) as u8;
            pixels.push(Pixel::new(v, v / 2, 255 - v, alpha));
        }
    }
    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}

/// The 2x2 Floyd-Steinberg regression input: light, dark, light, dark
pub fn light_dark_checker() -> PixelBuffer {
    let light = Pixel::new(200, 200, 200, 255);
    let dark = Pixel::new(50, 50, 50, 255);
    PixelBuffer::from_pixels(2, 2, vec![light, dark, light, dark]).unwrap()
}
