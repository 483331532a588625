//! 8-bit RGBA pixel value.

/// A single RGBA pixel with 8 bits per channel.
///
/// Channel values are `u8`, so every stored pixel is well-formed by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Pixel = Pixel::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Pixel = Pixel::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Pixel = Pixel::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a pixel from interleaved `[R, G, B, A]` bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to interleaved `[R, G, B, A]` bytes.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// The color channels as `[R, G, B]`, alpha dropped.
    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_layout_is_rgba() {
        let pixel = Pixel::new(1, 2, 3, 4);
        assert_eq!(pixel.to_bytes(), [1, 2, 3, 4]);
        assert_eq!(Pixel::from_bytes([1, 2, 3, 4]), pixel);
        assert_eq!(Pixel::from([1, 2, 3, 4]), pixel);
    }

    #[test]
    fn test_constants() {
        assert_eq!(Pixel::default(), Pixel::TRANSPARENT);
        assert_eq!(Pixel::BLACK.rgb(), [0, 0, 0]);
        assert_eq!(Pixel::WHITE.rgb(), [255, 255, 255]);
        assert_eq!(Pixel::BLACK.alpha, 255);
    }
}
