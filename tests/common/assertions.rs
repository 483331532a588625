//! Assertion helpers for tests.

use pixel_engine::PixelBuffer;
use pretty_assertions::assert_eq;

/// Assert every color channel is 0 or 255
pub fn assert_bilevel(buffer: &PixelBuffer) {
    for (i, pixel) in buffer.pixels().iter().enumerate() {
        assert!(
            pixel.rgb().iter().all(|&c| c == 0 || c == 255),
            "Pixel {i} is not bilevel: {pixel:?}"
        );
    }
}

/// Assert two buffers carry the same alpha channel
pub fn assert_same_alpha(a: &PixelBuffer, b: &PixelBuffer) {
    let alpha = |buffer: &PixelBuffer| -> Vec<u8> {
        buffer.pixels().iter().map(|p| p.alpha).collect()
    };
    assert_eq!(alpha(a), alpha(b), "Alpha channels differ");
}

/// Assert `bytes` starts with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG data, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}
