//! PNG decoding to and encoding from [`PixelBuffer`].
//!
//! Every input color type is normalized to RGBA8 on the way in: palettes and
//! low bit depths are expanded, 16-bit samples are stripped to 8, grayscale is
//! replicated to red, green and blue, and a missing alpha channel becomes 255.
//! Output is always 8-bit RGBA.

use std::io::Cursor;
use std::path::Path;

use pixel_engine::{Pixel, PixelBuffer};

use crate::error::RenderError;

/// Decode a PNG into an RGBA8 buffer.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, RenderError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;
    let mut data = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut data)
        .map_err(|e| RenderError::PngDecode(e.to_string()))?;
    data.truncate(frame.buffer_size());

    if frame.bit_depth != png::BitDepth::Eight {
        return Err(RenderError::UnsupportedColorType(format!(
            "{:?} at {:?} bits",
            frame.color_type, frame.bit_depth
        )));
    }

    let width = frame.width as usize;
    let height = frame.height as usize;
    let pixels: Vec<Pixel> = match frame.color_type {
        png::ColorType::Rgba => data
            .chunks_exact(4)
            .map(|p| Pixel::new(p[0], p[1], p[2], p[3]))
            .collect(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .map(|p| Pixel::new(p[0], p[1], p[2], 255))
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .map(|p| Pixel::new(p[0], p[0], p[0], p[1]))
            .collect(),
        png::ColorType::Grayscale => data.iter().map(|&v| Pixel::new(v, v, v, 255)).collect(),
        other => return Err(RenderError::UnsupportedColorType(format!("{other:?}"))),
    };

    tracing::debug!(
        width,
        height,
        color_type = ?frame.color_type,
        "Decoded PNG"
    );

    Ok(PixelBuffer::from_pixels(width, height, pixels)?)
}

/// Encode a buffer as an 8-bit RGBA PNG.
///
/// Zero-area buffers cannot be represented and are rejected with
/// [`EngineError::EmptyBuffer`](pixel_engine::EngineError::EmptyBuffer).
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, RenderError> {
    buffer.ensure_not_empty()?;

    let (width, height) = buffer.dimensions();
    let too_large = || RenderError::ImageTooLarge {
        width: u32::try_from(width).unwrap_or(u32::MAX),
        height: u32::try_from(height).unwrap_or(u32::MAX),
    };
    let png_width = u32::try_from(width).map_err(|_| too_large())?;
    let png_height = u32::try_from(height).map_err(|_| too_large())?;

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, png_width, png_height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&buffer.to_rgba())
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }

    tracing::debug!(width, height, bytes = buf.len(), "Encoded PNG");
    Ok(buf)
}

/// Read and decode a PNG file.
pub fn load_png(path: &Path) -> Result<PixelBuffer, RenderError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Encode `buffer` and write it to `path`, replacing any existing file.
pub fn save_png(path: &Path, buffer: &PixelBuffer) -> Result<(), RenderError> {
    let bytes = encode_png(buffer)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
