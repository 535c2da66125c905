//! Decode/encode boundary built on the `image` crate.
//!
//! - `decode_image`: sniff + decode JPEG/PNG/BMP bytes into an owned RGB
//!   buffer, rejecting other formats and oversized images.
//! - `encode_gray_png` / `encode_rgb_png`: serialize a buffer to PNG
//!   bytes in memory.
//!
//! Format detection works on content, never on file names; the
//! dimension bound is checked from the header before the full decode.
use super::{GrayImageU8, RgbImageU8};
use crate::error::Error;
use image::{DynamicImage, ImageBuffer, ImageFormat, ImageReader, Luma, Rgb};
use std::io::Cursor;

/// Upper bound on decoded pixel count (64 Mpx).
pub const MAX_PIXELS: u64 = 64 * 1024 * 1024;

/// Decode JPEG/PNG/BMP bytes into an RGB buffer.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImageU8, Error> {
    if bytes.is_empty() {
        return Err(Error::Decode("empty input".to_string()));
    }
    let format = image::guess_format(bytes).map_err(|e| Error::Decode(e.to_string()))?;
    match format {
        ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::Bmp => {}
        other => {
            return Err(Error::Decode(format!(
                "unsupported format {other:?}; expected JPEG, PNG or BMP"
            )))
        }
    }

    let (w, h) = ImageReader::with_format(Cursor::new(bytes), format)
        .into_dimensions()
        .map_err(|e| Error::Decode(e.to_string()))?;
    if w == 0 || h == 0 {
        return Err(Error::Decode(format!("degenerate dimensions {w}x{h}")));
    }
    if u64::from(w) * u64::from(h) > MAX_PIXELS {
        return Err(Error::Decode(format!(
            "image {w}x{h} exceeds the {MAX_PIXELS} pixel bound"
        )));
    }

    let rgb = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| Error::Decode(e.to_string()))?
        .into_rgb8();
    Ok(RgbImageU8::from_raw(
        rgb.width() as usize,
        rgb.height() as usize,
        rgb.into_raw(),
    ))
}

/// Encode a grayscale buffer as PNG bytes.
pub fn encode_gray_png(img: &GrayImageU8) -> Result<Vec<u8>, Error> {
    let buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(img.w as u32, img.h as u32, img.data.clone())
            .ok_or_else(|| Error::Encode("buffer does not match its dimensions".to_string()))?;
    write_png(DynamicImage::ImageLuma8(buffer))
}

/// Encode an RGB buffer as PNG bytes.
pub fn encode_rgb_png(img: &RgbImageU8) -> Result<Vec<u8>, Error> {
    let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(img.w as u32, img.h as u32, img.data.clone())
            .ok_or_else(|| Error::Encode("buffer does not match its dimensions".to_string()))?;
    write_png(DynamicImage::ImageRgb8(buffer))
}

fn write_png(img: DynamicImage) -> Result<Vec<u8>, Error> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(out.into_inner())
}
