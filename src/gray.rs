//! RGB → luma conversion and u8 → f32 plane conversion.
//!
//! Luma uses the BT.601 weights `0.299·R + 0.587·G + 0.114·B`, rounded
//! to the nearest integer. The f32 conversion keeps the 0–255 domain so
//! the detector thresholds apply to gradient responses directly.
use crate::image::{GrayImageU8, ImageF32, ImageView, ImageViewMut, RgbImageU8};

const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Reduce an RGB buffer to single-channel luminance of the same size.
pub fn rgb_to_gray(rgb: &RgbImageU8) -> GrayImageU8 {
    let mut out = GrayImageU8::new(rgb.w, rgb.h);
    for y in 0..rgb.h {
        let src = rgb.row(y);
        let dst = out.row_mut(y);
        for x in 0..rgb.w {
            let r = src[x * 3] as f32;
            let g = src[x * 3 + 1] as f32;
            let b = src[x * 3 + 2] as f32;
            let luma = LUMA_R * r + LUMA_G * g + LUMA_B * b;
            dst[x] = luma.round().min(255.0) as u8;
        }
    }
    out
}

/// Convert an 8-bit plane to f32, keeping values in 0–255.
pub fn gray_to_f32(gray: &GrayImageU8) -> ImageF32 {
    let mut out = ImageF32::new(gray.w, gray.h);
    for y in 0..gray.h {
        let src = gray.row(y);
        let dst = out.row_mut(y);
        for x in 0..gray.w {
            dst[x] = src[x] as f32;
        }
    }
    out
}
