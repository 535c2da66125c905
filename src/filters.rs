//! Separable filtering primitives shared by the blur and gradient stages.
//!
//! - `conv_separable`: correlation with a horizontal/vertical 1D tap
//!   pair, taps applied as written (no kernel flip).
//! - `gaussian_taps` / `gaussian_blur`: sampled, normalized Gaussian with
//!   the sigma-from-kernel-size fallback the studio UI relies on.
//!
//! Borders replicate the outermost pixel (clamped indices); output
//! dimensions always equal input dimensions.
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Correlate `src` with `kx` along rows, then `ky` along columns.
pub fn conv_separable(src: &ImageF32, kx: &[f32], ky: &[f32]) -> ImageF32 {
    assert!(
        kx.len() % 2 == 1 && ky.len() % 2 == 1,
        "kernel taps must have odd length"
    );
    let tmp = conv_rows(src, kx);
    conv_cols(&tmp, ky)
}

fn conv_rows(src: &ImageF32, taps: &[f32]) -> ImageF32 {
    let radius = taps.len() / 2;
    let mut out = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        let row = src.row(y);
        let dst = out.row_mut(y);
        for (x, dst_px) in dst.iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for (k, &tap) in taps.iter().enumerate() {
                let idx = clamp_index(x as isize + k as isize - radius as isize, src.w);
                acc += tap * row[idx];
            }
            *dst_px = acc;
        }
    }
    out
}

fn conv_cols(src: &ImageF32, taps: &[f32]) -> ImageF32 {
    let radius = taps.len() / 2;
    let mut out = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        let dst = out.row_mut(y);
        for (k, &tap) in taps.iter().enumerate() {
            let sy = clamp_index(y as isize + k as isize - radius as isize, src.h);
            let src_row = src.row(sy);
            for (dst_px, &src_px) in dst.iter_mut().zip(src_row) {
                *dst_px += tap * src_px;
            }
        }
    }
    out
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}

/// Normalized Gaussian taps of odd length `ksize`.
///
/// A non-positive sigma falls back to `0.3·((ksize−1)·0.5 − 1) + 0.8`,
/// the convention the interactive sigma slider (which starts at 0)
/// depends on.
pub fn gaussian_taps(ksize: usize, sigma: f32) -> Vec<f32> {
    assert!(ksize % 2 == 1, "Gaussian kernel size must be odd");
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8
    };
    let radius = ksize / 2;
    let two_sigma2 = 2.0 * sigma * sigma;
    let mut taps = vec![0.0f32; ksize];
    for (i, tap) in taps.iter_mut().enumerate() {
        let x = (i as isize - radius as isize) as f32;
        *tap = (-(x * x) / two_sigma2).exp();
    }
    let sum: f32 = taps.iter().sum();
    for tap in &mut taps {
        *tap /= sum;
    }
    taps
}

/// Separable Gaussian blur. Kernel size 1 degenerates to a copy.
pub fn gaussian_blur(src: &ImageF32, ksize: usize, sigma: f32) -> ImageF32 {
    if ksize <= 1 {
        return src.clone();
    }
    let taps = gaussian_taps(ksize, sigma);
    conv_separable(src, &taps, &taps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_taps_are_normalized_and_symmetric() {
        for (ksize, sigma) in [(3, 1.0f32), (5, 1.0), (5, 0.0), (31, 4.5)] {
            let taps = gaussian_taps(ksize, sigma);
            assert_eq!(taps.len(), ksize);
            let sum: f32 = taps.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "ksize={ksize} sum={sum}");
            for i in 0..ksize / 2 {
                assert_eq!(taps[i], taps[ksize - 1 - i]);
            }
            let mid = taps[ksize / 2];
            assert!(taps.iter().all(|&t| t <= mid));
        }
    }

    #[test]
    fn blur_preserves_uniform_images() {
        let mut img = ImageF32::new(6, 5);
        for v in &mut img.data {
            *v = 128.0;
        }
        let blurred = gaussian_blur(&img, 5, 1.0);
        for &v in &blurred.data {
            assert!((v - 128.0).abs() < 1e-3, "got {v}");
        }
    }

    #[test]
    fn kernel_size_one_is_a_copy() {
        let mut img = ImageF32::new(4, 3);
        for (i, v) in img.data.iter_mut().enumerate() {
            *v = i as f32;
        }
        let blurred = gaussian_blur(&img, 1, 2.0);
        assert_eq!(blurred.data, img.data);
    }

    #[test]
    fn separable_correlation_matches_hand_computed_values() {
        // 3x1 image [1, 2, 4] under [-1, 0, 1] with replicate borders:
        // x=0: 2 - 1 = 1; x=1: 4 - 1 = 3; x=2: 4 - 2 = 2.
        let mut img = ImageF32::new(3, 1);
        img.data.copy_from_slice(&[1.0, 2.0, 4.0]);
        let out = conv_separable(&img, &[-1.0, 0.0, 1.0], &[1.0]);
        assert_eq!(out.data, vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn column_pass_applies_taps_vertically() {
        let mut img = ImageF32::new(1, 3);
        img.data.copy_from_slice(&[1.0, 2.0, 4.0]);
        let out = conv_separable(&img, &[1.0], &[-1.0, 0.0, 1.0]);
        assert_eq!(out.data, vec![1.0, 3.0, 2.0]);
    }
}
