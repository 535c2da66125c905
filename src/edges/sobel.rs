//! Sobel operator: per-axis first derivatives with optional Euclidean
//! combination.
//!
//! Matches the interactive semantics: each requested axis is computed,
//! absolute-valued and saturated to u8 on its own, and the combined
//! output is the saturated Euclidean magnitude of the two saturated axis
//! maps. With `combine` unset (or only one axis requested) the X result
//! wins over Y.
use super::abs_saturate;
use super::grad::{directional_gradient, Axis};
use crate::config::SobelParams;
use crate::gray::gray_to_f32;
use crate::image::{GrayImageU8, ImageF32, ImageView, ImageViewMut};

/// Run the Sobel detector. Neither axis requested yields an all-zero map.
pub fn sobel(gray: &GrayImageU8, params: &SobelParams) -> GrayImageU8 {
    if !params.dx && !params.dy {
        return GrayImageU8::new(gray.w, gray.h);
    }
    let l = gray_to_f32(gray);
    let gx = params
        .dx
        .then(|| directional_gradient(&l, params.ksize, Axis::X));
    let gy = params
        .dy
        .then(|| directional_gradient(&l, params.ksize, Axis::Y));

    match (gx, gy) {
        (Some(gx), Some(gy)) if params.combine => combine_magnitude(&gx, &gy),
        (Some(gx), _) => saturate_abs_plane(&gx),
        (None, Some(gy)) => saturate_abs_plane(&gy),
        (None, None) => unreachable!("handled by the early return"),
    }
}

fn saturate_abs_plane(plane: &ImageF32) -> GrayImageU8 {
    let mut out = GrayImageU8::new(plane.w, plane.h);
    for y in 0..plane.h {
        let src = plane.row(y);
        let dst = out.row_mut(y);
        for (dst_px, &v) in dst.iter_mut().zip(src) {
            *dst_px = abs_saturate(v);
        }
    }
    out
}

fn combine_magnitude(gx: &ImageF32, gy: &ImageF32) -> GrayImageU8 {
    let mut out = GrayImageU8::new(gx.w, gx.h);
    for y in 0..gx.h {
        let gx_row = gx.row(y);
        let gy_row = gy.row(y);
        let dst = out.row_mut(y);
        for x in 0..gx.w {
            let ax = abs_saturate(gx_row[x]) as f32;
            let ay = abs_saturate(gy_row[x]) as f32;
            dst[x] = ax.hypot(ay).round().min(255.0) as u8;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned_gray(w: usize, h: usize) -> GrayImageU8 {
        let mut img = GrayImageU8::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set(x, y, ((x * 31 + y * 17 + x * y) % 256) as u8);
            }
        }
        img
    }

    fn transposed(img: &GrayImageU8) -> GrayImageU8 {
        let mut out = GrayImageU8::new(img.h, img.w);
        for y in 0..img.h {
            for x in 0..img.w {
                out.set(y, x, img.get(x, y));
            }
        }
        out
    }

    #[test]
    fn x_only_equals_the_saturated_absolute_horizontal_gradient() {
        let img = patterned_gray(9, 7);
        let params = SobelParams {
            ksize: 3,
            dx: true,
            dy: false,
            combine: true,
        };
        let out = sobel(&img, &params);

        let gx = directional_gradient(&gray_to_f32(&img), 3, Axis::X);
        for y in 0..7 {
            for x in 0..9 {
                assert_eq!(out.get(x, y), abs_saturate(gx.get(x, y)), "({x},{y})");
            }
        }
    }

    #[test]
    fn y_only_is_x_only_under_transpose() {
        let img = patterned_gray(8, 5);
        let x_params = SobelParams {
            ksize: 3,
            dx: true,
            dy: false,
            combine: false,
        };
        let y_params = SobelParams {
            ksize: 3,
            dx: false,
            dy: true,
            combine: false,
        };
        let x_of_transpose = sobel(&transposed(&img), &x_params);
        let y_of_original = sobel(&img, &y_params);
        assert_eq!(transposed(&y_of_original), x_of_transpose);
    }

    #[test]
    fn no_axes_yields_an_all_zero_buffer() {
        let img = patterned_gray(6, 6);
        let params = SobelParams {
            ksize: 3,
            dx: false,
            dy: false,
            combine: true,
        };
        let out = sobel(&img, &params);
        assert_eq!((out.w, out.h), (6, 6));
        assert!(out.data.iter().all(|&v| v == 0));
    }

    #[test]
    fn both_axes_without_combine_returns_x() {
        let img = patterned_gray(6, 6);
        let both = SobelParams {
            ksize: 3,
            dx: true,
            dy: true,
            combine: false,
        };
        let x_only = SobelParams {
            ksize: 3,
            dx: true,
            dy: false,
            combine: false,
        };
        assert_eq!(sobel(&img, &both).data, sobel(&img, &x_only).data);
    }

    #[test]
    fn combined_magnitude_saturates_at_255() {
        // Hard 0→255 step: both boundary columns saturate per axis, and
        // the combined magnitude must still clamp to 255.
        let mut img = GrayImageU8::new(4, 4);
        for y in 0..4 {
            img.set(2, y, 255);
            img.set(3, y, 255);
        }
        let params = SobelParams {
            ksize: 3,
            dx: true,
            dy: true,
            combine: true,
        };
        let out = sobel(&img, &params);
        assert!(out.data.iter().all(|&v| v <= 255));
        assert_eq!(out.get(1, 1), 255);
    }

    #[test]
    fn aperture_one_uses_the_bare_central_difference() {
        // Row ramp 0, 10, 30: central differences are 10, 30, 20 and no
        // vertical smoothing is applied.
        let mut img = GrayImageU8::new(3, 3);
        for y in 0..3 {
            img.set(1, y, 10);
            img.set(2, y, 30);
        }
        let params = SobelParams {
            ksize: 1,
            dx: true,
            dy: false,
            combine: false,
        };
        let out = sobel(&img, &params);
        for y in 0..3 {
            assert_eq!(out.get(0, y), 10);
            assert_eq!(out.get(1, y), 30);
            assert_eq!(out.get(2, y), 20);
        }
    }
}
