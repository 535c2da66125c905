//! Laplacian operator: sum of second derivatives, scaled and saturated.
//!
//! The response is `scale · (∂²/∂x² + ∂²/∂y²)` using the separable
//! second-derivative kernels from [`super::kernels`], absolute-valued and
//! saturated to 0–255. Aperture 1 reduces to the classic 3×3
//! `[[0,1,0],[1,-4,1],[0,1,0]]` stencil.
use super::abs_saturate;
use super::kernels::{deriv2_taps, smooth_taps};
use crate::config::LaplacianParams;
use crate::filters::conv_separable;
use crate::gray::gray_to_f32;
use crate::image::{GrayImageU8, ImageView, ImageViewMut};

/// Run the Laplacian detector.
pub fn laplacian(gray: &GrayImageU8, params: &LaplacianParams) -> GrayImageU8 {
    let l = gray_to_f32(gray);
    let d2 = deriv2_taps(params.ksize);
    let smooth = smooth_taps(params.ksize);
    let lxx = conv_separable(&l, &d2, &smooth);
    let lyy = conv_separable(&l, &smooth, &d2);

    let mut out = GrayImageU8::new(gray.w, gray.h);
    for y in 0..gray.h {
        let xx = lxx.row(y);
        let yy = lyy.row(y);
        let dst = out.row_mut(y);
        for x in 0..gray.w {
            dst[x] = abs_saturate((xx[x] + yy[x]) * params.scale);
        }
    }
    out
}
