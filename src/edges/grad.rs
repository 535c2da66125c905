//! Directional image gradients built on separable derivative kernels.
//!
//! - `directional_gradient`: one axis, any supported aperture; the
//!   building block of the Sobel operator.
//! - `sobel_gradients`: the fixed 3×3 pass used by Canny, returning
//!   `gx`, `gy` and the L2 magnitude per pixel.
use super::kernels::{deriv1_taps, smooth_taps};
use crate::filters::conv_separable;
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Gradient axis selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Per-pixel gradient buffers for the Canny stage.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative
    pub gx: ImageF32,
    /// Vertical derivative
    pub gy: ImageF32,
    /// Euclidean magnitude per pixel: `sqrt(gx^2 + gy^2)`
    pub mag: ImageF32,
}

/// Derivative along `axis` with an odd aperture `ksize`, smoothing the
/// other axis with the matching binomial taps.
pub fn directional_gradient(l: &ImageF32, ksize: usize, axis: Axis) -> ImageF32 {
    let deriv = deriv1_taps(ksize);
    let smooth = smooth_taps(ksize);
    match axis {
        Axis::X => conv_separable(l, &deriv, &smooth),
        Axis::Y => conv_separable(l, &smooth, &deriv),
    }
}

/// Compute 3×3 Sobel gradients and their magnitude.
pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let gx = directional_gradient(l, 3, Axis::X);
    let gy = directional_gradient(l, 3, Axis::Y);
    let mut mag = ImageF32::new(l.w, l.h);
    for y in 0..l.h {
        let gx_row = gx.row(y);
        let gy_row = gy.row(y);
        let mag_row = mag.row_mut(y);
        for x in 0..l.w {
            mag_row[x] = gx_row[x].hypot(gy_row[x]);
        }
    }
    Grad { gx, gy, mag }
}
