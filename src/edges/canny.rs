//! Canny edge detection: blur, gradients, non-maximum suppression and
//! hysteresis thresholding.
//!
//! Non-maximum suppression compares each pixel against its two neighbors
//! along the quantized gradient direction (4 bins selected by the
//! tan 22.5° test on |gx|/|gy|). The outermost 1-pixel frame is skipped
//! to avoid out-of-bounds neighbor lookups, so frames and images smaller
//! than 3×3 come back all zero.
//!
//! Hysteresis marks pixels above the upper threshold as edges and grows
//! 8-connected regions through pixels above the lower threshold. An
//! upper threshold below the lower one is tolerated: the effective lower
//! threshold is clamped down to it.
use super::grad::{sobel_gradients, Grad};
use crate::config::CannyParams;
use crate::filters::gaussian_blur;
use crate::gray::gray_to_f32;
use crate::image::{GrayImageU8, ImageF32, ImageView, ImageViewMut};

const TAN_22_5_DEG: f32 = 0.41421356237;

const EDGE: u8 = 255;

/// Run the Canny detector. Output contains only the values 0 and 255.
pub fn canny(gray: &GrayImageU8, params: &CannyParams) -> GrayImageU8 {
    let l = gray_to_f32(gray);
    let blurred = gaussian_blur(&l, params.gauss_ksize, params.gauss_sigma);
    let grad = sobel_gradients(&blurred);
    let suppressed = suppress_non_maxima(&grad);

    let high = params.high_threshold;
    let low = params.low_threshold.min(high);
    hysteresis(&suppressed, low, high)
}

/// Zero every magnitude that is not a local maximum along its gradient
/// direction. Ties break toward the first neighbor of the pair so a
/// two-pixel ridge plateau keeps exactly one pixel.
fn suppress_non_maxima(grad: &Grad) -> ImageF32 {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut out = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = grad.mag.row(y - 1);
        let mag_row = grad.mag.row(y);
        let mag_next = grad.mag.row(y + 1);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let out_row = out.row_mut(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            if mag <= 0.0 {
                continue;
            }

            let gx = gx_row[x];
            let gy = gy_row[x];
            let abs_gx = gx.abs();
            let abs_gy = gy.abs();
            let same_sign = (gx >= 0.0 && gy >= 0.0) || (gx <= 0.0 && gy <= 0.0);

            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x + 1], mag_next[x - 1])
                } else {
                    (mag_prev[x - 1], mag_next[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x + 1], mag_next[x - 1])
            } else {
                (mag_prev[x - 1], mag_next[x + 1])
            };

            if mag <= neighbor1 || mag < neighbor2 {
                continue;
            }
            out_row[x] = mag;
        }
    }

    out
}

/// Classify suppressed magnitudes: above `high` seeds an edge, above
/// `low` extends one through 8-connectivity.
fn hysteresis(mag: &ImageF32, low: f32, high: f32) -> GrayImageU8 {
    let w = mag.w;
    let h = mag.h;
    let mut out = GrayImageU8::new(w, h);
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for y in 0..h {
        let mag_row = mag.row(y);
        for x in 0..w {
            if mag_row[x] <= high || out.get(x, y) == EDGE {
                continue;
            }
            out.set(x, y, EDGE);
            stack.push((x, y));
            while let Some((cx, cy)) = stack.pop() {
                for dy in -1isize..=1 {
                    for dx in -1isize..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let nx = cx as isize + dx;
                        let ny = cy as isize + dy;
                        if nx < 0 || ny < 0 || nx as usize >= w || ny as usize >= h {
                            continue;
                        }
                        let (nx, ny) = (nx as usize, ny as usize);
                        if out.get(nx, ny) != EDGE && mag.get(nx, ny) > low {
                            out.set(nx, ny, EDGE);
                            stack.push((nx, ny));
                        }
                    }
                }
            }
        }
    }

    out
}
