//! Edge detection operators: Canny, Sobel and Laplacian.
//!
//! All three consume an 8-bit grayscale buffer and produce an edge map of
//! the same dimensions:
//!
//! - Canny yields a binary map (0 or 255 per pixel) via gradient
//!   computation, non-maximum suppression and hysteresis thresholding.
//! - Sobel and Laplacian yield continuous responses, absolute-valued and
//!   saturated to 0–255.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate).
//! - Validate parameters up front; the numeric code assumes odd,
//!   in-range kernel sizes.

pub mod canny;
pub mod grad;
pub mod kernels;
pub mod laplacian;
pub mod sobel;

pub use canny::canny;
pub use grad::{directional_gradient, sobel_gradients, Axis, Grad};
pub use laplacian::laplacian;
pub use sobel::sobel;

use crate::config::DetectorConfig;
use crate::error::Error;
use crate::image::GrayImageU8;

/// Run the detector selected by `config` on a grayscale buffer.
///
/// Validates the configuration first and fails with
/// [`Error::InvalidParameter`] before touching any pixels.
pub fn detect_edges(gray: &GrayImageU8, config: &DetectorConfig) -> Result<GrayImageU8, Error> {
    config.validate()?;
    let out = match config {
        DetectorConfig::Canny(p) => canny::canny(gray, p),
        DetectorConfig::Sobel(p) => sobel::sobel(gray, p),
        DetectorConfig::Laplacian(p) => laplacian::laplacian(gray, p),
    };
    Ok(out)
}

/// Absolute value saturated to u8 with rounding, the post-gradient
/// conversion every continuous operator shares.
#[inline]
pub(crate) fn abs_saturate(v: f32) -> u8 {
    v.abs().round().min(255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SobelParams;

    #[test]
    fn detect_edges_rejects_invalid_parameters_before_processing() {
        let gray = GrayImageU8::new(4, 4);
        let config = DetectorConfig::Sobel(SobelParams {
            ksize: 2,
            ..SobelParams::default()
        });
        let err = detect_edges(&gray, &config).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)), "got {err:?}");
    }

    #[test]
    fn detect_edges_preserves_dimensions_for_every_method() {
        let gray = GrayImageU8::new(9, 6);
        for config in [
            DetectorConfig::default(),
            DetectorConfig::Sobel(SobelParams::default()),
            DetectorConfig::Laplacian(crate::config::LaplacianParams::default()),
        ] {
            let out = detect_edges(&gray, &config).unwrap();
            assert_eq!((out.w, out.h), (9, 6), "method {}", config.method_name());
        }
    }
}
