//! Detector and output configuration types.
//!
//! [`DetectorConfig`] is a tagged union over the three supported methods,
//! each variant carrying only its own knobs so invalid parameter
//! combinations cannot be expressed. Defaults match the interactive
//! defaults of the studio UI (Canny 100/200, 5×5 blur, sigma 1.0).
//!
//! Kernel sizes are validated, not clamped: the UI steps its sliders by 2
//! so only odd values arrive from there, but a standalone caller gets an
//! [`Error::InvalidParameter`] for even or out-of-range values.

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Detector selection plus the parameters of the selected method.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum DetectorConfig {
    Canny(CannyParams),
    Sobel(SobelParams),
    Laplacian(LaplacianParams),
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self::Canny(CannyParams::default())
    }
}

impl DetectorConfig {
    /// Method name as shown in the UI (and used in the download file name).
    pub fn method_name(&self) -> &'static str {
        match self {
            Self::Canny(_) => "Canny",
            Self::Sobel(_) => "Sobel",
            Self::Laplacian(_) => "Laplacian",
        }
    }

    /// Check every parameter of the selected variant.
    ///
    /// Runs before any pixel work so a bad config never reaches the
    /// detectors.
    pub fn validate(&self) -> Result<(), Error> {
        match self {
            Self::Canny(p) => p.validate(),
            Self::Sobel(p) => p.validate(),
            Self::Laplacian(p) => p.validate(),
        }
    }
}

/// Canny parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyParams {
    /// Lower hysteresis threshold, 0–255.
    pub low_threshold: f32,
    /// Upper hysteresis threshold, 0–255. When it falls below
    /// `low_threshold`, the effective lower threshold is clamped down to
    /// it rather than failing.
    pub high_threshold: f32,
    /// Odd Gaussian kernel size, 1–31. Size 1 disables the blur.
    pub gauss_ksize: usize,
    /// Gaussian sigma, 0–10. Zero derives sigma from the kernel size.
    pub gauss_sigma: f32,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: 100.0,
            high_threshold: 200.0,
            gauss_ksize: 5,
            gauss_sigma: 1.0,
        }
    }
}

impl CannyParams {
    pub fn validate(&self) -> Result<(), Error> {
        ensure_odd_in_range("Gaussian kernel size", self.gauss_ksize, 31)?;
        ensure_in_range("lower threshold", self.low_threshold, 0.0, 255.0)?;
        ensure_in_range("upper threshold", self.high_threshold, 0.0, 255.0)?;
        ensure_in_range("Gaussian sigma", self.gauss_sigma, 0.0, 10.0)
    }
}

/// Sobel parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SobelParams {
    /// Odd derivative aperture, 1–7. Size 1 uses the plain [-1, 0, 1]
    /// derivative without cross smoothing.
    pub ksize: usize,
    /// Compute the horizontal gradient.
    pub dx: bool,
    /// Compute the vertical gradient.
    pub dy: bool,
    /// Combine both axes via Euclidean magnitude when both are computed.
    pub combine: bool,
}

impl Default for SobelParams {
    fn default() -> Self {
        Self {
            ksize: 3,
            dx: true,
            dy: false,
            combine: true,
        }
    }
}

impl SobelParams {
    pub fn validate(&self) -> Result<(), Error> {
        ensure_odd_in_range("Sobel kernel size", self.ksize, 7)
    }
}

/// Laplacian parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaplacianParams {
    /// Odd second-derivative aperture, 1–7. Size 1 uses the fixed 3×3
    /// [[0,1,0],[1,-4,1],[0,1,0]] stencil.
    pub ksize: usize,
    /// Multiplier applied to the response before saturation, 1–5.
    pub scale: f32,
}

impl Default for LaplacianParams {
    fn default() -> Self {
        Self {
            ksize: 3,
            scale: 1.0,
        }
    }
}

impl LaplacianParams {
    pub fn validate(&self) -> Result<(), Error> {
        ensure_odd_in_range("Laplacian kernel size", self.ksize, 7)?;
        ensure_in_range("Laplacian scale", self.scale, 1.0, 5.0)
    }
}

/// Post-processing options applied to the edge map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Replace every sample `v` with `255 - v` (dark edges on white).
    pub invert: bool,
}

fn ensure_odd_in_range(name: &str, value: usize, max: usize) -> Result<(), Error> {
    if value % 2 == 0 {
        return Err(Error::InvalidParameter(format!(
            "{name} must be odd, got {value}"
        )));
    }
    if value > max {
        return Err(Error::InvalidParameter(format!(
            "{name} must be in 1..={max}, got {value}"
        )));
    }
    Ok(())
}

fn ensure_in_range(name: &str, value: f32, min: f32, max: f32) -> Result<(), Error> {
    // NaN fails the containment check and is rejected with the rest.
    if !(min..=max).contains(&value) {
        return Err(Error::InvalidParameter(format!(
            "{name} must be in {min}..={max}, got {value}"
        )));
    }
    Ok(())
}
