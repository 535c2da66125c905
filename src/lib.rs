#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod error;
pub mod image;
pub mod pipeline;

// Processing stages – public so tools and tests can drive them directly.
pub mod edges;
pub mod filters;
pub mod gray;
pub mod postprocess;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the one-shot pipeline + its result.
pub use crate::pipeline::{download_file_name, process, ProcessResult, StageTimings};

// Configuration and the error taxonomy.
pub use crate::config::{
    CannyParams, DetectorConfig, LaplacianParams, OutputOptions, SobelParams,
};
pub use crate::error::Error;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_detector::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bytes = std::fs::read("photo.jpg")?;
/// let result = process(&bytes, &DetectorConfig::default(), &OutputOptions::default())?;
/// println!(
///     "{}x{} edge map in {:.3} ms",
///     result.width, result.height, result.timings.total_ms
/// );
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::config::{DetectorConfig, OutputOptions};
    pub use crate::image::{GrayImageU8, RgbImageU8};
    pub use crate::{process, Error, ProcessResult};
}
