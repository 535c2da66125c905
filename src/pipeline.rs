//! End-to-end processing pipeline.
//!
//! `process` chains the stages the studio UI drives on every parameter
//! change: decode → grayscale → edge detection → optional inversion →
//! PNG encoding. Each stage is pure and owns its buffers, so independent
//! requests can run concurrently without shared state.
use crate::config::{DetectorConfig, OutputOptions};
use crate::edges;
use crate::error::Error;
use crate::gray::rgb_to_gray;
use crate::image::{decode_image, encode_gray_png, GrayImageU8, RgbImageU8};
use crate::postprocess;
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Wall-clock time spent in each pipeline stage.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTimings {
    pub decode_ms: f64,
    pub grayscale_ms: f64,
    pub detect_ms: f64,
    pub postprocess_ms: f64,
    pub encode_ms: f64,
    pub total_ms: f64,
}

/// Everything the presentation shell consumes: the decoded original for
/// side-by-side display, the edge map, and its PNG encoding for download.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    #[serde(skip)]
    pub original: RgbImageU8,
    #[serde(skip)]
    pub edges: GrayImageU8,
    #[serde(skip)]
    pub edges_png: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub method: &'static str,
    pub timings: StageTimings,
}

/// Run the whole pipeline on raw image bytes.
///
/// The configuration is validated before any pixel work, so an invalid
/// kernel size fails with [`Error::InvalidParameter`] even when the
/// image bytes are unusable too.
pub fn process(
    bytes: &[u8],
    config: &DetectorConfig,
    options: &OutputOptions,
) -> Result<ProcessResult, Error> {
    config.validate()?;
    let total_start = Instant::now();

    let stage = Instant::now();
    let original = decode_image(bytes)?;
    let decode_ms = elapsed_ms(stage);
    debug!(
        "decoded {}x{} image from {} bytes",
        original.w,
        original.h,
        bytes.len()
    );

    let stage = Instant::now();
    let gray = rgb_to_gray(&original);
    let grayscale_ms = elapsed_ms(stage);

    let stage = Instant::now();
    let raw_edges = edges::detect_edges(&gray, config)?;
    let detect_ms = elapsed_ms(stage);
    debug!("{} detector done in {detect_ms:.3} ms", config.method_name());

    let stage = Instant::now();
    let edges = postprocess::apply(&raw_edges, options);
    let postprocess_ms = elapsed_ms(stage);

    let stage = Instant::now();
    let edges_png = encode_gray_png(&edges)?;
    let encode_ms = elapsed_ms(stage);

    Ok(ProcessResult {
        width: original.w,
        height: original.h,
        method: config.method_name(),
        original,
        edges,
        edges_png,
        timings: StageTimings {
            decode_ms,
            grayscale_ms,
            detect_ms,
            postprocess_ms,
            encode_ms,
            total_ms: elapsed_ms(total_start),
        },
    })
}

/// Suggested file name for the downloadable edge map.
pub fn download_file_name(config: &DetectorConfig) -> String {
    format!("{}_edges.png", config.method_name())
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LaplacianParams, SobelParams};

    #[test]
    fn download_names_follow_the_method() {
        assert_eq!(download_file_name(&DetectorConfig::default()), "Canny_edges.png");
        assert_eq!(
            download_file_name(&DetectorConfig::Sobel(SobelParams::default())),
            "Sobel_edges.png"
        );
        assert_eq!(
            download_file_name(&DetectorConfig::Laplacian(LaplacianParams::default())),
            "Laplacian_edges.png"
        );
    }

    #[test]
    fn invalid_config_wins_over_undecodable_bytes() {
        let config = DetectorConfig::Sobel(SobelParams {
            ksize: 6,
            ..SobelParams::default()
        });
        let err = process(b"not an image", &config, &OutputOptions::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)), "got {err:?}");
    }
}
