use edge_detector::{download_file_name, process, DetectorConfig, OutputOptions, StageTimings};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub options: OutputOptions,
    #[serde(default)]
    pub output: DemoOutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoOutputConfig {
    /// Where to write the edge map; defaults to `<Method>_edges.png` in
    /// the working directory.
    pub edges_png: Option<PathBuf>,
    /// Optional JSON summary with dimensions, counts and timings.
    pub summary_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let bytes = fs::read(&config.input)
        .map_err(|e| format!("Failed to read {}: {e}", config.input.display()))?;
    let result = process(&bytes, &config.detector, &config.options)
        .map_err(|e| format!("Processing failed: {e}"))?;

    let png_path = config
        .output
        .edges_png
        .unwrap_or_else(|| PathBuf::from(download_file_name(&config.detector)));
    ensure_parent_dir(&png_path)?;
    fs::write(&png_path, &result.edges_png)
        .map_err(|e| format!("Failed to write {}: {e}", png_path.display()))?;

    let summary = DemoSummary {
        width: result.width,
        height: result.height,
        method: result.method,
        invert: config.options.invert,
        non_zero_pixels: result.edges.data.iter().filter(|&&v| v > 0).count(),
        timings: result.timings.clone(),
    };
    if let Some(summary_path) = &config.output.summary_json {
        write_json_file(summary_path, &summary)?;
        println!("Saved summary to {}", summary_path.display());
    }

    println!(
        "Saved {}x{} {} edge map to {} ({:.3} ms)",
        summary.width,
        summary.height,
        summary.method,
        png_path.display(),
        summary.timings.total_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: edge_demo <config.json>".to_string()
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DemoSummary {
    width: usize,
    height: usize,
    method: &'static str,
    invert: bool,
    non_zero_pixels: usize,
    timings: StageTimings,
}
