//! High-level, ergonomic library API: convert one image to a file or an in-memory
//! buffer, and batch helpers for files or directory trees. Prefer these entrypoints
//! over the low-level processing modules when embedding stickerfit.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::Serialize;
use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::process_rgba_pipeline;
use crate::core::processing::save::save_processed_image;
use crate::error::Result;
use crate::io::{discover_inputs, load_rgba_image, output_path_for};

/// One file the batch could not convert
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Batch processing report
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub failures: Vec<FileFailure>,
    pub output_dir: PathBuf,
    /// RFC 3339 timestamp of when the batch finished
    pub generated_at: String,
}

impl BatchReport {
    fn new(output_dir: &Path) -> Self {
        Self {
            processed: 0,
            skipped: 0,
            errors: 0,
            failures: Vec::new(),
            output_dir: output_dir.to_path_buf(),
            generated_at: String::new(),
        }
    }
}

/// Key (if requested) and fit an already decoded image, without touching disk.
pub fn process_image_to_buffer(image: RgbaImage, params: &ProcessingParams) -> Result<RgbaImage> {
    params.validate()?;
    Ok(process_rgba_pipeline(image, params)?.canvas)
}

/// Convert a single image file and write the PNG to `output`.
pub fn process_image_to_path(input: &Path, output: &Path, params: &ProcessingParams) -> Result<()> {
    params.validate()?;
    let image = load_rgba_image(input)?;
    save_processed_image(image, output, params).map_err(|e| e.with_path(input))
}

/// Convert every image found under `input` (a file or a directory tree) into
/// `output_dir`, creating it if needed.
///
/// Path-level problems are returned as errors before anything is written. Per-file
/// failures are logged, recorded in the report, and do not stop the batch.
pub fn process_input_to_dir(
    input: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
) -> Result<BatchReport> {
    params.validate()?;
    let discovery = discover_inputs(input)?;

    std::fs::create_dir_all(output_dir)?;

    let mut report = BatchReport::new(output_dir);
    report.skipped = discovery.skipped.len();

    for path in &discovery.images {
        let output_path = output_path_for(path, output_dir);

        match process_image_to_path(path, &output_path, params) {
            Ok(()) => {
                info!("Converted: {:?} -> {:?}", path, output_path);
                report.processed += 1;
            }
            Err(e) => {
                warn!("Skipped {:?}: {}", path, e);
                report.errors += 1;
                report.failures.push(FileFailure {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report.generated_at = chrono::Utc::now().to_rfc3339();
    Ok(report)
}
