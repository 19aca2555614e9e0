use std::path::Path;

use image::RgbaImage;
use tracing::debug;

use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::process_rgba_pipeline;
use crate::error::Result;
use crate::io::writers::png::write_rgba_png;

/// Key (if requested), fit, and write `image` to `output` as an RGBA PNG.
pub fn save_processed_image(
    image: RgbaImage,
    output: &Path,
    params: &ProcessingParams,
) -> Result<()> {
    let fitted = process_rgba_pipeline(image, params)?;
    debug!(
        "Placed {}x{} at ({}, {}) on {} canvas",
        fitted.scaled_width, fitted.scaled_height, fitted.offset_x, fitted.offset_y, params.canvas
    );
    write_rgba_png(output, &fitted.canvas)
}
