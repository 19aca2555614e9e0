use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::InputFormat;

/// Decode a supported image file into RGBA8.
///
/// The extension gates which files are attempted; the actual decoder is picked from
/// the file contents, so a mislabeled JPEG saved as `.png` still loads.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImage> {
    let format = InputFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let reader = ImageReader::open(path)
        .map_err(|e| Error::invalid_image(path, e))?
        .with_guessed_format()
        .map_err(|e| Error::invalid_image(path, e))?;
    let decoded = reader.decode().map_err(|e| Error::invalid_image(path, e))?;

    debug!(
        "Loaded {} ({}, {}x{})",
        path.display(),
        format,
        decoded.width(),
        decoded.height()
    );
    Ok(decoded.to_rgba8())
}
