use image::RgbaImage;

use crate::core::params::ProcessingParams;
use crate::core::processing::keying::key;
use crate::core::processing::resize::{FitResult, fit_to_canvas};
use crate::error::Result;

/// Run the per-image chain: optional background keying, then canvas fitting.
pub fn process_rgba_pipeline(image: RgbaImage, params: &ProcessingParams) -> Result<FitResult> {
    let image = if params.make_transparent {
        key(image, params)
    } else {
        image
    };

    fit_to_canvas(&image, params.canvas)
}
