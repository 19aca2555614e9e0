use std::path::Path;

use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::core::processing::padding::pad_to_canvas;
use crate::error::{Error, Result};
use crate::types::CanvasSize;

/// Scaled size that fits `target_cols x target_rows` while keeping the source aspect ratio.
/// Both sides are rounded and clamped to `1..=target`.
pub fn fit_dimensions(
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> (u32, u32) {
    let scale_factor = f64::min(
        target_cols as f64 / original_cols as f64,
        target_rows as f64 / original_rows as f64,
    );

    let new_cols = (original_cols as f64 * scale_factor).round() as u32;
    let new_rows = (original_rows as f64 * scale_factor).round() as u32;

    (
        new_cols.clamp(1, target_cols.max(1)),
        new_rows.clamp(1, target_rows.max(1)),
    )
}

/// Lanczos3 resize of interleaved RGBA8 data. Alpha is premultiplied during
/// convolution so fully transparent pixels contribute no color.
pub fn resize_rgba_image(
    data: &[u8],
    original_cols: u32,
    original_rows: u32,
    target_cols: u32,
    target_rows: u32,
) -> Result<Vec<u8>> {
    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        .use_alpha(true);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(original_cols, original_rows, data.to_vec(), PixelType::U8x4)
        .map_err(|e| Error::invalid_image(Path::new(""), e))?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(|e| Error::invalid_image(Path::new(""), e))?;

    Ok(dst_image.into_vec())
}

/// Output of the canvas fitter, with placement of the scaled image on the canvas.
#[derive(Debug, Clone)]
pub struct FitResult {
    pub canvas: RgbaImage,
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// Scale `image` to fit inside `canvas` and center it on a transparent canvas of
/// exactly that size. Images already at the fitted size are copied without resampling.
pub fn fit_to_canvas(image: &RgbaImage, canvas: CanvasSize) -> Result<FitResult> {
    let (cols, rows) = image.dimensions();
    if cols == 0 || rows == 0 {
        return Err(Error::invalid_image(
            Path::new(""),
            format!("image has invalid dimensions {}x{}", cols, rows),
        ));
    }

    let (new_cols, new_rows) = fit_dimensions(cols, rows, canvas.width, canvas.height);
    debug!(
        "Original size: {}x{}, New size: {}x{}",
        cols, rows, new_cols, new_rows
    );

    let scaled = if (new_cols, new_rows) == (cols, rows) {
        image.as_raw().clone()
    } else {
        resize_rgba_image(image.as_raw(), cols, rows, new_cols, new_rows)?
    };

    let (padded, offset_x, offset_y) = pad_to_canvas(&scaled, new_cols, new_rows, canvas);
    let canvas = RgbaImage::from_raw(canvas.width, canvas.height, padded).ok_or_else(|| {
        Error::invalid_image(Path::new(""), "canvas buffer does not match its dimensions")
    })?;

    Ok(FitResult {
        canvas,
        scaled_width: new_cols,
        scaled_height: new_rows,
        offset_x,
        offset_y,
    })
}

/// Canvas fitter entry point returning just the padded image.
pub fn fit(image: &RgbaImage, canvas: CanvasSize) -> Result<RgbaImage> {
    fit_to_canvas(image, canvas).map(|fitted| fitted.canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn wide_image_fills_width() {
        assert_eq!(fit_dimensions(740, 320, 370, 320), (370, 160));
    }

    #[test]
    fn tall_image_keeps_size_when_it_fits_height() {
        assert_eq!(fit_dimensions(185, 320, 370, 320), (185, 320));
    }

    #[test]
    fn small_square_is_scaled_up_to_height() {
        assert_eq!(fit_dimensions(100, 100, 370, 320), (320, 320));
    }

    #[test]
    fn extreme_aspect_ratio_keeps_one_pixel() {
        assert_eq!(fit_dimensions(10_000, 1, 370, 320), (370, 1));
        assert_eq!(fit_dimensions(1, 10_000, 370, 320), (1, 320));
    }

    #[test]
    fn matching_aspect_ratio_fills_both_sides() {
        assert_eq!(fit_dimensions(740, 640, 370, 320), (370, 320));
    }

    #[test]
    fn zero_sized_image_is_invalid() {
        let err = fit_to_canvas(&RgbaImage::new(0, 10), CanvasSize::STICKER).unwrap_err();
        assert!(matches!(err, Error::InvalidImage { .. }));
    }

    #[test]
    fn resize_preserves_solid_color() {
        let img = RgbaImage::from_pixel(40, 20, Rgba([10, 120, 200, 255]));
        let out = resize_rgba_image(img.as_raw(), 40, 20, 20, 10).unwrap();
        assert_eq!(out.len(), 20 * 10 * 4);
        for px in out.chunks_exact(4) {
            for (got, want) in px.iter().zip([10u8, 120, 200, 255]) {
                assert!(got.abs_diff(want) <= 1, "{:?}", px);
            }
        }
    }

    #[test]
    fn fitted_canvas_is_exact_size() {
        for (w, h) in [(1, 1), (37, 900), (2000, 15), (370, 320), (123, 456)] {
            let img = RgbaImage::from_pixel(w, h, Rgba([1, 2, 3, 255]));
            let fitted = fit_to_canvas(&img, CanvasSize::STICKER).unwrap();
            assert_eq!(fitted.canvas.dimensions(), (370, 320));
            assert!(fitted.scaled_width == 370 || fitted.scaled_height == 320);
        }
    }
}
