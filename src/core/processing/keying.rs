use image::RgbaImage;
use tracing::debug;

use crate::core::params::ProcessingParams;
use crate::types::Color;

/// Per-image counts of what keying did to each pixel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyStats {
    pub cleared: usize,
    pub softened: usize,
    pub untouched: usize,
}

/// New alpha for a pixel at `distance` from the reference color.
///
/// Inside `tolerance` the pixel is cleared, beyond `tolerance + soft_margin` it keeps
/// its alpha, and in between alpha ramps linearly from 0 up to the source alpha.
pub fn keyed_alpha(alpha: u8, distance: f32, tolerance: u8, soft_margin: u8) -> u8 {
    let tolerance = tolerance as f32;
    let outer = tolerance + soft_margin as f32;

    if distance <= tolerance {
        0
    } else if distance >= outer {
        alpha
    } else {
        let ratio = (distance - tolerance) / soft_margin as f32;
        (alpha as f32 * ratio).round().clamp(0.0, alpha as f32) as u8
    }
}

/// Lower the alpha of every pixel close to `reference`, in place.
/// Alpha is never raised; fully transparent pixels are left alone.
pub fn key_background(
    image: &mut RgbaImage,
    reference: Color,
    tolerance: u8,
    soft_margin: u8,
) -> KeyStats {
    let mut stats = KeyStats::default();

    for pixel in image.pixels_mut() {
        let alpha = pixel[3];
        if alpha == 0 {
            stats.untouched += 1;
            continue;
        }

        let distance = reference.distance(&Color::new(pixel[0], pixel[1], pixel[2]));
        let new_alpha = keyed_alpha(alpha, distance, tolerance, soft_margin);
        pixel[3] = new_alpha;

        if new_alpha == 0 {
            stats.cleared += 1;
        } else if new_alpha < alpha {
            stats.softened += 1;
        } else {
            stats.untouched += 1;
        }
    }

    stats
}

/// Resolve the background reference per `params.background` and key it out.
/// The buffer is consumed and modified in place; zero-pixel images come back unchanged.
pub fn key(mut image: RgbaImage, params: &ProcessingParams) -> RgbaImage {
    let Some(reference) = params.background.resolve(&image) else {
        return image;
    };

    let stats = key_background(&mut image, reference, params.tolerance, params.soft_margin);
    debug!(
        "Keyed background {} (tolerance={}, soft_margin={}): cleared={}, softened={}, untouched={}",
        reference,
        params.tolerance,
        params.soft_margin,
        stats.cleared,
        stats.softened,
        stats.untouched
    );
    image
}
