use image::RgbaImage;
use tracing::debug;

use crate::types::{BackgroundSource, Color};

impl BackgroundSource {
    /// Resolve the reference color for `image`. Returns `None` only for images
    /// without pixels, where there are no corners to sample.
    pub fn resolve(&self, image: &RgbaImage) -> Option<Color> {
        match self {
            BackgroundSource::Explicit(color) => Some(*color),
            BackgroundSource::Auto => detect_corner_color(image),
        }
    }
}

/// Pick the most frequent RGB value among the four corners. Ties go to the
/// corner seen first in the order top-left, top-right, bottom-left, bottom-right.
pub fn detect_corner_color(image: &RgbaImage) -> Option<Color> {
    let (w, h) = image.dimensions();
    if w == 0 || h == 0 {
        return None;
    }

    let corners = [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)].map(|(x, y)| {
        let p = image.get_pixel(x, y);
        Color::new(p[0], p[1], p[2])
    });

    let mut best = corners[0];
    let mut best_count = 0;
    for candidate in corners {
        let count = corners.iter().filter(|c| **c == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    debug!(
        "Detected background {} ({} of 4 corners agree)",
        best, best_count
    );
    Some(best)
}
