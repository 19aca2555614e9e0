#![doc = r#"
stickerfit — batch conversion of sticker images to a fixed 370x320 PNG canvas.

Every image is scaled to fit inside the canvas without changing its aspect ratio and
centered on a transparent background. Optionally a solid background color is keyed
out first, with a soft alpha ramp around the tolerance so edges are not cut hard.

Quick start: convert a folder
-----------------------------
```rust,no_run
use std::path::Path;
use stickerfit::{process_input_to_dir, BackgroundSource, ProcessingParams};

fn main() -> stickerfit::Result<()> {
    let params = ProcessingParams {
        make_transparent: true,
        background: BackgroundSource::Auto,
        tolerance: 18,
        ..Default::default()
    };

    let report = process_input_to_dir(Path::new("stickers"), Path::new("output_370x320"), &params)?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Process in memory
-----------------
```rust
use image::{Rgba, RgbaImage};
use stickerfit::{process_image_to_buffer, BackgroundSource, Color, ProcessingParams};

let source = RgbaImage::from_pixel(740, 320, Rgba([255, 255, 255, 255]));
let params = ProcessingParams {
    make_transparent: true,
    background: BackgroundSource::Explicit(Color::WHITE),
    ..Default::default()
};

let canvas = process_image_to_buffer(source, &params).unwrap();
assert_eq!(canvas.dimensions(), (370, 320));
assert!(canvas.pixels().all(|p| p[3] == 0));
```

Error handling
--------------
Per-file problems (`InvalidImage`, `UnsupportedFormat`, `Encode`) are skipped and
recorded by the batch helpers; path-level problems (`PathNotFound`, `NoImagesFound`)
are returned before any output is written. See [`Error::is_fatal`].

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — `Color`, `CanvasSize`, `BackgroundSource` and the defaults.
- [`core`] — keying, fitting and the per-image pipeline.
- [`io`] — input discovery, decoding and PNG writing.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::ProcessingParams;
pub use error::{Error, Result};
pub use types::{
    BackgroundSource, CanvasSize, Color, DEFAULT_OUTPUT_DIR, DEFAULT_SOFT_MARGIN,
    DEFAULT_TOLERANCE, InputFormat, MAX_TOLERANCE, STICKER_HEIGHT, STICKER_WIDTH,
    SUPPORTED_EXTENSIONS,
};

// Components
pub use crate::core::processing::background::detect_corner_color;
pub use crate::core::processing::keying::{KeyStats, key, key_background};
pub use crate::core::processing::resize::{FitResult, fit, fit_dimensions, fit_to_canvas};
pub use io::writers::png::{encode_png, write_rgba_png};

// High-level API re-exports
pub use api::{
    BatchReport, FileFailure, process_image_to_buffer, process_image_to_path,
    process_input_to_dir,
};
