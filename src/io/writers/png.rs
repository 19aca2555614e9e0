use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbaImage};

use crate::error::{Error, Result};

pub fn write_rgba_png(output: &Path, image: &RgbaImage) -> Result<()> {
    let encode_error = |source: ImageError| Error::Encode {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(|e| encode_error(ImageError::IoError(e)))?;
    let mut writer = BufWriter::new(file);
    encode_into(&mut writer, image).map_err(encode_error)?;
    writer
        .flush()
        .map_err(|e| encode_error(ImageError::IoError(e)))?;
    Ok(())
}

/// Encode to PNG bytes in memory.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode_into(&mut buf, image).map_err(|source| Error::Encode {
        path: Default::default(),
        source,
    })?;
    Ok(buf)
}

fn encode_into<W: Write>(writer: W, image: &RgbaImage) -> image::ImageResult<()> {
    let encoder = PngEncoder::new(writer);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )
}
