use std::path::Path;

use crate::error::{Error, Result};

/// Writes a raw RGBA8 buffer as a PNG with alpha.
pub fn write_rgba_png(output: &Path, width: u32, height: u32, data: &[u8]) -> Result<()> {
    let img: image::RgbaImage = image::ImageBuffer::from_raw(width, height, data.to_vec())
        .ok_or_else(|| Error::Processing("pixel buffer size mismatch".into()))?;
    img.save(output)?;
    Ok(())
}

/// Writes a raw RGB8 buffer as an opaque PNG.
pub fn write_rgb_png(output: &Path, width: u32, height: u32, data: &[u8]) -> Result<()> {
    let img: image::RgbImage = image::ImageBuffer::from_raw(width, height, data.to_vec())
        .ok_or_else(|| Error::Processing("pixel buffer size mismatch".into()))?;
    img.save(output)?;
    Ok(())
}
