//! Raster readers built on the `image` crate.

use std::path::Path;

use crate::error::{Error, Result};

/// Reads an image into a raw RGBA8 buffer. Sources without an alpha channel
/// are rejected: an implicit all-opaque alpha would defeat alpha-based
/// cropping.
pub fn read_rgba(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::open(path)?;
    if !img.color().has_alpha() {
        return Err(Error::Processing(format!(
            "input image has no alpha channel: {}",
            path.display()
        )));
    }
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok((rgba.into_raw(), width, height))
}

/// Reads an image into a raw RGB8 buffer, dropping any alpha channel.
pub fn read_rgb(path: &Path) -> Result<(Vec<u8>, u32, u32)> {
    let img = image::open(path)?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width, height))
}
