use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use jpeg_encoder::{ColorType, Encoder};

use crate::error::{Error, Result};

pub fn write_rgb_jpeg(
    output: &Path,
    width: u32,
    height: u32,
    rgb_data: &[u8],
    quality: u8,
) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);
    encoder
        .encode(rgb_data, width as u16, height as u16, ColorType::Rgb)
        .map_err(Error::external)?;
    Ok(())
}
