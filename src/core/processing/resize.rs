//! Aspect-preserving fit computation and Lanczos3 resizing of RGBA buffers.

use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::info;

use crate::error::{Error, Result};
use crate::types::ScalePolicy;

/// Computes the dimensions a crop is resized to so it fits inside the target
/// without overflowing either axis. Under [`ScalePolicy::ShrinkOnly`] the
/// scale is capped at 1.0, so small content is never blown up.
pub fn fit_dimensions(
    crop_w: u32,
    crop_h: u32,
    target_w: u32,
    target_h: u32,
    policy: ScalePolicy,
) -> (u32, u32) {
    let mut scale = (target_w as f64 / crop_w as f64).min(target_h as f64 / crop_h as f64);
    if policy == ScalePolicy::ShrinkOnly {
        scale = scale.min(1.0);
    }

    let new_w = ((crop_w as f64 * scale) as u32).max(1);
    let new_h = ((crop_h as f64 * scale) as u32).max(1);
    (new_w, new_h)
}

/// Resizes an RGBA8 buffer with Lanczos3 convolution. A same-size request is
/// a plain copy.
pub fn resize_rgba(
    data: &[u8],
    src_w: u32,
    src_h: u32,
    dst_w: u32,
    dst_h: u32,
) -> Result<Vec<u8>> {
    if (src_w, src_h) == (dst_w, dst_h) {
        return Ok(data.to_vec());
    }

    info!("Resizing {}x{} -> {}x{}", src_w, src_h, dst_w, dst_h);

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(src_w, src_h, data.to_vec(), PixelType::U8x4)
        .map_err(Error::external)?;
    let mut dst_image = Image::new(dst_w, dst_h, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    Ok(dst_image.into_vec())
}
