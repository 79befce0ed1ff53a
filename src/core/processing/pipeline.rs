//! The alpha-crop/resize/composite pipeline as a pure transform:
//! (RGBA raster, target dims, background) -> RGB raster.

use tracing::info;

use crate::core::params::ProcessParams;
use crate::core::processing::alpha::{ALPHA_THRESHOLD, alpha_bbox, crop_rgba};
use crate::core::processing::compose::composite_centered;
use crate::core::processing::resize::{fit_dimensions, resize_rgba};
use crate::error::{Error, Result};

/// Runs the full processing pipeline on a raw RGBA8 buffer and returns the
/// final opaque RGB8 buffer at exactly `params.width` x `params.height`.
///
/// Fails with [`Error::EmptyAlphaRegion`] when no pixel exceeds the alpha
/// threshold, and with [`Error::InvalidDimensions`] for a zero target.
pub fn process_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    params: &ProcessParams,
) -> Result<Vec<u8>> {
    if params.width == 0 || params.height == 0 {
        return Err(Error::InvalidDimensions {
            width: params.width,
            height: params.height,
        });
    }

    let bbox =
        alpha_bbox(data, width, height, ALPHA_THRESHOLD).ok_or(Error::EmptyAlphaRegion)?;
    let (crop, crop_w, crop_h) = crop_rgba(data, width, bbox);

    info!(
        "Alpha crop: {}x{} -> {}x{} at ({}, {})",
        width, height, crop_w, crop_h, bbox.0, bbox.1
    );

    let (fit_w, fit_h) = fit_dimensions(
        crop_w,
        crop_h,
        params.width,
        params.height,
        params.scale_policy,
    );
    let resized = resize_rgba(&crop, crop_w, crop_h, fit_w, fit_h)?;

    Ok(composite_centered(
        &resized,
        fit_w,
        fit_h,
        params.width,
        params.height,
        params.background.rgb(),
    ))
}
