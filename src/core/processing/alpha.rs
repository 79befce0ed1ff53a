//! Alpha-channel bounding box and crop over raw RGBA8 buffers.

/// Pixels with alpha strictly above this value count as content.
pub const ALPHA_THRESHOLD: u8 = 0;

/// Minimal bounding box `(x0, y0, x1, y1)` (exclusive max) of pixels whose
/// alpha exceeds the threshold. `None` when the image is fully transparent.
pub fn alpha_bbox(
    data: &[u8],
    width: u32,
    height: u32,
    threshold: u8,
) -> Option<(u32, u32, u32, u32)> {
    let w = width as usize;
    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for y in 0..height {
        let row = &data[(y as usize * w * 4)..((y as usize + 1) * w * 4)];
        for x in 0..width {
            if row[x as usize * 4 + 3] > threshold {
                found = true;
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }

    if found {
        Some((min_x, min_y, max_x + 1, max_y + 1))
    } else {
        None
    }
}

/// Crops an RGBA8 buffer to the given box. Returns the cropped buffer and its
/// dimensions.
pub fn crop_rgba(
    data: &[u8],
    width: u32,
    bbox: (u32, u32, u32, u32),
) -> (Vec<u8>, u32, u32) {
    let (x0, y0, x1, y1) = bbox;
    let crop_w = x1 - x0;
    let crop_h = y1 - y0;
    let mut out = Vec::with_capacity((crop_w * crop_h * 4) as usize);

    for y in y0..y1 {
        let start = ((y * width + x0) * 4) as usize;
        let end = start + (crop_w * 4) as usize;
        out.extend_from_slice(&data[start..end]);
    }

    (out, crop_w, crop_h)
}
