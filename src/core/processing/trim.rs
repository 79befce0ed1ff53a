//! Detects and removes an opaque dark banner strip at the bottom of an RGB
//! image. Rows are scanned bottom-up; a row counts as banner when at least
//! 70% of its pixels are near-grayscale dark.

/// Maximum per-channel spread for a pixel to count as grayscale.
pub const CHANNEL_TOLERANCE: u8 = 25;
/// Maximum channel value for a pixel to count as dark.
pub const DARK_MAX: u8 = 120;
/// Fraction of dark pixels for a row to count as banner.
pub const ROW_DARK_RATIO: f64 = 0.7;
/// Strips at or below this height are ignored.
pub const MIN_BANNER_PX: u32 = 20;

fn is_dark_pixel(r: u8, g: u8, b: u8) -> bool {
    let spread_ok = r.abs_diff(g) <= CHANNEL_TOLERANCE
        && r.abs_diff(b) <= CHANNEL_TOLERANCE
        && g.abs_diff(b) <= CHANNEL_TOLERANCE;
    spread_ok && r <= DARK_MAX && g <= DARK_MAX && b <= DARK_MAX
}

/// Returns the height the image should be cropped to, scanning banner rows
/// from the bottom. Equal to `height` when no banner row is found, or when
/// every row is banner-dark (an image with no content above the strip is
/// left alone rather than cropped to nothing).
pub fn banner_crop_height(data: &[u8], width: u32, height: u32) -> u32 {
    let w = width as usize;
    for y in (0..height).rev() {
        let row = &data[(y as usize * w * 3)..((y as usize + 1) * w * 3)];
        let dark = row
            .chunks_exact(3)
            .filter(|p| is_dark_pixel(p[0], p[1], p[2]))
            .count();
        if (dark as f64) / (w as f64) < ROW_DARK_RATIO {
            return y + 1;
        }
    }
    height
}

/// Crops an RGB8 buffer to the top `crop_h` rows.
pub fn crop_rows(data: &[u8], width: u32, crop_h: u32) -> Vec<u8> {
    data[..(width * crop_h * 3) as usize].to_vec()
}

/// Whether a detected crop height is worth acting on: there must be a strip
/// and it must exceed [`MIN_BANNER_PX`].
pub fn is_significant(crop_h: u32, height: u32) -> bool {
    crop_h < height && height - crop_h > MIN_BANNER_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_with_banner(width: u32, height: u32, banner_rows: u32) -> Vec<u8> {
        let mut data = vec![200u8; (width * height * 3) as usize];
        let start = ((height - banner_rows) * width * 3) as usize;
        for px in data[start..].chunks_exact_mut(3) {
            px.copy_from_slice(&[30, 30, 30]);
        }
        data
    }

    #[test]
    fn detects_banner_height() {
        let img = image_with_banner(64, 100, 25);
        assert_eq!(banner_crop_height(&img, 64, 100), 75);
    }

    #[test]
    fn clean_image_is_untouched() {
        let img = vec![200u8; 64 * 100 * 3];
        let h = banner_crop_height(&img, 64, 100);
        assert_eq!(h, 100);
        assert!(!is_significant(h, 100));
    }

    #[test]
    fn thin_strip_is_not_significant() {
        let img = image_with_banner(64, 100, 10);
        let h = banner_crop_height(&img, 64, 100);
        assert_eq!(h, 90);
        assert!(!is_significant(h, 100));
    }

    #[test]
    fn fully_dark_image_is_untouched() {
        let img = image_with_banner(64, 100, 100);
        let h = banner_crop_height(&img, 64, 100);
        assert_eq!(h, 100);
        assert!(!is_significant(h, 100));
    }

    #[test]
    fn colored_dark_rows_are_not_banner() {
        // dark but strongly tinted rows fail the grayscale spread check
        let mut img = vec![200u8; 32 * 40 * 3];
        let start = 30 * 32 * 3;
        for px in img[start..].chunks_exact_mut(3) {
            px.copy_from_slice(&[100, 30, 30]);
        }
        assert_eq!(banner_crop_height(&img, 32, 40), 40);
    }

    #[test]
    fn crop_rows_keeps_top() {
        let img = image_with_banner(8, 10, 4);
        let cropped = crop_rows(&img, 8, 6);
        assert_eq!(cropped.len(), 8 * 6 * 3);
        assert!(cropped.chunks_exact(3).all(|p| p == [200, 200, 200]));
    }
}
