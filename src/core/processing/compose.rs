//! Composites an RGBA crop centered over an opaque single-color canvas,
//! producing the final RGB buffer.

use tracing::info;

/// Pastes `src` (RGBA8, `src_w`x`src_h`) centered onto a `canvas_w`x`canvas_h`
/// canvas filled with `background`, alpha-blending each pixel. The source must
/// fit inside the canvas.
pub fn composite_centered(
    src: &[u8],
    src_w: u32,
    src_h: u32,
    canvas_w: u32,
    canvas_h: u32,
    background: [u8; 3],
) -> Vec<u8> {
    debug_assert!(src_w <= canvas_w && src_h <= canvas_h);

    let off_x = ((canvas_w - src_w) / 2) as usize;
    let off_y = ((canvas_h - src_h) / 2) as usize;

    info!(
        "Compositing {}x{} onto {}x{} at offset ({}, {})",
        src_w, src_h, canvas_w, canvas_h, off_x, off_y
    );

    let cw = canvas_w as usize;
    let mut canvas = Vec::with_capacity(cw * canvas_h as usize * 3);
    for _ in 0..cw * canvas_h as usize {
        canvas.extend_from_slice(&background);
    }

    for y in 0..src_h as usize {
        for x in 0..src_w as usize {
            let s = (y * src_w as usize + x) * 4;
            let a = src[s + 3] as u32;
            if a == 0 {
                continue;
            }
            let d = ((y + off_y) * cw + (x + off_x)) * 3;
            for c in 0..3 {
                let fg = src[s + c] as u32;
                let bg = canvas[d + c] as u32;
                canvas[d + c] = ((fg * a + bg * (255 - a) + 127) / 255) as u8;
            }
        }
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: [u8; 3] = [128, 128, 128];

    #[test]
    fn canvas_has_exact_target_dimensions() {
        let src = vec![255u8; 2 * 2 * 4];
        let out = composite_centered(&src, 2, 2, 10, 6, GRAY);
        assert_eq!(out.len(), 10 * 6 * 3);
    }

    #[test]
    fn background_fills_uncovered_area() {
        let src = vec![0u8; 2 * 2 * 4]; // fully transparent source
        let out = composite_centered(&src, 2, 2, 4, 4, GRAY);
        assert!(out.chunks_exact(3).all(|p| p == GRAY));
    }

    #[test]
    fn opaque_source_lands_centered() {
        let src = vec![255u8; 2 * 2 * 4]; // white opaque 2x2
        let out = composite_centered(&src, 2, 2, 6, 6, GRAY);
        let px = |x: usize, y: usize| &out[(y * 6 + x) * 3..(y * 6 + x) * 3 + 3];
        assert_eq!(px(2, 2), &[255, 255, 255]);
        assert_eq!(px(3, 3), &[255, 255, 255]);
        assert_eq!(px(0, 0), &GRAY);
        assert_eq!(px(5, 5), &GRAY);
    }

    #[test]
    fn half_transparent_pixel_blends_toward_background() {
        let mut src = vec![0u8; 4];
        src.copy_from_slice(&[255, 255, 255, 128]);
        let out = composite_centered(&src, 1, 1, 1, 1, [0, 0, 0]);
        // 255 * 128/255 rounded
        assert_eq!(out[0], 128);
    }
}
