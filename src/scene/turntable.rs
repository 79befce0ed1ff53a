//! The turntable rotation sequence and frame file naming.

/// Number of frames in a full turntable revolution.
pub const STEPS: u32 = 36;
/// Angular spacing between frames, in degrees.
pub const STEP_DEGREES: u32 = 360 / STEPS;

/// The frame angles in render order: 0, 10, ..., 350.
pub fn angles() -> impl Iterator<Item = u32> {
    (0..STEPS).map(|i| i * STEP_DEGREES)
}

/// Frame file name for a model stem and turntable angle.
pub fn frame_name(stem: &str, angle: u32) -> String {
    format!("{stem}_{angle:03}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_has_36_members_at_10_degree_spacing() {
        let seq: Vec<u32> = angles().collect();
        assert_eq!(seq.len(), 36);
        assert_eq!(seq.first(), Some(&0));
        assert_eq!(seq.last(), Some(&350));
        for pair in seq.windows(2) {
            assert_eq!(pair[1] - pair[0], 10);
        }
    }

    #[test]
    fn frame_names_are_zero_padded() {
        assert_eq!(frame_name("abc", 0), "abc_000.png");
        assert_eq!(frame_name("abc", 90), "abc_090.png");
        assert_eq!(frame_name("abc", 350), "abc_350.png");
    }
}
