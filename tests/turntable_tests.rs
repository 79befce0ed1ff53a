//! End-to-end tests for the turntable render stage.

use glam::Vec3;
use packshot::{Mesh, RenderParams, render_turntable_mesh, trim_directory};

fn cube_mesh() -> Mesh {
    // 10-unit cube triangulated by hand; large enough that the staged model
    // sits fully inside the frame with a margin
    let p = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
    let corners = [
        p(-5.0, -5.0, -5.0),
        p(5.0, -5.0, -5.0),
        p(5.0, 5.0, -5.0),
        p(-5.0, 5.0, -5.0),
        p(-5.0, -5.0, 5.0),
        p(5.0, -5.0, 5.0),
        p(5.0, 5.0, 5.0),
        p(-5.0, 5.0, 5.0),
    ];
    let quads = [
        [0, 1, 2, 3],
        [4, 5, 6, 7],
        [0, 1, 5, 4],
        [2, 3, 7, 6],
        [0, 3, 7, 4],
        [1, 2, 6, 5],
    ];
    let mut triangles = Vec::new();
    for q in quads {
        triangles.push([corners[q[0]], corners[q[1]], corners[q[2]]]);
        triangles.push([corners[q[0]], corners[q[2]], corners[q[3]]]);
    }
    Mesh { triangles }
}

#[test]
fn turntable_produces_36_frames_with_expected_names() {
    let dir = tempfile::tempdir().unwrap();
    let params = RenderParams {
        resolution: 32,
        force: false,
    };

    let report = render_turntable_mesh(&cube_mesh(), "cube", dir.path(), &params).unwrap();
    assert_eq!(report.rendered, 36);
    assert_eq!(report.skipped, 0);

    for angle in (0..360).step_by(10) {
        let frame = dir.path().join(format!("cube_{angle:03}.png"));
        assert!(frame.exists(), "missing frame {frame:?}");
        let img = image::open(&frame).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (32, 32));
    }
}

#[test]
fn rerun_skips_existing_frames() {
    let dir = tempfile::tempdir().unwrap();
    let params = RenderParams {
        resolution: 16,
        force: false,
    };

    render_turntable_mesh(&cube_mesh(), "cube", dir.path(), &params).unwrap();
    let report = render_turntable_mesh(&cube_mesh(), "cube", dir.path(), &params).unwrap();
    assert_eq!(report.rendered, 0);
    assert_eq!(report.skipped, 36);
}

#[test]
fn frames_have_transparent_background_and_visible_model() {
    let dir = tempfile::tempdir().unwrap();
    let params = RenderParams {
        resolution: 64,
        force: false,
    };

    render_turntable_mesh(&cube_mesh(), "cube", dir.path(), &params).unwrap();
    let img = image::open(dir.path().join("cube_000.png"))
        .unwrap()
        .to_rgba8();

    assert_eq!(img.get_pixel(0, 0).0[3], 0);
    assert_eq!(img.get_pixel(32, 32).0[3], 255);
}

#[test]
fn trim_removes_dark_banner_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shot.png");

    // light image with a 30-row dark banner at the bottom
    let img = image::RgbImage::from_fn(64, 100, |_, y| {
        if y >= 70 {
            image::Rgb([30, 30, 30])
        } else {
            image::Rgb([200, 200, 200])
        }
    });
    img.save(&path).unwrap();

    let report = trim_directory(dir.path()).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 0);

    let cropped = image::open(dir.path().join("crop_shot.png"))
        .unwrap()
        .to_rgb8();
    assert_eq!(cropped.dimensions(), (64, 70));
    assert!(path.exists());

    // rerun retrims the source but never touches crop_ outputs
    let report = trim_directory(dir.path()).unwrap();
    assert_eq!(report.processed, 1);
    assert!(!dir.path().join("crop_crop_shot.png").exists());
}

#[test]
fn trim_skips_image_that_is_banner_dark_everywhere() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shot.png");

    let img = image::RgbImage::from_pixel(64, 100, image::Rgb([30, 30, 30]));
    img.save(&path).unwrap();

    // nothing above the strip to keep, so the file is left alone
    let report = trim_directory(dir.path()).unwrap();
    assert_eq!(report.processed, 0);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.errors, 0);
    assert!(!dir.path().join("crop_shot.png").exists());
}
