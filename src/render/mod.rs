//! CPU rasterizer for turntable frames. Takes a staged [`Scene`], rotates it
//! to a turntable angle, and rasterizes it with a perspective camera, z-buffer,
//! and flat white-matte shading over a fully transparent background.
//!
//! No GPU and no host engine are required; frames render entirely on the CPU.

use glam::{Mat4, Quat, Vec3, Vec4};

use crate::error::{Error, Result};
use crate::scene::Scene;

/// One rendered RGBA frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// Row-major RGBA8; background pixels have alpha 0.
    pub data: Vec<u8>,
}

/// Rasterizes one turntable frame at the given angle (degrees about +Z).
///
/// The rotation is negated so the turntable spins the same way the original
/// rig did.
pub fn render_frame(scene: &Scene, angle_deg: u32, resolution: u32) -> Result<Frame> {
    if resolution == 0 {
        return Err(Error::Render("frame resolution must be nonzero".into()));
    }

    let width = resolution;
    let height = resolution;
    let w = width as usize;
    let h = height as usize;

    let rot = Quat::from_rotation_z(-(angle_deg as f32).to_radians());
    let spin = Mat4::from_quat(rot);
    let cam = &scene.camera;
    let view = Mat4::look_at_rh(cam.eye, cam.target, cam.up);
    let aspect = width as f32 / height as f32;
    let dist = cam.eye.distance(cam.target);
    let proj = Mat4::perspective_rh_gl(cam.fov_y, aspect, dist * 0.01, dist * 100.0);
    let mvp = proj * view * spin;

    let mut color_buf = vec![0.0_f32; w * h];
    let mut mask = vec![false; w * h];
    let mut depth_buf = vec![f32::INFINITY; w * h];

    for tri in &scene.triangles {
        let mut screen = [Vec3::ZERO; 3];
        let mut visible = true;

        for i in 0..3 {
            let clip: Vec4 = mvp * tri[i].extend(1.0);
            if clip.w <= 0.0 {
                visible = false;
                break;
            }
            let inv_w = 1.0 / clip.w;
            screen[i] = Vec3::new(
                (clip.x * inv_w * 0.5 + 0.5) * width as f32,
                (0.5 - clip.y * inv_w * 0.5) * height as f32,
                clip.z * inv_w,
            );
        }

        if !visible {
            continue;
        }

        // Flat shading from the world-space face normal, rotated with the model
        let e1 = rot * (tri[1] - tri[0]);
        let e2 = rot * (tri[2] - tri[0]);
        let n = e1.cross(e2);
        if n.length_squared() < 1e-20 {
            continue;
        }
        let shade = scene.lights.shade(n.normalize());

        // Screen-space bounding box
        let min_x = screen[0].x.min(screen[1].x).min(screen[2].x).max(0.0) as usize;
        let max_x = (screen[0].x.max(screen[1].x).max(screen[2].x).ceil() as usize).min(w);
        let min_y = screen[0].y.min(screen[1].y).min(screen[2].y).max(0.0) as usize;
        let max_y = (screen[0].y.max(screen[1].y).max(screen[2].y).ceil() as usize).min(h);

        for y in min_y..max_y {
            for x in min_x..max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                let (u, v, wb) = barycentric(&screen, px, py);
                if u < 0.0 || v < 0.0 || wb < 0.0 {
                    continue;
                }

                let z = u * screen[0].z + v * screen[1].z + wb * screen[2].z;
                let idx = y * w + x;
                if z < depth_buf[idx] {
                    depth_buf[idx] = z;
                    color_buf[idx] = shade;
                    mask[idx] = true;
                }
            }
        }
    }

    // f32 luma -> white-matte RGBA; uncovered pixels stay transparent
    let mut data = vec![0u8; w * h * 4];
    for i in 0..w * h {
        if mask[i] {
            let v = (color_buf[i].clamp(0.0, 1.0) * 255.0) as u8;
            data[i * 4] = v;
            data[i * 4 + 1] = v;
            data[i * 4 + 2] = v;
            data[i * 4 + 3] = 255;
        }
    }

    Ok(Frame {
        width,
        height,
        data,
    })
}

fn barycentric(tri: &[Vec3; 3], px: f32, py: f32) -> (f32, f32, f32) {
    let v0x = tri[1].x - tri[0].x;
    let v0y = tri[1].y - tri[0].y;
    let v1x = tri[2].x - tri[0].x;
    let v1y = tri[2].y - tri[0].y;
    let v2x = px - tri[0].x;
    let v2y = py - tri[0].y;

    let d00 = v0x * v0x + v0y * v0y;
    let d01 = v0x * v1x + v0y * v1y;
    let d11 = v1x * v1x + v1y * v1y;
    let d20 = v2x * v0x + v2y * v0y;
    let d21 = v2x * v1x + v2y * v1y;

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < 1e-10 {
        return (-1.0, -1.0, -1.0);
    }

    let inv = 1.0 / denom;
    let v = (d11 * d20 - d01 * d21) * inv;
    let w = (d00 * d21 - d01 * d20) * inv;
    (1.0 - v - w, v, w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mesh;

    fn staged_quad() -> Scene {
        // Unit quad in the XZ plane, facing the camera on -Y
        let a = Vec3::new(-0.5, 0.0, -0.5);
        let b = Vec3::new(0.5, 0.0, -0.5);
        let c = Vec3::new(0.5, 0.0, 0.5);
        let d = Vec3::new(-0.5, 0.0, 0.5);
        let mesh = Mesh {
            triangles: vec![[a, b, c], [a, c, d]],
        };
        Scene::stage(&mesh).unwrap()
    }

    #[test]
    fn frame_has_requested_dimensions() {
        let frame = render_frame(&staged_quad(), 0, 64).unwrap();
        assert_eq!(frame.width, 64);
        assert_eq!(frame.height, 64);
        assert_eq!(frame.data.len(), 64 * 64 * 4);
    }

    #[test]
    fn background_is_transparent_and_model_is_opaque() {
        let frame = render_frame(&staged_quad(), 0, 64).unwrap();
        let alphas: Vec<u8> = frame.data.chunks_exact(4).map(|p| p[3]).collect();
        // corner pixel is background
        assert_eq!(alphas[0], 0);
        // the quad covers the frame center
        let center = (32 * 64 + 32) as usize;
        assert_eq!(alphas[center], 255);
        // covered pixels are grayscale white-matte
        let p = &frame.data[center * 4..center * 4 + 4];
        assert_eq!(p[0], p[1]);
        assert_eq!(p[1], p[2]);
        assert!(p[0] > 0);
    }

    #[test]
    fn edge_on_angle_leaves_thin_silhouette() {
        // rotated 90 degrees, the flat quad is seen edge-on
        let frame_front = render_frame(&staged_quad(), 0, 64).unwrap();
        let frame_side = render_frame(&staged_quad(), 90, 64).unwrap();
        let count = |f: &Frame| f.data.chunks_exact(4).filter(|p| p[3] > 0).count();
        assert!(count(&frame_side) < count(&frame_front));
    }

    #[test]
    fn zero_resolution_is_rejected() {
        assert!(render_frame(&staged_quad(), 0, 0).is_err());
    }
}
