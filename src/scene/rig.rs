//! Fixed camera and light rigs. The camera sits on the -Y axis (Z-up) at a
//! distance derived from the model's bounding box; the lights are a
//! model-independent three-point studio setup.

use glam::Vec3;

/// Minimum camera distance regardless of model size.
pub const MIN_CAMERA_DISTANCE: f32 = 2.0;
/// Camera distance as a multiple of the model's largest extent.
pub const CAMERA_DISTANCE_FACTOR: f32 = 1.8;
/// Focal length of the 35mm-equivalent lens, in millimeters.
pub const LENS_MM: f32 = 50.0;
/// Fixed exposure multiplier applied during shading.
pub const EXPOSURE: f32 = 1.5;

/// Camera distance heuristic: always at least [`MIN_CAMERA_DISTANCE`], so the
/// model fits in frame regardless of scale.
pub fn camera_distance(max_dim: f32) -> f32 {
    MIN_CAMERA_DISTANCE.max(max_dim * CAMERA_DISTANCE_FACTOR)
}

/// Perspective camera aimed at the staged model's origin.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
}

impl CameraRig {
    /// Places the camera on the -Y axis at the heuristic distance for a model
    /// with the given (pre-normalization) largest extent.
    pub fn frame(max_dim: f32) -> Self {
        // 50mm lens on a 36mm sensor
        let fov_y = 2.0 * (18.0 / LENS_MM).atan();
        CameraRig {
            eye: Vec3::new(0.0, -camera_distance(max_dim), 0.0),
            target: Vec3::ZERO,
            up: Vec3::Z,
            fov_y,
        }
    }
}

/// A single directional light with a diffuse weight.
#[derive(Debug, Clone, Copy)]
pub struct Light {
    /// Direction from the model toward the light, normalized.
    pub dir: Vec3,
    pub weight: f32,
}

/// Three-point studio rig: key, fill, and rim, plus an ambient floor.
#[derive(Debug, Clone, Copy)]
pub struct LightRig {
    pub key: Light,
    pub fill: Light,
    pub rim: Light,
    pub ambient: f32,
}

impl LightRig {
    /// The fixed rig: key left-front, fill right-front, rim above-front.
    pub fn studio() -> Self {
        LightRig {
            key: Light {
                dir: Vec3::new(-5.0, -5.0, 3.0).normalize(),
                weight: 0.45,
            },
            fill: Light {
                dir: Vec3::new(5.0, -5.0, 3.0).normalize(),
                weight: 0.25,
            },
            rim: Light {
                dir: Vec3::new(0.0, -5.0, 6.0).normalize(),
                weight: 0.20,
            },
            ambient: 0.15,
        }
    }

    /// Lambertian shade for a surface normal, exposure applied, clamped to 1.
    pub fn shade(&self, normal: Vec3) -> f32 {
        let diffuse = normal.dot(self.key.dir).abs() * self.key.weight
            + normal.dot(self.fill.dir).abs() * self.fill.weight
            + normal.dot(self.rim.dir).abs() * self.rim.weight;
        ((self.ambient + diffuse) * EXPOSURE).min(1.0)
    }
}
