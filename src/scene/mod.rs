//! Scene staging: bounding-box math, camera and light rig derivation, and the
//! turntable rotation sequence. A staged [`Scene`] is what the rasterizer in
//! `crate::render` consumes, one frame per turntable angle.
pub mod bounds;
pub mod rig;
pub mod turntable;

use glam::Vec3;

use crate::error::{Error, Result};
use crate::model::Mesh;

use bounds::Aabb;
use rig::{CameraRig, LightRig};

/// A mesh staged for turntable rendering: geometry re-centered on its
/// bounding-box centroid and scaled toward unit size, with the camera and
/// lights already placed.
#[derive(Debug, Clone)]
pub struct Scene {
    pub triangles: Vec<[Vec3; 3]>,
    pub camera: CameraRig,
    pub lights: LightRig,
}

impl Scene {
    /// Stages a mesh: compute bounds, normalize geometry, place the rig.
    ///
    /// The camera distance is derived from the bounding box *before*
    /// normalization, then the geometry is re-centered and scaled by the
    /// unit-fit factor.
    pub fn stage(mesh: &Mesh) -> Result<Self> {
        let aabb = Aabb::from_points(mesh.vertices())
            .ok_or_else(|| Error::Render("mesh has no vertices".into()))?;

        let center = aabb.center();
        let max_dim = aabb.max_dim();
        let scale = bounds::fit_scale(max_dim);

        let triangles = mesh
            .triangles
            .iter()
            .map(|t| t.map(|v| (v - center) * scale))
            .collect();

        Ok(Scene {
            triangles,
            camera: CameraRig::frame(max_dim),
            lights: LightRig::studio(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> Mesh {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 0.0, 0.0);
        let c = Vec3::new(1.0, 0.0, 1.0);
        let d = Vec3::new(0.0, 0.0, 1.0);
        Mesh {
            triangles: vec![[a, b, c], [a, c, d]],
        }
    }

    #[test]
    fn staging_recenters_on_centroid() {
        let scene = Scene::stage(&unit_quad()).unwrap();
        let aabb = Aabb::from_points(scene.triangles.iter().flat_map(|t| t.iter().copied()))
            .unwrap();
        assert!(aabb.center().length() < 1e-6);
    }

    #[test]
    fn staging_rejects_empty_mesh() {
        assert!(Scene::stage(&Mesh::default()).is_err());
    }
}
