//! Axis-aligned bounding box over mesh vertices, plus the unit-fit scale
//! heuristic used to normalize imported geometry.

use glam::Vec3;

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Builds the tight bounding box of a point set. Returns `None` for an
    /// empty set.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Aabb { min, max })
    }

    /// Midpoint of min/max.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Per-axis extents.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Largest per-axis extent.
    pub fn max_dim(&self) -> f32 {
        self.size().max_element()
    }
}

/// Scale factor that normalizes a model toward unit size: small models are
/// grown to roughly 1.2 units, large ones shrunk by at most 10%.
pub fn fit_scale(max_dim: f32) -> f32 {
    if max_dim <= 0.0 {
        return 1.0;
    }
    (1.2 / max_dim).max(0.9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_of_two_points() {
        let aabb = Aabb::from_points([Vec3::new(-1.0, 2.0, 0.0), Vec3::new(3.0, -2.0, 5.0)])
            .unwrap();
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(3.0, 2.0, 5.0));
        assert_eq!(aabb.center(), Vec3::new(1.0, 0.0, 2.5));
        assert_eq!(aabb.max_dim(), 5.0);
    }

    #[test]
    fn empty_point_set_has_no_bbox() {
        assert!(Aabb::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn fit_scale_grows_small_models() {
        assert!((fit_scale(0.1) - 12.0).abs() < 1e-6);
    }

    #[test]
    fn fit_scale_floors_large_models() {
        assert!((fit_scale(100.0) - 0.9).abs() < 1e-6);
    }
}
