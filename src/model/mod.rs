//! Mesh loading layer. Imports GLB/glTF assets into a flat list of
//! world-space triangles; materials, UVs, and textures are discarded because
//! the render stage applies a uniform white-matte override.
pub mod gltf;

use std::path::Path;

use glam::Vec3;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Unsupported model format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid model data: {0}")]
    InvalidData(String),

    #[error("Model contains no geometry")]
    NoGeometry,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A loaded mesh: world-space triangles ready for rasterization.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub triangles: Vec<[Vec3; 3]>,
}

impl Mesh {
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Iterator over every vertex of every triangle.
    pub fn vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.triangles.iter().flat_map(|t| t.iter().copied())
    }
}

/// File extensions the mesh loader accepts (lowercase, without dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["glb", "gltf"];

/// Returns true when the path carries a supported mesh extension.
pub fn is_supported_model(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Loads a mesh from a file path, dispatching on the extension.
pub fn load_mesh(path: &Path) -> Result<Mesh, ModelError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "glb" | "gltf" => gltf::load_from_path(path),
        other => Err(ModelError::UnsupportedFormat(other.to_string())),
    }
}
