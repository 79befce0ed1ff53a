//! GLB/glTF mesh import. Walks the default scene graph, applies node
//! transforms, and collects world-space triangles from every triangle
//! primitive. External buffers and images are resolved relative to the file.

use std::path::Path;

use glam::{Mat4, Vec3};

use super::{Mesh, ModelError};

/// Loads a mesh from a GLB or glTF file on disk.
pub fn load_from_path(path: &Path) -> Result<Mesh, ModelError> {
    let (document, buffers, _images) = gltf::import(path)
        .map_err(|e| ModelError::InvalidData(format!("glTF import failed: {e}")))?;
    collect_triangles(document, buffers)
}

/// Loads a mesh from raw GLB/glTF bytes (embedded resources only).
pub fn load_from_bytes(data: &[u8]) -> Result<Mesh, ModelError> {
    let (document, buffers, _images) = gltf::import_slice(data)
        .map_err(|e| ModelError::InvalidData(format!("glTF import failed: {e}")))?;
    collect_triangles(document, buffers)
}

fn collect_triangles(
    document: gltf::Document,
    buffers: Vec<gltf::buffer::Data>,
) -> Result<Mesh, ModelError> {
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(ModelError::NoGeometry)?;

    let mut triangles = Vec::new();
    for node in scene.nodes() {
        visit_node(&node, &buffers, Mat4::IDENTITY, &mut triangles);
    }

    if triangles.is_empty() {
        return Err(ModelError::NoGeometry);
    }

    Ok(Mesh { triangles })
}

fn visit_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent: Mat4,
    triangles: &mut Vec<[Vec3; 3]>,
) {
    let local = Mat4::from_cols_array_2d(&node.transform().matrix());
    let world = parent * local;

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }

            let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| &*d.0));

            let positions: Vec<Vec3> = match reader.read_positions() {
                Some(iter) => iter.map(Vec3::from_array).collect(),
                None => continue,
            };

            let indices: Vec<u32> = match reader.read_indices() {
                Some(iter) => iter.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };

            for tri in indices.chunks_exact(3) {
                let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
                if i0 >= positions.len() || i1 >= positions.len() || i2 >= positions.len() {
                    continue;
                }
                triangles.push([
                    world.transform_point3(positions[i0]),
                    world.transform_point3(positions[i1]),
                    world.transform_point3(positions[i2]),
                ]);
            }
        }
    }

    for child in node.children() {
        visit_node(&child, buffers, world, triangles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_bytes() {
        assert!(load_from_bytes(b"not a model").is_err());
    }

    #[test]
    fn rejects_empty_bytes() {
        assert!(load_from_bytes(b"").is_err());
    }
}
