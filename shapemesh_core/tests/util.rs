#![allow(dead_code)]
use shapemesh_core::loader::json;
use shapemesh_core::{MeshBuffers, Scene};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

pub fn data_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

pub fn load_scene(name: &str) -> Scene {
    let data = std::fs::read(data_path(name)).unwrap();
    json::from_slice(&data).unwrap()
}

/// SHA-256 over every buffer of `mesh`, little endian.
pub fn mesh_hash(mesh: &MeshBuffers) -> String {
    let mut hasher = Sha256::new();
    for f in mesh
        .positions_flat()
        .into_iter()
        .chain(mesh.normals_flat())
        .chain(mesh.uvs_flat())
    {
        hasher.update(f.to_le_bytes());
    }
    for i in &mesh.indices {
        hasher.update(i.to_le_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Number of triangles referencing a vertex at `at`.
pub fn triangles_touching(mesh: &MeshBuffers, at: shapemesh_core::types::Vec3) -> usize {
    mesh.triangles()
        .filter(|tri| tri.iter().any(|&i| (mesh.vertex(i) - at).length() < 1e-5))
        .count()
}
