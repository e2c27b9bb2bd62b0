// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: mesh output buffers

use crate::types::{Vec2, Vec3};

/// Triangle mesh produced by the generators.
///
/// Positions, normals and uvs are parallel arrays indexed by vertex index.
/// `indices` holds triples, each one triangle wound counter-clockwise when
/// seen from [`crate::types::UP`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions
    pub vertices: Vec<Vec3>,
    /// Per-vertex normals
    pub normals: Vec<Vec3>,
    /// Per-vertex texture coordinates
    pub uvs: Vec<Vec2>,
    /// Index buffer (triples)
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all contents while keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.normals.clear();
        self.uvs.clear();
        self.indices.clear();
    }

    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self, v: Vec3) -> u32 {
        self.vertices.push(v);
        (self.vertices.len() - 1) as u32
    }

    /// Append several vertices in order.
    pub fn add_vertices<I: IntoIterator<Item = Vec3>>(&mut self, vs: I) {
        self.vertices.extend(vs);
    }

    pub fn add_tri(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Position of vertex `idx`.
    pub fn vertex(&self, idx: u32) -> Vec3 {
        self.vertices[idx as usize]
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }

    /// Give every vertex that has none yet the same normal and uv.
    pub fn fill_attributes(&mut self, normal: Vec3, uv: Vec2) {
        let n = self.vertices.len();
        self.normals.resize(n, normal);
        self.uvs.resize(n, uv);
    }

    /// Iterate over index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Check the parallel-array and index-range invariants.
    pub fn is_consistent(&self) -> bool {
        let n = self.vertices.len();
        self.normals.len() == n
            && self.uvs.len() == n
            && self.indices.len() % 3 == 0
            && self.indices.iter().all(|&i| (i as usize) < n)
    }

    /// Twice the signed area of triangle `tri` projected onto the plane.
    /// Positive for counter-clockwise winding seen from above.
    pub fn signed_area2(&self, tri: [u32; 3]) -> f32 {
        let a = self.vertex(tri[0]);
        let ab = self.vertex(tri[1]) - a;
        let ac = self.vertex(tri[2]) - a;
        ab.cross(ac).y
    }

    /// Flat `xyz` position stream.
    pub fn positions_flat(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Flat `xyz` normal stream.
    pub fn normals_flat(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Flat `uv` stream.
    pub fn uvs_flat(&self) -> Vec<f32> {
        self.uvs.iter().flat_map(|v| [v.x, v.y]).collect()
    }
}
