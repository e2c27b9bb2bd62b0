// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: wasm bindings

use wasm_bindgen::prelude::*;

use crate::{
    geometry::{generate_symbol, tessellate_path, MeshBuffers},
    style::{LineCaps, PointSymbol},
    types::Vec3,
};

/// Mesh returned to JavaScript as flat typed arrays.
#[wasm_bindgen]
pub struct MeshData {
    mesh: MeshBuffers,
}

#[wasm_bindgen]
impl MeshData {
    /// `xyz` triples.
    pub fn positions(&self) -> Vec<f32> {
        self.mesh.positions_flat()
    }

    pub fn normals(&self) -> Vec<f32> {
        self.mesh.normals_flat()
    }

    pub fn uvs(&self) -> Vec<f32> {
        self.mesh.uvs_flat()
    }

    /// Counter-clockwise index triples.
    pub fn indices(&self) -> Vec<u32> {
        self.mesh.indices.clone()
    }

    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }
}

/// Tessellate a path given as flat `x, z` pairs.
#[wasm_bindgen(js_name = tessellatePath)]
pub fn tessellate_path_js(
    coords: &[f32],
    closed: bool,
    width: f32,
    caps: &str,
) -> Result<MeshData, JsValue> {
    let caps: LineCaps = caps.parse().map_err(|e: String| JsValue::from_str(&e))?;
    let anchors: Vec<Vec3> = coords
        .chunks_exact(2)
        .map(|p| Vec3::planar(p[0], p[1]))
        .collect();
    if anchors.iter().any(|a| !a.is_finite()) || !width.is_finite() {
        return Err(JsValue::from_str("coordinates and width must be finite"));
    }
    Ok(MeshData {
        mesh: tessellate_path(&anchors, closed, width, caps),
    })
}

/// Generate a point symbol (`square`, `circle` or `triangle`).
#[wasm_bindgen(js_name = generateSymbol)]
pub fn generate_symbol_js(kind: &str, width: f32) -> Result<MeshData, JsValue> {
    let symbol: PointSymbol = kind.parse().map_err(|e: String| JsValue::from_str(&e))?;
    if !width.is_finite() {
        return Err(JsValue::from_str("width must be finite"));
    }
    Ok(MeshData {
        mesh: generate_symbol(symbol, width),
    })
}
