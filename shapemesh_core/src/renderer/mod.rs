// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: rendering collaborators
//!
//! Shapes hand every refreshed mesh to a [`MeshSink`]. GPU upload and
//! material binding live behind this trait, outside the crate.

pub mod cpu;
pub use cpu::*;

use crate::geometry::MeshBuffers;
use crate::types::Color;

/// Receiver of finished meshes.
pub trait MeshSink {
    /// Take ownership of a freshly generated mesh, replacing whatever the
    /// sink held from the previous refresh. `color` is the shape's tint.
    fn upload(&mut self, mesh: MeshBuffers, color: Color);
}

/// Sink that keeps the most recent mesh, for hosts that pull geometry.
#[derive(Debug, Default, Clone)]
pub struct RetainedMesh {
    /// Last uploaded mesh
    pub mesh: MeshBuffers,
    /// Tint of the last upload
    pub color: Color,
    /// Number of uploads received
    pub uploads: u32,
}

impl MeshSink for RetainedMesh {
    fn upload(&mut self, mesh: MeshBuffers, color: Color) {
        self.mesh = mesh;
        self.color = color;
        self.uploads += 1;
    }
}
