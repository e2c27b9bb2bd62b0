// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: point symbol generation

use super::buffers::MeshBuffers;
use crate::config::PLACEHOLDER_UV;
use crate::style::{PointStyle, PointSymbol};
use crate::types::{Vec3, FORWARD, UP};
use log::debug;
use smallvec::SmallVec;

/// Corner positions of a symbol outline.
pub type Corners = SmallVec<[Vec3; 20]>;

/// Axis aligned square of side `width` centred on the origin.
pub fn square_corners(width: f32) -> Corners {
    let r = 0.5 * width;
    SmallVec::from_slice(&[
        Vec3::planar(-r, -r),
        Vec3::planar(-r, r),
        Vec3::planar(r, r),
        Vec3::planar(r, -r),
    ])
}

/// Regular polygon inscribed in a circle of diameter `width`, first corner
/// straight ahead.
pub fn polygon_corners(corners: u32, width: f32) -> Corners {
    let spoke = FORWARD * (0.5 * width);
    let step = 360.0 / corners as f32;
    (0..corners)
        .map(|i| spoke.rotate_about_up(i as f32 * step))
        .collect()
}

/// Outline of the symbol described by `style`.
pub fn symbol_corners(style: &PointStyle) -> Corners {
    match style.symbol {
        PointSymbol::Square => square_corners(style.width),
        PointSymbol::Circle | PointSymbol::Triangle => polygon_corners(style.corners(), style.width),
    }
}

/// Triangulate the symbol described by `style`.
pub fn generate(style: &PointStyle) -> MeshBuffers {
    let mut mesh = MeshBuffers::new();
    if style.width.is_nan() || style.width <= 0.0 {
        debug!("nothing to generate: width {}", style.width);
        return mesh;
    }

    mesh.add_vertices(symbol_corners(style));
    match style.symbol {
        PointSymbol::Square => {
            mesh.add_tri(0, 1, 2);
            mesh.add_tri(0, 2, 3);
        }
        PointSymbol::Circle | PointSymbol::Triangle => {
            for i in 1..style.corners() {
                mesh.add_tri(0, i - 1, i);
            }
        }
    }

    mesh.fill_attributes(UP, PLACEHOLDER_UV);
    debug!(
        "generated {:?} symbol: {} vertices, {} triangles",
        style.symbol,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

/// Triangulate a symbol with default settings.
pub fn generate_symbol(symbol: PointSymbol, width: f32) -> MeshBuffers {
    generate(&PointStyle::new(width, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_counts_and_extent() {
        let mesh = generate_symbol(PointSymbol::Square, 2.0);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.vertices.iter().all(|v| v.x.abs() == 1.0 && v.z.abs() == 1.0));
        assert!(mesh.triangles().all(|t| mesh.signed_area2(t) > 0.0));
    }

    #[test]
    fn triangle_counts() {
        let mesh = generate_symbol(PointSymbol::Triangle, 1.0);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.signed_area2([0, 1, 2]) > 0.0);
    }

    #[test]
    fn circle_uses_configured_corners() {
        let mut style = PointStyle::new(2.0, PointSymbol::Circle);
        style.circle_corners = 12;
        let mesh = generate(&style);
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 11);
        assert!(mesh.vertices.iter().all(|v| (v.length() - 1.0).abs() < 1e-5));
        assert_eq!(mesh.vertices[0], Vec3::planar(0.0, 1.0));
    }

    #[test]
    fn zero_width_is_empty() {
        assert!(generate_symbol(PointSymbol::Circle, 0.0).is_empty());
    }
}
