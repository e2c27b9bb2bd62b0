// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: end cap geometry

use super::buffers::MeshBuffers;
use super::tess::Rail;
use crate::style::{LineCaps, LineStyle};
use crate::types::{Vec3, UP};

/// Emit a cap at an open path's endpoint.
///
/// `tangent` points away from the ribbon body. A start cap has no trailing
/// rail and returns the rail the first edge grows from; an end cap closes
/// the ribbon onto `trailing`.
pub(crate) fn build_cap(
    mesh: &mut MeshBuffers,
    anchor: Vec3,
    tangent: Vec3,
    style: &LineStyle,
    trailing: Option<Rail>,
) -> Rail {
    let half_width = style.half_width();
    let normal = UP.cross(tangent).normalized();
    let round = style.caps == LineCaps::Round;

    let base = if trailing.is_some() || !round {
        let left = mesh.add_vertex(anchor + normal * half_width);
        let right = mesh.add_vertex(anchor - normal * half_width);
        if let Some(prev) = trailing {
            mesh.add_tri(prev.left, left, prev.right);
            mesh.add_tri(left, right, prev.right);
        }
        Some(Rail { left, right })
    } else {
        None
    };

    match (base, round) {
        (Some(rail), false) => rail,
        (Some(rail), true) => round_fan(mesh, anchor, rail, style.cap_resolution),
        (None, _) => {
            let tip = mesh.add_vertex(anchor + tangent * half_width);
            round_fan(
                mesh,
                anchor,
                Rail {
                    left: tip,
                    right: tip,
                },
                style.cap_resolution,
            )
        }
    }
}

/// Sweep both rail points a quarter turn in opposite directions, fanning
/// every step to a vertex at the anchor. Returns the final arc points.
fn round_fan(mesh: &mut MeshBuffers, anchor: Vec3, from: Rail, resolution: u32) -> Rail {
    let steps = resolution.max(1);
    let step = 90.0 / steps as f32;
    let left_radius = mesh.vertex(from.left) - anchor;
    let right_radius = mesh.vertex(from.right) - anchor;
    let center = mesh.add_vertex(anchor);

    let mut rail = from;
    for i in 1..=steps {
        let angle = i as f32 * step;
        let left = mesh.add_vertex(anchor + left_radius.rotate_about_up(angle));
        let right = mesh.add_vertex(anchor + right_radius.rotate_about_up(-angle));
        mesh.add_tri(center, rail.left, left);
        mesh.add_tri(center, right, rail.right);
        rail = Rail { left, right };
    }
    rail
}
