// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: path tessellation

use super::buffers::MeshBuffers;
use super::cap::build_cap;
use super::join::build_join;
use super::Path;
use crate::config::PLACEHOLDER_UV;
use crate::style::{LineCaps, LineStyle};
use crate::types::{Vec3, UP};
use log::{debug, trace};

/// Indices of the left and right ribbon edge vertices at the end of the
/// geometry emitted so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rail {
    pub left: u32,
    pub right: u32,
}

/// Tessellate a [`Path`] into a ribbon of the style's width.
///
/// Open paths get caps at both ends and joins at every interior anchor;
/// closed paths get a join at every anchor and ignore the cap style except
/// as the join fill. Paths with fewer than two anchors, or a non-positive
/// width, produce an empty mesh.
pub fn tessellate(path: &Path, style: &LineStyle) -> MeshBuffers {
    debug_assert!(
        path.first_non_finite().is_none(),
        "anchors must be finite"
    );
    debug_assert!(!style.width.is_nan(), "width must not be NaN");

    let mut mesh = MeshBuffers::new();
    let path = path.planar().without_repeats();
    if path.len() < 2 || style.width.is_nan() || style.width <= 0.0 {
        debug!(
            "nothing to tessellate: {} distinct anchors, width {}",
            path.len(),
            style.width
        );
        return mesh;
    }

    let len = path.len();
    let closed = path.closed;
    let iterations = len + usize::from(closed);

    let mut rail: Option<Rail> = None;
    for i in 0..iterations {
        let index = i as isize;
        let anchor = path.anchor(index);
        let t1 = (i > 0 || closed).then(|| (path.anchor(index - 1) - anchor).normalized());
        let t2 = (i + 1 < len || closed).then(|| (path.anchor(index + 1) - anchor).normalized());

        rail = Some(match (t1, t2) {
            (Some(t1), Some(t2)) => {
                trace!("anchor {i}: join");
                build_join(&mut mesh, anchor, t1, t2, style, rail)
            }
            (None, Some(t2)) => {
                trace!("anchor {i}: start cap");
                build_cap(&mut mesh, anchor, -t2, style, None)
            }
            (Some(t1), None) => {
                trace!("anchor {i}: end cap");
                build_cap(&mut mesh, anchor, t1, style, rail)
            }
            (None, None) => continue,
        });
    }

    mesh.fill_attributes(UP, PLACEHOLDER_UV);
    debug!(
        "tessellated {} anchors (closed: {}, caps: {:?}) into {} vertices, {} triangles",
        len,
        closed,
        style.caps,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    mesh
}

/// Tessellate raw anchors with a default style of the given width and caps.
pub fn tessellate_path(anchors: &[Vec3], closed: bool, width: f32, caps: LineCaps) -> MeshBuffers {
    tessellate(
        &Path::from_anchors(anchors, closed),
        &LineStyle::new(width, caps),
    )
}
