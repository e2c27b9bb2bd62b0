// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: interior join geometry

use super::buffers::MeshBuffers;
use super::tess::Rail;
use crate::style::{LineCaps, LineStyle};
use crate::types::{Vec3, UP};

/// Geometry of the corner at one interior anchor.
///
/// `t1` points back to the previous anchor and `t2` ahead to the next one,
/// so a straight continuation has `t1 == -t2`.
struct Corner {
    anchor: Vec3,
    n1: Vec3,
    n2: Vec3,
    /// Offset from the anchor to the inner miter point.
    inner_offset: Vec3,
    /// `inner_offset` shortened to the style's miter limit.
    tip_offset: Vec3,
    /// Turning towards the right rail, which makes the left rail the outer one.
    right: bool,
    half_width: f32,
}

impl Corner {
    fn new(anchor: Vec3, t1: Vec3, t2: Vec3, style: &LineStyle) -> Self {
        let half_width = style.half_width();
        let n1 = UP.cross(t1).normalized();
        let n2 = UP.cross(t2).normalized();

        // t1 + t2 vanishes for straight continuations; the edge normal
        // gives the same rail points there.
        let sum = (t1 + t2).normalized();
        let mut miter = if t1 == t2 || sum == Vec3::ZERO { -n2 } else { sum };

        let mut length = half_width / miter.dot(n2);
        if !length.is_finite() {
            // tangents parallel to within rounding: treat as a reversal
            miter = -n2;
            length = -half_width;
        }

        let right = miter.cross(t1).dot(UP) > 0.0;
        let inner_length = if right { length } else { -length };
        let tip_length = match style.miter_limit.filter(|l| l.is_finite() && *l > 0.0) {
            Some(limit) => inner_length.clamp(-limit * half_width, limit * half_width),
            None => inner_length,
        };
        Self {
            anchor,
            n1,
            n2,
            inner_offset: miter * inner_length,
            tip_offset: miter * tip_length,
            right,
            half_width,
        }
    }

    /// +1 when the outer rail is the left one.
    fn side(&self) -> f32 {
        if self.right {
            1.0
        } else {
            -1.0
        }
    }

    fn inner(&self) -> Vec3 {
        self.anchor + self.inner_offset
    }

    /// Tip of the sharp miter on the outside of the turn.
    fn outer_tip(&self) -> Vec3 {
        self.anchor - self.tip_offset
    }

    /// Outer rail point perpendicular to the incoming edge.
    fn outer_in(&self) -> Vec3 {
        self.anchor + self.n1 * (self.side() * self.half_width)
    }

    /// Outer rail point perpendicular to the outgoing edge.
    fn outer_out(&self) -> Vec3 {
        self.anchor - self.n2 * (self.side() * self.half_width)
    }

    /// Turn angle swept by the outer rail, in degrees.
    fn sweep(&self) -> f32 {
        180.0 - self.n1.angle_deg(self.n2)
    }

    fn rail(&self, inner: u32, outer: u32) -> Rail {
        if self.right {
            Rail {
                left: outer,
                right: inner,
            }
        } else {
            Rail {
                left: inner,
                right: outer,
            }
        }
    }

    /// Triangle between two consecutive outer points and the anchor.
    fn fan(&self, mesh: &mut MeshBuffers, prev: u32, next: u32, center: u32) {
        if self.right {
            mesh.add_tri(prev, next, center);
        } else {
            mesh.add_tri(next, prev, center);
        }
    }
}

/// Emit the join at `anchor` and return the rail the next edge starts from.
///
/// Without a trailing rail (the first anchor of a closed path) only the
/// outgoing rail is emitted; the wedge itself is built when the loop comes
/// back around to this anchor.
pub(crate) fn build_join(
    mesh: &mut MeshBuffers,
    anchor: Vec3,
    t1: Vec3,
    t2: Vec3,
    style: &LineStyle,
    trailing: Option<Rail>,
) -> Rail {
    let corner = Corner::new(anchor, t1, t2, style);

    let Some(prev) = trailing else {
        let (inner, outer) = (corner.inner(), corner.outer_out());
        let (left, right) = if corner.right {
            (outer, inner)
        } else {
            (inner, outer)
        };
        return Rail {
            left: mesh.add_vertex(left),
            right: mesh.add_vertex(right),
        };
    };

    let center = mesh.add_vertex(anchor);
    let inner = mesh.add_vertex(corner.inner());
    let outer = mesh.add_vertex(corner.outer_in());
    let rail = corner.rail(inner, outer);

    mesh.add_tri(prev.left, rail.left, prev.right);
    mesh.add_tri(prev.right, rail.left, rail.right);
    mesh.add_tri(rail.left, center, rail.right);

    let mut last_outer = outer;
    match style.caps {
        LineCaps::Round => {
            let steps = style.cap_resolution.max(1);
            let step = corner.side() * corner.sweep() / steps as f32;
            let radius = corner.outer_in() - anchor;
            for i in 1..=steps {
                let idx = mesh.add_vertex(anchor + radius.rotate_about_up(i as f32 * step));
                corner.fan(mesh, last_outer, idx, center);
                last_outer = idx;
            }
        }
        LineCaps::Sharp => {
            let tip = mesh.add_vertex(corner.outer_tip());
            corner.fan(mesh, last_outer, tip, center);
            last_outer = mesh.add_vertex(corner.outer_out());
            corner.fan(mesh, tip, last_outer, center);
        }
        LineCaps::Bevel => {
            let idx = mesh.add_vertex(corner.outer_out());
            corner.fan(mesh, last_outer, idx, center);
            last_outer = idx;
        }
    }

    let next = corner.rail(inner, last_outer);
    mesh.add_tri(center, next.left, next.right);
    next
}
