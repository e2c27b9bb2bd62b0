// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: anchor path representation

use crate::types::{Vec3, NORMALIZE_EPSILON_SQ};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A line segment represented by two end points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Start point of the segment
    pub from: Vec3,
    /// End point of the segment
    pub to: Vec3,
}

/// An ordered sequence of anchors, optionally closed into a loop.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Ordered anchor points
    pub anchors: Vec<Vec3>,
    /// Whether the last anchor connects back to the first
    #[serde(default)]
    pub closed: bool,
}

impl Path {
    /// Create a new empty open path.
    pub fn new() -> Self {
        Self {
            anchors: Vec::new(),
            closed: false,
        }
    }

    /// Build a path from anchors.
    pub fn from_anchors(anchors: impl Into<Vec<Vec3>>, closed: bool) -> Self {
        Self {
            anchors: anchors.into(),
            closed,
        }
    }

    /// Append an anchor.
    pub fn push(&mut self, p: Vec3) {
        self.anchors.push(p);
    }

    /// Connect the last anchor back to the first.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Anchor at `index`, wrapping one lap in either direction. Panics on an
    /// empty path.
    pub fn anchor(&self, index: isize) -> Vec3 {
        let len = self.anchors.len() as isize;
        self.anchors[index.rem_euclid(len) as usize]
    }

    /// Copy of this path with every anchor dropped onto the plane.
    pub fn planar(&self) -> Self {
        Self {
            anchors: self.anchors.iter().map(|a| a.flatten()).collect(),
            closed: self.closed,
        }
    }

    /// Copy without anchors that coincide with their predecessor. A closed
    /// path also loses trailing anchors that repeat the first one.
    pub fn without_repeats(&self) -> Self {
        let coincide = |a: Vec3, b: Vec3| (a - b).length_squared() <= NORMALIZE_EPSILON_SQ;
        let mut anchors = self.anchors.clone();
        anchors.dedup_by(|a, b| coincide(*a, *b));
        if self.closed {
            while anchors.len() > 1 && coincide(anchors[anchors.len() - 1], anchors[0]) {
                anchors.pop();
            }
        }
        Self {
            anchors,
            closed: self.closed,
        }
    }

    /// Index of the first anchor with a NaN or infinite coordinate.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.anchors.iter().position(|a| !a.is_finite())
    }

    /// Straight segments between consecutive anchors, plus the closing
    /// segment of a loop.
    pub fn flatten(&self) -> SmallVec<[LineSegment; 32]> {
        let mut result: SmallVec<[LineSegment; 32]> = SmallVec::new();
        for pair in self.anchors.windows(2) {
            result.push(LineSegment {
                from: pair[0],
                to: pair[1],
            });
        }
        if self.closed && self.anchors.len() > 2 {
            if let (Some(&last), Some(&first)) = (self.anchors.last(), self.anchors.first()) {
                if last != first {
                    result.push(LineSegment {
                        from: last,
                        to: first,
                    });
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_build_and_flatten() {
        let mut path = Path::new();
        path.push(Vec3::planar(0.0, 0.0));
        path.push(Vec3::planar(1.0, 0.0));
        path.push(Vec3::planar(1.0, 1.0));
        assert_eq!(path.flatten().len(), 2);
        path.close();
        let segs = path.flatten();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[2].from, Vec3::planar(1.0, 1.0));
        assert_eq!(segs[2].to, Vec3::planar(0.0, 0.0));
    }

    #[test]
    fn anchor_wraps() {
        let path = Path::from_anchors(
            vec![
                Vec3::planar(0.0, 0.0),
                Vec3::planar(1.0, 0.0),
                Vec3::planar(2.0, 0.0),
            ],
            true,
        );
        assert_eq!(path.anchor(-1), Vec3::planar(2.0, 0.0));
        assert_eq!(path.anchor(3), Vec3::planar(0.0, 0.0));
    }

    #[test]
    fn repeats_are_dropped() {
        let a = Vec3::planar(0.0, 0.0);
        let b = Vec3::planar(0.0, 4.0);
        let c = Vec3::planar(4.0, 4.0);
        let open = Path::from_anchors(vec![a, b, b, Vec3::planar(0.0, 4.000001), c, a], false);
        assert_eq!(open.without_repeats().anchors, vec![a, b, c, a]);

        let closed = Path::from_anchors(vec![a, b, c, a, a], true);
        assert_eq!(closed.without_repeats().anchors, vec![a, b, c]);
        let point = Path::from_anchors(vec![a, a, a], true);
        assert_eq!(point.without_repeats().len(), 1);
    }

    #[test]
    fn planar_zeroes_height() {
        let path = Path::from_anchors(vec![Vec3::new(1.0, 3.0, 2.0)], false);
        assert_eq!(path.planar().anchors[0], Vec3::planar(1.0, 2.0));
        assert_eq!(path.anchors[0].y, 3.0);
    }
}
