// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: debug overlay primitives
//!
//! Wireframe lines and anchor labels a host can draw on top of a shape.
//! Nothing here touches mesh generation.

use super::path::{LineSegment, Path};
use super::symbol::symbol_corners;
use crate::style::PointStyle;
use crate::types::Vec3;

/// Text anchored at a local-space position.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Vec3,
}

/// Lines and labels describing a shape's construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub lines: Vec<LineSegment>,
    pub labels: Vec<Label>,
}

/// The anchor polyline of `path` with a `<i>` label at every anchor.
pub fn path_overlay(path: &Path) -> Overlay {
    Overlay {
        lines: path.flatten().into_vec(),
        labels: path
            .anchors
            .iter()
            .enumerate()
            .map(|(i, &position)| Label {
                text: format!("<{i}>"),
                position,
            })
            .collect(),
    }
}

/// Closed outline of a point symbol.
pub fn symbol_overlay(style: &PointStyle) -> Overlay {
    let corners = symbol_corners(style);
    let outline = Path::from_anchors(corners.to_vec(), true);
    Overlay {
        lines: outline.flatten().into_vec(),
        labels: Vec::new(),
    }
}
