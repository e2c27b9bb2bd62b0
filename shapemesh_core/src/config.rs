// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: tessellation defaults

use crate::types::Vec2;

/// Arc segments used for round joins and each half of a round cap.
pub const DEFAULT_CAP_RESOLUTION: u32 = 5;

/// Corners used to approximate a circle symbol.
pub const DEFAULT_CIRCLE_CORNERS: u32 = 20;

/// Longest allowed miter, in multiples of the stroke half-width.
pub const DEFAULT_MITER_LIMIT: f32 = 10.0;

/// Texture coordinate assigned to every generated vertex.
pub const PLACEHOLDER_UV: Vec2 = Vec2 { x: 0.5, y: 0.5 };

pub(crate) fn default_cap_resolution() -> u32 {
    DEFAULT_CAP_RESOLUTION
}

pub(crate) fn default_circle_corners() -> u32 {
    DEFAULT_CIRCLE_CORNERS
}

pub(crate) fn default_miter_limit() -> Option<f32> {
    Some(DEFAULT_MITER_LIMIT)
}
