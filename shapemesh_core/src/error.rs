// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: error types

use thiserror::Error;

/// Staged shape parameters that cannot be tessellated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error("anchor {index} has a non-finite coordinate")]
    NonFiniteAnchor { index: usize },
    #[error("width {0} is not finite")]
    NonFiniteWidth(f32),
    #[error("cap resolution must be at least 1")]
    ZeroCapResolution,
    #[error("a circle needs at least 3 corners, got {0}")]
    TooFewCorners(u32),
}

/// Failures while loading a scene or encoding a preview.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("shape {index} is invalid: {source}")]
    Shape {
        index: usize,
        #[source]
        source: ShapeError,
    },
    #[error("failed to encode preview: {0}")]
    Image(#[from] image::ImageError),
}
