// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: shapemesh core library
//!
//! Tessellates stroked anchor paths and point symbols into flat triangle
//! meshes lying in the XZ plane, ready for upload by a renderer.

pub mod config;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod renderer;
pub mod shape;
pub mod style;
pub mod types;
#[cfg(all(target_arch = "wasm32", feature = "wasm"))]
pub mod wasm;

pub use error::{SceneError, ShapeError};
pub use geometry::{generate_symbol, tessellate, tessellate_path, MeshBuffers, Path};
pub use shape::{LineShape, PointShape, Scene, Shape};
pub use style::{LineCaps, LineStyle, PointStyle, PointSymbol};
