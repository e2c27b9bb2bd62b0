// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: geometry primitives and mesh generators

mod buffers;
mod cap;
mod join;
mod overlay;
mod path;
mod symbol;
mod tess;

pub use buffers::MeshBuffers;
pub use overlay::{path_overlay, symbol_overlay, Label, Overlay};
pub use path::{LineSegment, Path};
pub use symbol::{generate, generate_symbol, polygon_corners, square_corners, symbol_corners, Corners};
pub use tess::{tessellate, tessellate_path};
