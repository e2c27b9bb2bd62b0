// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
#![no_main]
use libfuzzer_sys::fuzz_target;
use shapemesh_core::types::Vec3;
use shapemesh_core::{tessellate, LineCaps, LineStyle, Path};

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let mut floats = rest
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .filter(|f| f.is_finite() && f.abs() < 1.0e6);
    let Some(width) = floats.next() else {
        return;
    };
    let values: Vec<f32> = floats.collect();
    let anchors: Vec<Vec3> = values
        .chunks_exact(2)
        .map(|p| Vec3::planar(p[0], p[1]))
        .collect();

    let caps = match flags % 3 {
        0 => LineCaps::Sharp,
        1 => LineCaps::Round,
        _ => LineCaps::Bevel,
    };
    let mut style = LineStyle::new(width, caps);
    style.cap_resolution = u32::from(flags >> 4).max(1);
    let path = Path::from_anchors(anchors, flags & 0x08 != 0);
    let mesh = tessellate(&path, &style);
    assert!(mesh.is_consistent());
    if path.len() < 2 || width <= 0.0 {
        assert!(mesh.is_empty());
    }
});
