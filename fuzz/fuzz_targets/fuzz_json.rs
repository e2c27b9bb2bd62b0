// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
#![no_main]
use libfuzzer_sys::fuzz_target;
use shapemesh_core::loader::json;

fuzz_target!(|data: &[u8]| {
    if let Ok(scene) = json::from_slice(data) {
        for shape in &scene.shapes {
            assert!(shape.generate().is_consistent());
        }
    }
});
