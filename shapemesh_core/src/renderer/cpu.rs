// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: software preview rasterizer

use super::MeshSink;
use crate::error::SceneError;
use crate::geometry::MeshBuffers;
use crate::types::{Color, Vec2, Vec3};
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// Maps the drawing plane onto the pixel grid, looking down from above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Plane point (x, z) drawn at the centre of the image
    pub center: Vec2,
    /// Scale from plane units to pixels
    pub pixels_per_unit: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Vec2::default(),
            pixels_per_unit: 1.0,
        }
    }
}

/// RGBA8888 frame that draws every uploaded mesh top-down.
#[derive(Debug, Clone)]
pub struct PreviewTarget {
    width: usize,
    height: usize,
    viewport: Viewport,
    buffer: Vec<u8>,
}

impl PreviewTarget {
    /// Create a transparent frame.
    pub fn new(width: usize, height: usize, viewport: Viewport) -> Self {
        Self {
            width,
            height,
            viewport,
            buffer: vec![0; width * height * 4],
        }
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    pub fn pixels(&self) -> &[u8] {
        &self.buffer
    }

    /// RGBA value at pixel `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let o = (y * self.width + x) * 4;
        [
            self.buffer[o],
            self.buffer[o + 1],
            self.buffer[o + 2],
            self.buffer[o + 3],
        ]
    }

    /// Pixel-space position of a plane point. Plane +X is image right and
    /// plane +Z is image down.
    pub fn project(&self, p: Vec3) -> Vec2 {
        let s = self.viewport.pixels_per_unit;
        Vec2 {
            x: (p.x - self.viewport.center.x) * s + self.width as f32 * 0.5,
            y: (p.z - self.viewport.center.y) * s + self.height as f32 * 0.5,
        }
    }

    /// Fill every triangle of `mesh` with `color`.
    pub fn draw_mesh(&mut self, mesh: &MeshBuffers, color: Color) {
        for [a, b, c] in mesh.triangles() {
            let v0 = self.project(mesh.vertex(a));
            let v1 = self.project(mesh.vertex(b));
            let v2 = self.project(mesh.vertex(c));
            self.fill_triangle(v0, v1, v2, color);
        }
    }

    /// Encode the frame as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, SceneError> {
        let mut out = Cursor::new(Vec::new());
        if let Some(img) = RgbaImage::from_raw(
            self.width as u32,
            self.height as u32,
            self.buffer.clone(),
        ) {
            img.write_to(&mut out, ImageFormat::Png)?;
        }
        Ok(out.into_inner())
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        let min_x = a.x.min(b.x).min(c.x).floor().max(0.0) as i32;
        let max_x = a.x.max(b.x).max(c.x).ceil().min(self.width as f32) as i32;
        let min_y = a.y.min(b.y).min(c.y).floor().max(0.0) as i32;
        let max_y = a.y.max(b.y).max(c.y).ceil().min(self.height as f32) as i32;

        for y in min_y..max_y {
            for x in min_x..max_x {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                if inside_triangle(px, py, a, b, c) {
                    self.blend_pixel(x as usize, y as usize, color);
                }
            }
        }
    }

    fn blend_pixel(&mut self, x: usize, y: usize, src: Color) {
        let offset = (y * self.width + x) * 4;
        let Some(dst) = self.buffer.get_mut(offset..offset + 4) else {
            return;
        };
        let sa = src.a as f32 / 255.0;
        let ia = 1.0 - sa;

        let out_a = sa + dst[3] as f32 / 255.0 * ia;
        let out_r = src.r as f32 * sa + dst[0] as f32 * ia;
        let out_g = src.g as f32 * sa + dst[1] as f32 * ia;
        let out_b = src.b as f32 * sa + dst[2] as f32 * ia;

        dst[0] = out_r.min(255.0) as u8;
        dst[1] = out_g.min(255.0) as u8;
        dst[2] = out_b.min(255.0) as u8;
        dst[3] = (out_a * 255.0).min(255.0) as u8;
    }
}

impl MeshSink for PreviewTarget {
    fn upload(&mut self, mesh: MeshBuffers, color: Color) {
        self.draw_mesh(&mesh, color);
    }
}

fn edge(px: f32, py: f32, a: Vec2, b: Vec2) -> f32 {
    (px - a.x) * (b.y - a.y) - (py - a.y) * (b.x - a.x)
}

fn inside_triangle(px: f32, py: f32, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let e1 = edge(px, py, a, b);
    let e2 = edge(px, py, b, c);
    let e3 = edge(px, py, c, a);
    (e1 >= 0.0 && e2 >= 0.0 && e3 >= 0.0) || (e1 <= 0.0 && e2 <= 0.0 && e3 <= 0.0)
}
