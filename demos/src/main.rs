// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Refresh a scene into the software preview and write it as PNG.
//!
//! ```text
//! shapemesh_preview [scene.json] [out.png]
//! ```
//!
//! Without a scene file the built-in driver scene is used: a closed cyan
//! loop and a blue circle marker at the origin.

use log::info;
use shapemesh_core::geometry::Overlay;
use shapemesh_core::loader::json;
use shapemesh_core::renderer::{PreviewTarget, Viewport};
use shapemesh_core::types::{Color, Vec2, Vec3};
use shapemesh_core::{
    LineCaps, LineShape, PointShape, PointStyle, PointSymbol, Scene, SceneError, Shape,
};
use std::fs::File;

const PREVIEW_SIZE: usize = 512;

fn driver_scene() -> Scene {
    let mut line = LineShape::default();
    line.set_points(vec![
        Vec3::planar(0.0, 0.0),
        Vec3::planar(0.0, 4.0),
        Vec3::planar(3.0, 0.0),
        Vec3::planar(3.0, 5.0),
    ]);
    line.set_style(1.0, Color::CYAN, LineCaps::Sharp, true);

    let mut point = PointShape::new(PointStyle::new(2.0, PointSymbol::Circle));
    point.set_color(Color::BLUE);

    Scene {
        shapes: vec![line.into(), point.into()],
    }
}

/// Fit every mesh vertex into the frame with a one unit margin.
fn fit_viewport(vertices: &[Vec3]) -> Viewport {
    let (mut min, mut max) = (Vec2 { x: -1.0, y: -1.0 }, Vec2 { x: 1.0, y: 1.0 });
    for v in vertices {
        min.x = min.x.min(v.x - 1.0);
        min.y = min.y.min(v.z - 1.0);
        max.x = max.x.max(v.x + 1.0);
        max.y = max.y.max(v.z + 1.0);
    }
    let span = (max.x - min.x).max(max.y - min.y);
    Viewport {
        center: Vec2 {
            x: 0.5 * (min.x + max.x),
            y: 0.5 * (min.y + max.y),
        },
        pixels_per_unit: PREVIEW_SIZE as f32 / span,
    }
}

fn print_overlay(index: usize, overlay: &Overlay) {
    println!("  shape {index}: {} outline segments", overlay.lines.len());
    for label in &overlay.labels {
        println!(
            "    {} at ({:.2}, {:.2})",
            label.text, label.position.x, label.position.z
        );
    }
}

fn main() -> Result<(), SceneError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let scene = match args.next() {
        Some(path) => json::from_reader(File::open(&path)?)?,
        None => driver_scene(),
    };
    let out = args.next().unwrap_or_else(|| "preview.png".to_string());

    let vertices: Vec<Vec3> = scene
        .shapes
        .iter()
        .flat_map(|s| s.generate().vertices)
        .collect();
    let mut preview = PreviewTarget::new(PREVIEW_SIZE, PREVIEW_SIZE, fit_viewport(&vertices));
    scene.refresh_all(&mut preview)?;

    for (index, shape) in scene.shapes.iter().enumerate() {
        let mesh = shape.generate();
        let kind = match shape {
            Shape::Line(_) => "line",
            Shape::Point(_) => "point",
        };
        println!(
            "{kind}: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        print_overlay(index, &shape.overlay());
    }

    std::fs::write(&out, preview.encode_png()?)?;
    info!("wrote {out}");
    Ok(())
}
