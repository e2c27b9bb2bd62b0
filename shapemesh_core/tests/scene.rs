use shapemesh_core::renderer::RetainedMesh;
use shapemesh_core::types::Color;
use shapemesh_core::{LineCaps, PointSymbol, SceneError, Shape, ShapeError};
use util::load_scene;

mod util;

#[test]
fn open_round_scene_refresh() {
    let scene = load_scene("open_round.json");
    let Shape::Line(line) = &scene.shapes[0] else {
        panic!("expected a line");
    };
    assert!(!line.path().closed);
    assert_eq!(line.style().caps, LineCaps::Round);
    assert_eq!(line.style().cap_resolution, 8);
    assert_eq!(line.style().miter_limit, None);
    assert_eq!(line.style().color, Color::WHITE);

    let mut sink = RetainedMesh::default();
    scene.refresh_all(&mut sink).unwrap();
    assert_eq!(sink.uploads, 1);
    // round start cap, one round join, round end cap
    assert_eq!(sink.mesh.vertex_count(), 18 + 11 + 19);
    assert_eq!(sink.mesh.triangle_count(), 16 + 12 + 18);
    assert!(sink.mesh.is_consistent());
}

#[test]
fn driver_scene_refresh() {
    let scene = load_scene("driver.json");
    let mut meshes = Vec::new();
    for shape in &scene.shapes {
        let mut sink = RetainedMesh::default();
        shape.refresh(&mut sink).unwrap();
        assert_eq!(sink.color, shape.color());
        meshes.push(sink.mesh);
    }
    assert_eq!(meshes[0].vertex_count(), 22);
    assert_eq!(meshes[0].triangle_count(), 24);
    assert_eq!(meshes[1].vertex_count(), 20);
    assert_eq!(meshes[1].triangle_count(), 19);
}

#[test]
fn restyled_shapes_regenerate() {
    let mut scene = load_scene("driver.json");
    if let Shape::Point(point) = &mut scene.shapes[1] {
        point.set_symbol(PointSymbol::Triangle);
    }
    if let Shape::Line(line) = &mut scene.shapes[0] {
        line.set_closed(false);
        line.set_caps(LineCaps::Bevel);
    }
    let mut sink = RetainedMesh::default();
    scene.shapes[1].refresh(&mut sink).unwrap();
    assert_eq!(sink.mesh.vertex_count(), 3);
    scene.shapes[0].refresh(&mut sink).unwrap();
    // flat caps plus two bevel joins
    assert_eq!(sink.mesh.vertex_count(), 2 + 2 * 4 + 2);
    assert_eq!(sink.mesh.triangle_count(), 2 * 5 + 2);
}

#[test]
fn overlay_labels_anchors() {
    let scene = load_scene("driver.json");
    let overlay = scene.shapes[0].overlay();
    assert_eq!(overlay.lines.len(), 4);
    let labels: Vec<&str> = overlay.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(labels, ["<0>", "<1>", "<2>", "<3>"]);
    assert_eq!(scene.shapes[1].overlay().lines.len(), 20);
}

#[test]
fn zero_resolution_is_reported_with_index() {
    let json = br#"{"shapes": [
        {"type": "point", "width": 1},
        {"type": "line", "anchors": [{"x": 0, "z": 0}], "style": {"width": 1, "cap_resolution": 0}}
    ]}"#;
    match shapemesh_core::loader::json::from_slice(json) {
        Err(SceneError::Shape { index, source }) => {
            assert_eq!(index, 1);
            assert_eq!(source, ShapeError::ZeroCapResolution);
        }
        other => panic!("unexpected {other:?}"),
    }
}
