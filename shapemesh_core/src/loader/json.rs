// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: JSON scene loader
//!
//! ```json
//! { "shapes": [
//!     { "type": "line", "closed": true,
//!       "anchors": [{ "x": 0, "z": 0 }, { "x": 0, "z": 4 }],
//!       "style": { "width": 1, "caps": "round" } },
//!     { "type": "point", "width": 2, "symbol": "circle" }
//! ] }
//! ```

use crate::error::SceneError;
use crate::geometry::Path;
use crate::shape::{LineShape, PointShape, Scene, Shape};
use crate::style::{LineStyle, PointStyle};
use crate::types::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Serialized line: anchors, loop flag and stroke style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDesc {
    pub anchors: Vec<Vec3>,
    #[serde(default)]
    pub closed: bool,
    pub style: LineStyle,
}

/// One entry of a scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeDesc {
    Line(LineDesc),
    Point(PointStyle),
}

impl From<ShapeDesc> for Shape {
    fn from(desc: ShapeDesc) -> Self {
        match desc {
            ShapeDesc::Line(line) => Shape::Line(LineShape::new(
                Path::from_anchors(line.anchors, line.closed),
                line.style,
            )),
            ShapeDesc::Point(style) => Shape::Point(PointShape::new(style)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SceneDesc {
    shapes: Vec<ShapeDesc>,
}

/// Load a scene from a reader containing JSON, validating every shape.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Scene, SceneError> {
    let mut s = String::new();
    reader.read_to_string(&mut s)?;
    let desc: SceneDesc = serde_json::from_str(&s)?;
    let shapes: Vec<Shape> = desc.shapes.into_iter().map(Shape::from).collect();
    for (index, shape) in shapes.iter().enumerate() {
        shape
            .validate()
            .map_err(|source| SceneError::Shape { index, source })?;
    }
    debug!("loaded scene with {} shapes", shapes.len());
    Ok(Scene { shapes })
}

/// Load a scene directly from a byte slice containing JSON.
pub fn from_slice(data: &[u8]) -> Result<Scene, SceneError> {
    let cursor = std::io::Cursor::new(data);
    from_reader(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{LineCaps, PointSymbol};
    use std::fs::File;
    use std::io::Read;

    fn data(name: &str) -> std::path::PathBuf {
        std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/data")
            .join(name)
    }

    #[test]
    fn parse_driver_scene() {
        let file = File::open(data("driver.json")).unwrap();
        let scene = from_reader(file).unwrap();
        assert_eq!(scene.shapes.len(), 2);
        match &scene.shapes[0] {
            Shape::Line(line) => {
                assert_eq!(line.path().len(), 4);
                assert!(line.path().closed);
                assert_eq!(line.style().caps, LineCaps::Sharp);
            }
            other => panic!("expected line, got {other:?}"),
        }
        match &scene.shapes[1] {
            Shape::Point(point) => assert_eq!(point.style().symbol, PointSymbol::Circle),
            other => panic!("expected point, got {other:?}"),
        }
    }

    #[test]
    fn from_slice_matches_reader() {
        let mut bytes = Vec::new();
        File::open(data("driver.json"))
            .unwrap()
            .read_to_end(&mut bytes)
            .unwrap();
        let from_reader_scene = from_reader(File::open(data("driver.json")).unwrap()).unwrap();
        let from_slice_scene = from_slice(&bytes).unwrap();
        assert_eq!(from_reader_scene, from_slice_scene);
    }

    #[test]
    fn rejects_unknown_shape_type() {
        let err = from_slice(br#"{"shapes": [{"type": "blob"}]}"#).unwrap_err();
        assert!(matches!(err, SceneError::Json(_)));
    }

    #[test]
    fn rejects_invalid_corner_count() {
        let json = br#"{"shapes": [{"type": "point", "width": 1, "symbol": "circle", "circle_corners": 1}]}"#;
        match from_slice(json) {
            Err(SceneError::Shape { index: 0, .. }) => {}
            other => panic!("unexpected {other:?}"),
        }
    }
}
