// Copyright © SoftOboros Technology, Inc.
// SPDX-License-Identifier: MIT
//! Module: shape nodes
//!
//! Setters only stage parameters. Geometry is rebuilt from scratch on
//! [`Shape::refresh`] and moved into a [`MeshSink`], so a host can batch any
//! number of changes into one recomputation.

use crate::error::{SceneError, ShapeError};
use crate::geometry::{self, MeshBuffers, Overlay, Path};
use crate::renderer::MeshSink;
use crate::style::{LineCaps, LineStyle, PointStyle, PointSymbol};
use crate::types::{Color, Vec3};
use log::{debug, warn};

/// A stroked polyline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineShape {
    path: Path,
    style: LineStyle,
}

impl LineShape {
    pub fn new(path: Path, style: LineStyle) -> Self {
        Self { path, style }
    }

    /// Replace the anchors, keeping the loop flag.
    pub fn set_points(&mut self, points: impl Into<Vec<Vec3>>) {
        self.path.anchors = points.into();
    }

    pub fn set_style(&mut self, width: f32, color: Color, caps: LineCaps, closed: bool) {
        self.style.width = width;
        self.style.color = color;
        self.style.caps = caps;
        self.path.closed = closed;
    }

    pub fn set_width(&mut self, width: f32) {
        self.style.width = width;
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    pub fn set_caps(&mut self, caps: LineCaps) {
        self.style.caps = caps;
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.path.closed = closed;
    }

    pub fn set_cap_resolution(&mut self, resolution: u32) {
        self.style.cap_resolution = resolution;
    }

    pub fn set_miter_limit(&mut self, limit: Option<f32>) {
        self.style.miter_limit = limit;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    /// Reject staged input the tessellator must not see.
    pub fn validate(&self) -> Result<(), ShapeError> {
        if let Some(index) = self.path.first_non_finite() {
            return Err(ShapeError::NonFiniteAnchor { index });
        }
        if !self.style.width.is_finite() {
            return Err(ShapeError::NonFiniteWidth(self.style.width));
        }
        if self.style.cap_resolution == 0 {
            return Err(ShapeError::ZeroCapResolution);
        }
        Ok(())
    }

    pub fn generate(&self) -> MeshBuffers {
        geometry::tessellate(&self.path, &self.style)
    }

    pub fn overlay(&self) -> Overlay {
        geometry::path_overlay(&self.path)
    }

    /// Validate, regenerate and hand the mesh to `sink`.
    pub fn refresh<S: MeshSink + ?Sized>(&self, sink: &mut S) -> Result<(), ShapeError> {
        assemble(self.validate(), || self.generate(), self.style.color, sink)
    }
}

/// A marker symbol centred on the local origin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointShape {
    style: PointStyle,
}

impl PointShape {
    pub fn new(style: PointStyle) -> Self {
        Self { style }
    }

    pub fn set_style(&mut self, width: f32, color: Color, symbol: PointSymbol) {
        self.style.width = width;
        self.style.color = color;
        self.style.symbol = symbol;
    }

    pub fn set_width(&mut self, width: f32) {
        self.style.width = width;
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    pub fn set_symbol(&mut self, symbol: PointSymbol) {
        self.style.symbol = symbol;
    }

    pub fn set_circle_corners(&mut self, corners: u32) {
        self.style.circle_corners = corners;
    }

    pub fn style(&self) -> &PointStyle {
        &self.style
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        if !self.style.width.is_finite() {
            return Err(ShapeError::NonFiniteWidth(self.style.width));
        }
        if self.style.symbol == PointSymbol::Circle && self.style.circle_corners < 3 {
            return Err(ShapeError::TooFewCorners(self.style.circle_corners));
        }
        Ok(())
    }

    pub fn generate(&self) -> MeshBuffers {
        geometry::generate(&self.style)
    }

    pub fn overlay(&self) -> Overlay {
        geometry::symbol_overlay(&self.style)
    }

    /// Validate, regenerate and hand the mesh to `sink`.
    pub fn refresh<S: MeshSink + ?Sized>(&self, sink: &mut S) -> Result<(), ShapeError> {
        assemble(self.validate(), || self.generate(), self.style.color, sink)
    }
}

fn assemble<S, F>(
    valid: Result<(), ShapeError>,
    generate: F,
    color: Color,
    sink: &mut S,
) -> Result<(), ShapeError>
where
    S: MeshSink + ?Sized,
    F: FnOnce() -> MeshBuffers,
{
    if let Err(err) = valid {
        warn!("refresh skipped: {err}");
        return Err(err);
    }
    let mesh = generate();
    debug!(
        "refresh: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    sink.upload(mesh, color);
    Ok(())
}

/// Any shape a host can own.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(LineShape),
    Point(PointShape),
}

impl Shape {
    pub fn color(&self) -> Color {
        match self {
            Shape::Line(line) => line.style.color,
            Shape::Point(point) => point.style.color,
        }
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Shape::Line(line) => line.validate(),
            Shape::Point(point) => point.validate(),
        }
    }

    pub fn generate(&self) -> MeshBuffers {
        match self {
            Shape::Line(line) => line.generate(),
            Shape::Point(point) => point.generate(),
        }
    }

    pub fn overlay(&self) -> Overlay {
        match self {
            Shape::Line(line) => line.overlay(),
            Shape::Point(point) => point.overlay(),
        }
    }

    pub fn refresh<S: MeshSink + ?Sized>(&self, sink: &mut S) -> Result<(), ShapeError> {
        match self {
            Shape::Line(line) => line.refresh(sink),
            Shape::Point(point) => point.refresh(sink),
        }
    }
}

impl From<LineShape> for Shape {
    fn from(line: LineShape) -> Self {
        Shape::Line(line)
    }
}

impl From<PointShape> for Shape {
    fn from(point: PointShape) -> Self {
        Shape::Point(point)
    }
}

/// An ordered collection of shapes refreshed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub shapes: Vec<Shape>,
}

impl Scene {
    /// Refresh every shape into `sink`, stopping at the first invalid one.
    pub fn refresh_all<S: MeshSink + ?Sized>(&self, sink: &mut S) -> Result<(), SceneError> {
        for (index, shape) in self.shapes.iter().enumerate() {
            shape
                .refresh(sink)
                .map_err(|source| SceneError::Shape { index, source })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RetainedMesh;

    #[test]
    fn setters_stage_until_refresh() {
        let mut line = LineShape::default();
        let mut sink = RetainedMesh::default();
        line.set_points(vec![Vec3::planar(0.0, 0.0), Vec3::planar(0.0, 4.0)]);
        line.set_style(1.0, Color::CYAN, LineCaps::Sharp, false);
        assert_eq!(sink.uploads, 0);

        line.refresh(&mut sink).unwrap();
        assert_eq!(sink.uploads, 1);
        assert_eq!(sink.color, Color::CYAN);
        assert_eq!(sink.mesh.vertex_count(), 4);

        line.set_caps(LineCaps::Round);
        line.set_width(2.0);
        assert_eq!(sink.mesh.vertex_count(), 4);
        line.refresh(&mut sink).unwrap();
        assert_eq!(sink.uploads, 2);
        assert!(sink.mesh.vertex_count() > 4);
    }

    #[test]
    fn invalid_anchor_is_rejected() {
        let mut line = LineShape::default();
        line.set_points(vec![Vec3::planar(0.0, 0.0), Vec3::planar(f32::NAN, 1.0)]);
        let mut sink = RetainedMesh::default();
        assert_eq!(
            line.refresh(&mut sink),
            Err(ShapeError::NonFiniteAnchor { index: 1 })
        );
        assert_eq!(sink.uploads, 0);
    }

    #[test]
    fn point_shape_refresh() {
        let mut point = PointShape::default();
        point.set_style(2.0, Color::BLUE, PointSymbol::Triangle);
        let mut sink = RetainedMesh::default();
        Shape::from(point.clone()).refresh(&mut sink).unwrap();
        assert_eq!(sink.mesh.vertex_count(), 3);
        point.set_symbol(PointSymbol::Circle);
        point.set_circle_corners(2);
        assert_eq!(point.validate(), Err(ShapeError::TooFewCorners(2)));
    }

    #[test]
    fn scene_reports_failing_index() {
        let good = Shape::from(PointShape::new(PointStyle::new(1.0, PointSymbol::Square)));
        let mut bad = LineShape::default();
        bad.set_width(f32::INFINITY);
        let scene = Scene {
            shapes: vec![good, bad.into()],
        };
        let mut sink = RetainedMesh::default();
        match scene.refresh_all(&mut sink) {
            Err(SceneError::Shape { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(sink.uploads, 1);
    }
}
