use super::{Drawable, ShapeStyle};
use crate::geometry::Point;
use crate::raster::{PointSink, midpoint_circle, midpoint_ellipse};

/// Circle inscribed in the smaller side of a drag box.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f32,
    style: ShapeStyle,
}

impl Circle {
    #[must_use]
    pub fn new(center: Point, radius: f32, style: ShapeStyle) -> Self {
        Self { center, radius: radius.abs(), style }
    }

    /// Centered on the drag box, radius half its smaller side.
    #[must_use]
    pub fn from_drag(start: Point, end: Point, style: ShapeStyle) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();
        Self::new(start.midpoint(end), dx.min(dy) / 2.0, style)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Drawable for Circle {
    fn kind_name(&self) -> &'static str {
        "circle"
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn rasterize_into<S: PointSink + ?Sized>(&self, sink: &mut S) {
        midpoint_circle(sink, self.center, self.radius, self.style.filled(), self.style.pen());
    }

    fn hit_test(&self, probe: Point, tolerance: f32) -> bool {
        probe.distance(self.center) <= self.radius + tolerance
    }
}

/// Axis-aligned ellipse filling a drag box.
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    center: Point,
    radius_x: f32,
    radius_y: f32,
    style: ShapeStyle,
}

impl Ellipse {
    #[must_use]
    pub fn new(center: Point, radius_x: f32, radius_y: f32, style: ShapeStyle) -> Self {
        Self {
            center,
            radius_x: radius_x.abs(),
            radius_y: radius_y.abs(),
            style,
        }
    }

    #[must_use]
    pub fn from_drag(start: Point, end: Point, style: ShapeStyle) -> Self {
        Self::new(
            start.midpoint(end),
            (end.x - start.x).abs() / 2.0,
            (end.y - start.y).abs() / 2.0,
            style,
        )
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radii(&self) -> (f32, f32) {
        (self.radius_x, self.radius_y)
    }
}

impl Drawable for Ellipse {
    fn kind_name(&self) -> &'static str {
        "ellipse"
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn rasterize_into<S: PointSink + ?Sized>(&self, sink: &mut S) {
        midpoint_ellipse(
            sink,
            self.center,
            self.radius_x,
            self.radius_y,
            self.style.filled(),
            self.style.pen(),
        );
    }

    /// Normalized-axis membership with both radii grown by `tolerance`.
    fn hit_test(&self, probe: Point, tolerance: f32) -> bool {
        let rx = self.radius_x + tolerance;
        let ry = self.radius_y + tolerance;
        if rx <= 0.0 || ry <= 0.0 {
            return probe.distance(self.center) <= tolerance;
        }

        let nx = (probe.x - self.center.x) / rx;
        let ny = (probe.y - self.center.y) / ry;
        nx * nx + ny * ny <= 1.0
    }
}
