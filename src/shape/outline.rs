use super::{Drawable, ShapeStyle};
use crate::geometry::Point;
use crate::geometry::hit_testing::{distance_to_segment, point_in_triangle};
use crate::raster::{PointSink, bresenham_line, fill_rect, fill_triangle};

/// Straight segment. Never filled.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    style: ShapeStyle,
}

impl Line {
    #[must_use]
    pub fn new(start: Point, end: Point, style: ShapeStyle) -> Self {
        Self { start, end, style: style.outline() }
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }
}

impl Drawable for Line {
    fn kind_name(&self) -> &'static str {
        "line"
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn rasterize_into<S: PointSink + ?Sized>(&self, sink: &mut S) {
        bresenham_line(sink, self.start, self.end, self.style.pen());
    }

    /// Distance to the segment, not to its infinite extension.
    fn hit_test(&self, probe: Point, tolerance: f32) -> bool {
        distance_to_segment(probe, self.start, self.end) <= tolerance
    }
}

/// Axis-aligned rectangle given by two opposite corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    corner_a: Point,
    corner_b: Point,
    style: ShapeStyle,
}

impl Rectangle {
    #[must_use]
    pub fn new(corner_a: Point, corner_b: Point, style: ShapeStyle) -> Self {
        Self { corner_a, corner_b, style }
    }

    /// `(min, max)` corners.
    #[must_use]
    pub fn bounds(&self) -> (Point, Point) {
        (
            Point::new(self.corner_a.x.min(self.corner_b.x), self.corner_a.y.min(self.corner_b.y)),
            Point::new(self.corner_a.x.max(self.corner_b.x), self.corner_a.y.max(self.corner_b.y)),
        )
    }
}

impl Drawable for Rectangle {
    fn kind_name(&self) -> &'static str {
        "rectangle"
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn rasterize_into<S: PointSink + ?Sized>(&self, sink: &mut S) {
        let pen = self.style.pen();
        let (min, max) = self.bounds();

        if self.style.filled() {
            fill_rect(sink, min, max, pen);
            return;
        }

        let bottom_right = Point::new(max.x, min.y);
        let top_left = Point::new(min.x, max.y);
        bresenham_line(sink, min, bottom_right, pen);
        bresenham_line(sink, bottom_right, max, pen);
        bresenham_line(sink, max, top_left, pen);
        bresenham_line(sink, top_left, min, pen);
    }

    /// Bounding-box membership grown by `tolerance`; the interior counts.
    fn hit_test(&self, probe: Point, tolerance: f32) -> bool {
        let (min, max) = self.bounds();
        (min.x - tolerance..=max.x + tolerance).contains(&probe.x)
            && (min.y - tolerance..=max.y + tolerance).contains(&probe.y)
    }
}

/// Right isosceles triangle built from a drag.
///
/// The third vertex sits at `p1 + rot90(p2 - p1)`: the leg `p1 -> p3` is
/// perpendicular to `p1 -> p2` and just as long.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
    style: ShapeStyle,
}

impl Triangle {
    #[must_use]
    pub fn from_drag(anchor: Point, drag: Point, style: ShapeStyle) -> Self {
        Self {
            vertices: [anchor, drag, Self::third_vertex(anchor, drag)],
            style,
        }
    }

    /// A zero-length base has no perpendicular; the third vertex then
    /// coincides with the anchor.
    #[must_use]
    pub fn third_vertex(anchor: Point, drag: Point) -> Point {
        let (dx, dy) = (drag.x - anchor.x, drag.y - anchor.y);
        if dx == 0.0 && dy == 0.0 {
            return anchor;
        }

        // A quarter turn keeps the base length.
        Point::new(anchor.x - dy, anchor.y + dx)
    }

    #[must_use]
    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }
}

impl Drawable for Triangle {
    fn kind_name(&self) -> &'static str {
        "triangle"
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn rasterize_into<S: PointSink + ?Sized>(&self, sink: &mut S) {
        let pen = self.style.pen();
        let [a, b, c] = self.vertices;

        if self.style.filled() {
            fill_triangle(sink, a, b, c, pen);
        } else {
            bresenham_line(sink, a, b, pen);
            bresenham_line(sink, b, c, pen);
            bresenham_line(sink, c, a, pen);
        }
    }

    /// Inside the triangle, or within `tolerance` of one of its edges.
    fn hit_test(&self, probe: Point, tolerance: f32) -> bool {
        let [a, b, c] = self.vertices;
        if point_in_triangle(probe, a, b, c) {
            return true;
        }

        let nearest = distance_to_segment(probe, a, b)
            .min(distance_to_segment(probe, b, c))
            .min(distance_to_segment(probe, c, a));
        nearest <= tolerance
    }
}
