use super::{Drawable, ShapeStyle};
use crate::geometry::Point;
use crate::raster::{PointSink, bresenham_line};

/// Free-hand path. Never filled.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushStroke {
    points: Vec<Point>,
    style: ShapeStyle,
}

impl BrushStroke {
    #[must_use]
    pub fn new(points: Vec<Point>, style: ShapeStyle) -> Self {
        Self { points, style: style.outline() }
    }

    /// Starts a stroke at a single point, as a press does.
    #[must_use]
    pub fn starting_at(point: Point, style: ShapeStyle) -> Self {
        Self::new(vec![point], style)
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl Drawable for BrushStroke {
    fn kind_name(&self) -> &'static str {
        "brush"
    }

    fn style(&self) -> &ShapeStyle {
        &self.style
    }

    fn rasterize_into<S: PointSink + ?Sized>(&self, sink: &mut S) {
        let pen = self.style.pen();
        match self.points.as_slice() {
            [] => {}
            [only] => bresenham_line(sink, *only, *only, pen),
            points => {
                for pair in points.windows(2) {
                    bresenham_line(sink, pair[0], pair[1], pen);
                }
            }
        }
    }

    /// Samples the stored points only. A probe between two distant samples
    /// misses even though the rendered segment passes under it.
    fn hit_test(&self, probe: Point, tolerance: f32) -> bool {
        self.points.iter().any(|point| point.distance(probe) <= tolerance)
    }
}
