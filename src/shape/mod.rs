//! The shape model: one enum variant per primitive the surface can draw.

use serde::{Deserialize, Serialize};

use crate::geometry::{Color, Point};
use crate::raster::{Pen, PlottedPoint, PointSink};

mod brush;
mod conic;
mod outline;

pub use brush::BrushStroke;
pub use conic::{Circle, Ellipse};
pub use outline::{Line, Rectangle, Triangle};

/// Thinnest stroke a shape can carry.
pub const MIN_THICKNESS: f32 = 1.0;

/// Color, stroke thickness and fill flag shared by every shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    color: Color,
    thickness: f32,
    filled: bool,
}

impl ShapeStyle {
    /// Thickness below [`MIN_THICKNESS`] (or NaN) is raised to it.
    #[must_use]
    pub fn new(color: Color, thickness: f32, filled: bool) -> Self {
        let thickness = if thickness >= MIN_THICKNESS { thickness } else { MIN_THICKNESS };
        Self { color, thickness, filled }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    #[must_use]
    pub fn filled(&self) -> bool {
        self.filled
    }

    #[must_use]
    pub fn pen(&self) -> Pen {
        Pen::new(self.color, self.thickness)
    }

    /// The same style with fill switched off, for shapes that are always outlines.
    pub(crate) fn outline(self) -> Self {
        Self { filled: false, ..self }
    }
}

/// Behavior every shape variant provides.
pub trait Drawable {
    /// Short lowercase name, used in logs.
    fn kind_name(&self) -> &'static str;

    fn style(&self) -> &ShapeStyle;

    /// Scan-converts the shape into `sink`.
    fn rasterize_into<S: PointSink + ?Sized>(&self, sink: &mut S);

    /// Whether `probe` lies within `tolerance` of the shape, as the eraser sees it.
    fn hit_test(&self, probe: Point, tolerance: f32) -> bool;

    /// Scan-converts the shape into a fresh list of points.
    fn rasterize(&self) -> Vec<PlottedPoint> {
        let mut points = Vec::new();
        self.rasterize_into(&mut points);
        points
    }
}

/// A drawable primitive together with its style.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
    Ellipse(Ellipse),
    Triangle(Triangle),
    Brush(BrushStroke),
}

impl Shape {
    pub fn as_brush_mut(&mut self) -> Option<&mut BrushStroke> {
        match self {
            Self::Brush(brush) => Some(brush),
            _ => None,
        }
    }

    /// Shapes that would draw nothing at all are never committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Brush(brush) if brush.points().is_empty())
    }
}

impl Drawable for Shape {
    fn kind_name(&self) -> &'static str {
        match self {
            Self::Line(s) => s.kind_name(),
            Self::Rectangle(s) => s.kind_name(),
            Self::Circle(s) => s.kind_name(),
            Self::Ellipse(s) => s.kind_name(),
            Self::Triangle(s) => s.kind_name(),
            Self::Brush(s) => s.kind_name(),
        }
    }

    fn style(&self) -> &ShapeStyle {
        match self {
            Self::Line(s) => s.style(),
            Self::Rectangle(s) => s.style(),
            Self::Circle(s) => s.style(),
            Self::Ellipse(s) => s.style(),
            Self::Triangle(s) => s.style(),
            Self::Brush(s) => s.style(),
        }
    }

    fn rasterize_into<S: PointSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Self::Line(s) => s.rasterize_into(sink),
            Self::Rectangle(s) => s.rasterize_into(sink),
            Self::Circle(s) => s.rasterize_into(sink),
            Self::Ellipse(s) => s.rasterize_into(sink),
            Self::Triangle(s) => s.rasterize_into(sink),
            Self::Brush(s) => s.rasterize_into(sink),
        }
    }

    fn hit_test(&self, probe: Point, tolerance: f32) -> bool {
        match self {
            Self::Line(s) => s.hit_test(probe, tolerance),
            Self::Rectangle(s) => s.hit_test(probe, tolerance),
            Self::Circle(s) => s.hit_test(probe, tolerance),
            Self::Ellipse(s) => s.hit_test(probe, tolerance),
            Self::Triangle(s) => s.hit_test(probe, tolerance),
            Self::Brush(s) => s.hit_test(probe, tolerance),
        }
    }
}

impl From<Line> for Shape {
    fn from(shape: Line) -> Self {
        Self::Line(shape)
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Self::Rectangle(shape)
    }
}

impl From<Circle> for Shape {
    fn from(shape: Circle) -> Self {
        Self::Circle(shape)
    }
}

impl From<Ellipse> for Shape {
    fn from(shape: Ellipse) -> Self {
        Self::Ellipse(shape)
    }
}

impl From<Triangle> for Shape {
    fn from(shape: Triangle) -> Self {
        Self::Triangle(shape)
    }
}

impl From<BrushStroke> for Shape {
    fn from(shape: BrushStroke) -> Self {
        Self::Brush(shape)
    }
}
