//! Scan conversion of continuous geometry into plotted points.
//!
//! Every algorithm here steps on integer fixed-point coordinates: drawing-space
//! values are multiplied by [`FIXED_SCALE`] and rounded before any stepping
//! happens, and converted back only when a point is emitted. One fixed unit is
//! therefore the sampling granularity of every outline and fill (0.001 drawing
//! units).

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::geometry::{Color, Point};

mod conic;
mod fill;
mod line;

pub use conic::{midpoint_circle, midpoint_ellipse};
pub use fill::{fill_rect, fill_triangle};
pub use line::bresenham_line;

/// Fixed-point units per drawing-space unit.
pub const FIXED_SCALE: i64 = 1000;

/// Converts a drawing-space coordinate to fixed-point units.
#[must_use]
pub fn to_fixed(value: f32) -> i64 {
    (f64::from(value) * FIXED_SCALE as f64).round() as i64
}

/// Converts fixed-point units back to drawing space.
#[must_use]
pub fn from_fixed(value: i64) -> f32 {
    (value as f64 / FIXED_SCALE as f64) as f32
}

/// Color and point size used for every point an algorithm emits.
///
/// Thickness only scales how big a plotted point is rendered. It never changes
/// the step size of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub thickness: f32,
}

impl Pen {
    #[must_use]
    pub const fn new(color: Color, thickness: f32) -> Self {
        Self { color, thickness }
    }
}

/// A single point handed to a sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottedPoint {
    pub position: Point,
    pub color: Color,
    pub thickness: f32,
}

impl PlottedPoint {
    /// The position in fixed-point units, exact for anything a rasterizer emitted.
    #[must_use]
    pub fn fixed(&self) -> (i64, i64) {
        (to_fixed(self.position.x), to_fixed(self.position.y))
    }
}

/// Inclusive rectangle in fixed-point units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedBounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl FixedBounds {
    /// The box spanned by two drawing-space corners, snapped to the grid the
    /// rasterizers step on.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        let (ax, ay) = (to_fixed(a.x), to_fixed(a.y));
        let (bx, by) = (to_fixed(b.x), to_fixed(b.y));
        Self {
            min_x: ax.min(bx),
            min_y: ay.min(by),
            max_x: ax.max(bx),
            max_y: ay.max(by),
        }
    }

    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

/// The primitive every rasterizer bottoms out in: plot one point.
pub trait PointSink {
    fn plot(&mut self, position: Point, pen: Pen);

    /// Plots every grid point of row `y` from `x_min` to `x_max` inclusive.
    ///
    /// Sinks that can draw a whole run at once override this.
    fn plot_run(&mut self, x_min: i64, x_max: i64, y: i64, pen: Pen) {
        for x in x_min..=x_max {
            self.plot(Point::new(from_fixed(x), from_fixed(y)), pen);
        }
    }

    /// The region worth filling for `pen`. Fills skip rows and columns
    /// outside it; `None` means everything is kept.
    fn clip(&self, _pen: Pen) -> Option<FixedBounds> {
        None
    }
}

impl PointSink for Vec<PlottedPoint> {
    fn plot(&mut self, position: Point, pen: Pen) {
        self.push(PlottedPoint {
            position,
            color: pen.color,
            thickness: pen.thickness,
        });
    }
}

/// Emits a point given in fixed-point units.
fn plot_fixed<S: PointSink + ?Sized>(sink: &mut S, x: i64, y: i64, pen: Pen) {
    sink.plot(Point::new(from_fixed(x), from_fixed(y)), pen);
}

/// Emits every grid point of the row `y` between `x_min` and `x_max` inclusive
/// that survives the sink's clip.
fn plot_span<S: PointSink + ?Sized>(sink: &mut S, x_min: i64, x_max: i64, y: i64, pen: Pen) {
    let (x_min, x_max) = match sink.clip(pen) {
        Some(bounds) if !(bounds.min_y..=bounds.max_y).contains(&y) => return,
        Some(bounds) => (x_min.max(bounds.min_x), x_max.min(bounds.max_x)),
        None => (x_min, x_max),
    };
    if x_min <= x_max {
        sink.plot_run(x_min, x_max, y, pen);
    }
}

/// The rows of `y_min..=y_max` the sink's clip keeps.
fn visible_rows<S: PointSink + ?Sized>(
    sink: &S,
    y_min: i64,
    y_max: i64,
    pen: Pen,
) -> RangeInclusive<i64> {
    match sink.clip(pen) {
        Some(bounds) => y_min.max(bounds.min_y)..=y_max.min(bounds.max_y),
        None => y_min..=y_max,
    }
}

/// Horizontal spans centered on a conic's center, keyed by row offset.
///
/// The midpoint walks visit some rows several times with growing half-widths;
/// keeping only the widest per row emits the union of those bands exactly once.
#[derive(Default)]
struct CenteredSpans {
    half_widths: BTreeMap<i64, i64>,
}

impl CenteredSpans {
    fn record(&mut self, row: i64, half_width: i64) {
        let entry = self.half_widths.entry(row).or_insert(half_width);
        *entry = (*entry).max(half_width);
    }

    fn emit<S: PointSink + ?Sized>(&self, sink: &mut S, cx: i64, cy: i64, pen: Pen) {
        let rows = visible_rows(sink, cy + self.first_row(), cy + self.last_row(), pen);
        let (first, last) = (*rows.start() - cy, *rows.end() - cy);
        if first > last {
            return;
        }
        for (&row, &half_width) in self.half_widths.range(first..=last) {
            plot_span(sink, cx - half_width, cx + half_width, cy + row, pen);
        }
    }

    fn first_row(&self) -> i64 {
        self.half_widths.keys().next().copied().unwrap_or(0)
    }

    fn last_row(&self) -> i64 {
        self.half_widths.keys().next_back().copied().unwrap_or(0)
    }
}
