//! Presents a [`DrawingSurface`] through egui.

use std::collections::HashSet;

use egui::{Color32, Mesh, Painter, Pos2, Rect, Stroke, Vec2};

use crate::geometry::Point;
use crate::mapper::CoordinateMapper;
use crate::raster::{FixedBounds, Pen, PointSink, from_fixed};
use crate::shape::Drawable;
use crate::surface::DrawingSurface;

const CURSOR_OUTLINE_COLOR: Color32 = Color32::GRAY;

/// Device pixels and fill runs already drawn for the current shape.
#[derive(Debug, Default)]
pub struct Coverage {
    pixels: HashSet<(i32, i32)>,
    /// Row, left and right pixel of each run.
    runs: HashSet<(i32, i32, i32)>,
}

impl Coverage {
    fn clear(&mut self) {
        self.pixels.clear();
        self.runs.clear();
    }
}

/// A [`PointSink`] that turns plotted points into square device-pixel quads,
/// the way fixed-function point sprites look.
///
/// The rasterizers sample far finer than a device pixel, so points landing on
/// an already-covered pixel are skipped until [`ScreenSink::next_shape`]
/// starts a new layer. Fill runs become one quad each, clipped to the canvas.
pub struct ScreenSink<'a> {
    mapper: &'a CoordinateMapper,
    clip: Rect,
    mesh: &'a mut Mesh,
    covered: &'a mut Coverage,
}

impl<'a> ScreenSink<'a> {
    pub fn new(
        mapper: &'a CoordinateMapper,
        clip: Rect,
        mesh: &'a mut Mesh,
        covered: &'a mut Coverage,
    ) -> Self {
        covered.clear();
        Self { mapper, clip, mesh, covered }
    }

    /// Later shapes must overdraw earlier ones, so coverage resets per shape.
    pub fn next_shape(&mut self) {
        self.covered.clear();
    }

    fn to_screen(&self, position: Point) -> Pos2 {
        self.clip.min + self.mapper.to_device(position).to_vec2()
    }
}

impl PointSink for ScreenSink<'_> {
    fn plot(&mut self, position: Point, pen: Pen) {
        let device = self.to_screen(position);
        let size = pen.thickness.max(1.0);
        if !self.clip.expand(size).contains(device) {
            return;
        }

        let pixel = (device.x.floor() as i32, device.y.floor() as i32);
        if self.covered.pixels.insert(pixel) {
            self.mesh
                .add_colored_rect(Rect::from_center_size(device, Vec2::splat(size)), pen.color.into());
        }
    }

    fn plot_run(&mut self, x_min: i64, x_max: i64, y: i64, pen: Pen) {
        let y = from_fixed(y);
        let left = self.to_screen(Point::new(from_fixed(x_min), y));
        let right = self.to_screen(Point::new(from_fixed(x_max), y));
        let half = pen.thickness.max(1.0) / 2.0;

        let key = (left.y.floor() as i32, left.x.floor() as i32, right.x.floor() as i32);
        if self.covered.runs.insert(key) {
            let run = Rect::from_min_max(
                Pos2::new(left.x - half, left.y - half),
                Pos2::new(right.x + half, right.y + half),
            );
            self.mesh.add_colored_rect(run, pen.color.into());
        }
    }

    /// The canvas in drawing space, grown by the point size so quads
    /// straddling the edge still get drawn.
    fn clip(&self, pen: Pen) -> Option<FixedBounds> {
        let margin = Vec2::splat(pen.thickness.max(1.0));
        let size = self.clip.size();
        Some(FixedBounds::from_corners(
            self.mapper.to_drawing(Pos2::ZERO - margin),
            self.mapper.to_drawing(Pos2::ZERO + size + margin),
        ))
    }
}

/// Draws the background, every shape of the snapshot in order and the
/// cursor outline.
#[derive(Debug, Default)]
pub struct Renderer {
    covered: Coverage,
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints `surface` into `rect`. The surface's viewport should already
    /// match `rect`'s size.
    pub fn render(&mut self, surface: &DrawingSurface, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, Color32::from(surface.background()));

        let mut mesh = Mesh::default();
        let mut sink = ScreenSink::new(surface.mapper(), rect, &mut mesh, &mut self.covered);
        for shape in surface.snapshot_for_render() {
            sink.next_shape();
            shape.rasterize_into(&mut sink);
        }
        painter.add(egui::Shape::mesh(mesh));

        if let Some(outline) = surface.cursor_outline() {
            let center: Pos2 = rect.min + surface.mapper().to_device(outline.center).to_vec2();
            painter.circle_stroke(center, outline.radius, Stroke::new(1.0, CURSOR_OUTLINE_COLOR));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Color;
    use crate::raster::fill_rect;

    fn canvas() -> Rect {
        Rect::from_min_size(Pos2::ZERO, CoordinateMapper::DEFAULT_VIEWPORT)
    }

    #[test]
    fn points_within_one_pixel_are_drawn_once() {
        let mapper = CoordinateMapper::default();
        let mut mesh = Mesh::default();
        let mut covered = Coverage::default();
        let mut sink = ScreenSink::new(&mapper, canvas(), &mut mesh, &mut covered);

        let pen = Pen::new(Color::RED, 1.0);
        sink.plot(Point::new(0.0, 0.0), pen);
        sink.plot(Point::new(0.0005, 0.0), pen);
        sink.plot(Point::new(0.5, 0.0), pen);

        assert_eq!(mesh.vertices.len(), 8);
    }

    #[test]
    fn each_shape_overdraws_the_previous_one() {
        let mapper = CoordinateMapper::default();
        let mut mesh = Mesh::default();
        let mut covered = Coverage::default();
        let mut sink = ScreenSink::new(&mapper, canvas(), &mut mesh, &mut covered);

        sink.plot(Point::ORIGIN, Pen::new(Color::RED, 1.0));
        sink.next_shape();
        sink.plot(Point::ORIGIN, Pen::new(Color::WHITE, 2.0));

        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.vertices[4].color, Color32::WHITE);
    }

    #[test]
    fn points_off_canvas_are_culled() {
        let mapper = CoordinateMapper::default();
        let mut mesh = Mesh::default();
        let mut covered = Coverage::default();
        let mut sink = ScreenSink::new(&mapper, canvas(), &mut mesh, &mut covered);

        sink.plot(Point::new(10.0, 10.0), Pen::new(Color::RED, 1.0));
        assert!(mesh.vertices.is_empty());
    }

    #[test]
    fn huge_fill_is_clipped_to_the_canvas() {
        let mapper = CoordinateMapper::default();
        let mut mesh = Mesh::default();
        let mut covered = Coverage::default();
        let mut sink = ScreenSink::new(&mapper, canvas(), &mut mesh, &mut covered);

        // 8001 x 6001 grid points, most of them off screen.
        fill_rect(&mut sink, Point::new(-4.0, -3.0), Point::new(4.0, 3.0), Pen::new(Color::RED, 1.0));

        // At most one quad per device row, plus the margin rows.
        assert!(!mesh.vertices.is_empty());
        assert!(mesh.vertices.len() <= 4 * 610, "{} vertices", mesh.vertices.len());
        for vertex in &mesh.vertices {
            assert!(canvas().expand(3.0).contains(vertex.pos), "{:?}", vertex.pos);
        }
    }
}
