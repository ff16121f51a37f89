use egui::{Pos2, Vec2};

use crate::config::SurfaceConfig;
use crate::geometry::Point;

/// Arrow-key pan directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Maps device pixels to drawing space and back.
///
/// Device space has its origin at the canvas' top-left corner with y pointing
/// down. Drawing space is centered, y up, and spans `[-aspect, aspect]` by
/// `[-1, 1]` at zoom 1 with no pan:
///
/// `drawing = ndc / zoom - pan`, where `ndc` is the device position scaled to
/// `[-aspect, aspect] × [-1, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateMapper {
    width: f32,
    height: f32,
    zoom: f32,
    pan: Vec2,
    min_zoom: f32,
    max_zoom: f32,
    zoom_step: f32,
    pan_step: f32,
}

impl CoordinateMapper {
    pub const DEFAULT_VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    #[must_use]
    pub fn new(config: &SurfaceConfig) -> Self {
        Self {
            width: Self::DEFAULT_VIEWPORT.x,
            height: Self::DEFAULT_VIEWPORT.y,
            zoom: 1.0,
            pan: Vec2::ZERO,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            zoom_step: config.zoom_step,
            pan_step: config.pan_step,
        }
    }

    /// Updates the device size. Non-positive sizes are ignored and reported.
    pub fn set_viewport(&mut self, size: Vec2) -> bool {
        if !(size.x > 0.0 && size.y > 0.0) {
            log::warn!("Ignoring degenerate viewport {}x{}", size.x, size.y);
            return false;
        }

        self.width = size.x;
        self.height = size.y;
        true
    }

    #[must_use]
    pub fn viewport(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Device pixel → drawing space.
    #[must_use]
    pub fn to_drawing(&self, device: Pos2) -> Point {
        let ndc_x = (device.x / self.width * 2.0 - 1.0) * self.aspect_ratio();
        let ndc_y = 1.0 - device.y / self.height * 2.0;
        Point::new(ndc_x / self.zoom - self.pan.x, ndc_y / self.zoom - self.pan.y)
    }

    /// Drawing space → device pixel.
    #[must_use]
    pub fn to_device(&self, point: Point) -> Pos2 {
        let ndc_x = (point.x + self.pan.x) * self.zoom;
        let ndc_y = (point.y + self.pan.y) * self.zoom;
        Pos2::new(
            (ndc_x / self.aspect_ratio() + 1.0) / 2.0 * self.width,
            (1.0 - ndc_y) / 2.0 * self.height,
        )
    }

    /// Pixels per drawing-space unit at the current zoom.
    #[must_use]
    pub fn pixels_per_unit(&self) -> f32 {
        self.height / 2.0 * self.zoom
    }

    /// Sets the zoom if it lies within the configured limits.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        if !(self.min_zoom..=self.max_zoom).contains(&zoom) {
            return false;
        }

        self.zoom = zoom;
        true
    }

    /// One step closer, stopping at `max_zoom`. False when already there.
    pub fn zoom_in(&mut self) -> bool {
        self.step_zoom(self.zoom_step)
    }

    /// One step further out, stopping at `min_zoom`. False when already there.
    pub fn zoom_out(&mut self) -> bool {
        self.step_zoom(-self.zoom_step)
    }

    /// Repeated f32 steps drift off the limits, so the result is clamped
    /// rather than rejected.
    fn step_zoom(&mut self, delta: f32) -> bool {
        let zoom = (self.zoom + delta).clamp(self.min_zoom, self.max_zoom);
        if zoom == self.zoom {
            return false;
        }

        self.zoom = zoom;
        true
    }

    /// Zoom 1, no pan.
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan = Vec2::ZERO;
    }

    /// Pans so that content follows a pointer that moved by `delta` pixels.
    pub fn pan_by_device_delta(&mut self, delta: Vec2) {
        self.pan.x += delta.x / self.width * 2.0 * self.aspect_ratio() / self.zoom;
        self.pan.y -= delta.y / self.height * 2.0 / self.zoom;
    }

    /// One arrow-key step, shorter when zoomed in.
    pub fn pan_step(&mut self, direction: PanDirection) {
        let step = self.pan_step / self.zoom;
        match direction {
            PanDirection::Left => self.pan.x += step,
            PanDirection::Right => self.pan.x -= step,
            PanDirection::Up => self.pan.y -= step,
            PanDirection::Down => self.pan.y += step,
        }
    }

    /// Zooms so the drawing-space box between `a` and `b` fills the viewport,
    /// centered on it.
    ///
    /// Boxes with a side shorter than `min_size` are ignored, and so is a
    /// fitting zoom outside the configured limits.
    pub fn zoom_to_area(&mut self, a: Point, b: Point, min_size: f32) -> bool {
        let width = (b.x - a.x).abs();
        let height = (b.y - a.y).abs();
        if width < min_size || height < min_size {
            return false;
        }

        let zoom = (2.0 * self.aspect_ratio() / width).min(2.0 / height);
        if !self.set_zoom(zoom) {
            log::info!("Zoom {zoom:.2} for the selected area is out of range");
            return false;
        }

        let center = a.midpoint(b);
        self.pan = Vec2::new(-center.x, -center.y);
        true
    }
}

impl Default for CoordinateMapper {
    fn default() -> Self {
        Self::new(&SurfaceConfig::default())
    }
}
