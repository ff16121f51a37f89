//! The two eraser strategies.
//!
//! Point erase paints over the canvas with the background color and never
//! deletes anything, so it only hides shapes committed before the erase
//! stroke. Shape erase deletes every committed shape the pointer touches.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::SurfaceConfig;
use crate::error::ToolParseError;
use crate::geometry::Point;
use crate::scene::Scene;
use crate::shape::{BrushStroke, Drawable, ShapeStyle};
use crate::tools::ToolSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EraserMode {
    /// Overdraw with the background color.
    #[default]
    Point,
    /// Delete whole shapes under the pointer.
    Shape,
}

impl EraserMode {
    pub const ALL: [Self; 2] = [Self::Point, Self::Shape];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Shape => "shape",
        }
    }
}

impl fmt::Display for EraserMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EraserMode {
    type Err = ToolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "point" | "pointeraser" => Ok(Self::Point),
            "shape" | "shapeeraser" => Ok(Self::Shape),
            _ => Err(ToolParseError::UnknownEraserMode(s.to_string())),
        }
    }
}

/// An eraser configured from the live settings.
///
/// Built fresh for every pointer sample, so thickness changes made mid-gesture
/// take effect on the next sample.
#[derive(Debug, Clone, Copy)]
pub struct Eraser<'a> {
    config: &'a SurfaceConfig,
    settings: &'a ToolSettings,
}

impl<'a> Eraser<'a> {
    #[must_use]
    pub fn new(config: &'a SurfaceConfig, settings: &'a ToolSettings) -> Self {
        Self { config, settings }
    }

    #[must_use]
    pub fn mode(&self) -> EraserMode {
        self.settings.eraser_mode
    }

    /// Shape-erase hit radius in drawing units.
    #[must_use]
    pub fn tolerance(&self) -> f32 {
        self.config.eraser_tolerance_per_thickness * self.settings.stroke_thickness()
    }

    /// Style of the background-colored stroke point erase leaves behind.
    #[must_use]
    pub fn stroke_style(&self) -> ShapeStyle {
        ShapeStyle::new(
            self.config.background,
            self.settings.stroke_thickness() * self.config.point_eraser_thickness_factor,
            false,
        )
    }

    pub fn press(&self, scene: &mut Scene, at: Point) {
        match self.mode() {
            EraserMode::Point => {
                scene.set_current(Some(BrushStroke::starting_at(at, self.stroke_style()).into()));
            }
            EraserMode::Shape => {
                self.erase_shapes_at(scene, at);
            }
        }
    }

    pub fn drag(&self, scene: &mut Scene, at: Point) {
        match self.mode() {
            EraserMode::Point => {
                if let Some(trail) = scene.current_mut().and_then(|shape| shape.as_brush_mut()) {
                    trail.add_point(at);
                } else {
                    // Mode switched mid-gesture: start a trail here.
                    scene.set_current(Some(BrushStroke::starting_at(at, self.stroke_style()).into()));
                }
            }
            EraserMode::Shape => {
                self.erase_shapes_at(scene, at);
            }
        }
    }

    /// Ends the gesture. A point-erase trail is committed; nothing else is.
    pub fn release(&self, scene: &mut Scene) {
        match self.mode() {
            EraserMode::Point => {
                if scene.commit_current() {
                    log::debug!("Committed point-erase stroke; {} shapes", scene.len());
                }
            }
            EraserMode::Shape => scene.discard_current(),
        }
    }

    /// Deletes every committed shape within tolerance of `at`.
    pub fn erase_shapes_at(&self, scene: &mut Scene, at: Point) -> usize {
        let tolerance = self.tolerance();
        let removed = scene.remove_where(|shape| shape.hit_test(at, tolerance));
        if removed > 0 {
            log::debug!("Shape eraser removed {removed} shape(s) at ({:.3}, {:.3})", at.x, at.y);
        }
        removed
    }
}
