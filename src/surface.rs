//! The drawing surface: one owner for the scene, the view and the tool
//! settings, driven by pointer events from the UI layer.

use egui::{PointerButton, Pos2, Vec2};

use crate::config::SurfaceConfig;
use crate::eraser::{Eraser, EraserMode};
use crate::error::ToolParseError;
use crate::geometry::{Color, Point};
use crate::input::InputEvent;
use crate::mapper::{CoordinateMapper, PanDirection};
use crate::scene::Scene;
use crate::shape::{BrushStroke, Drawable, Rectangle, Shape, ShapeStyle};
use crate::tools::{ToolKind, ToolSettings};

/// Outline color of the zoom-to-area selection.
const ZOOM_AREA_COLOR: Color = Color::BLUE;

/// State of a primary-button gesture between press and release.
#[derive(Debug, Clone, Copy)]
struct Gesture {
    tool: ToolKind,
    anchor: Point,
    /// Captured at press; later settings changes don't restyle the shape.
    style: ShapeStyle,
}

/// Hover indicator for the brush and the eraser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorOutline {
    pub center: Point,
    /// Radius in device pixels.
    pub radius: f32,
}

#[derive(Debug, Clone)]
pub struct DrawingSurface {
    scene: Scene,
    mapper: CoordinateMapper,
    config: SurfaceConfig,
    settings: ToolSettings,
    gesture: Option<Gesture>,
    pan_from: Option<Pos2>,
    hover: Option<Point>,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new(SurfaceConfig::default(), ToolSettings::default())
    }
}

impl DrawingSurface {
    #[must_use]
    pub fn new(config: SurfaceConfig, settings: ToolSettings) -> Self {
        Self {
            scene: Scene::new(),
            mapper: CoordinateMapper::new(&config),
            config,
            settings,
            gesture: None,
            pan_from: None,
            hover: None,
        }
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    #[must_use]
    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// Color, thickness, fill and eraser mode can change at any time. They
    /// apply to the next shape, and the eraser picks them up on its next
    /// sample. Use [`Self::set_tool`] to switch tools.
    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    /// Number of committed shapes.
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.scene.len()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    /// Committed shapes bottom first, then the ghost of the gesture in progress.
    #[must_use]
    pub fn snapshot_for_render(&self) -> Vec<&Shape> {
        self.scene.snapshot_for_render()
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.config.background
    }

    /// Changes the clear color. Point-erase strokes already committed keep
    /// the color they were painted with.
    pub fn set_background(&mut self, color: Color) {
        self.config.background = color;
    }

    /// Switches tools, abandoning any gesture in progress.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if self.settings.tool == tool {
            return;
        }

        self.cancel();
        self.settings.tool = tool;
        log::info!("Tool selected: {tool}");
    }

    /// Switches tools by name. Unknown names leave the current tool active.
    pub fn select_tool(&mut self, name: &str) -> Result<ToolKind, ToolParseError> {
        match name.parse::<ToolKind>() {
            Ok(tool) => {
                self.set_tool(tool);
                Ok(tool)
            }
            Err(err) => {
                log::warn!("{err}; keeping {}", self.settings.tool);
                Err(err)
            }
        }
    }

    /// Switches eraser modes by name. Unknown names leave the mode unchanged.
    pub fn select_eraser_mode(&mut self, name: &str) -> Result<EraserMode, ToolParseError> {
        let mode = name.parse::<EraserMode>().inspect_err(|err| log::warn!("{err}"))?;
        self.settings.eraser_mode = mode;
        Ok(mode)
    }

    /// Removes every committed shape.
    pub fn clear(&mut self) {
        log::info!("Clearing {} shape(s)", self.scene.len());
        self.scene.clear();
    }

    pub fn set_viewport(&mut self, size: Vec2) -> bool {
        self.mapper.set_viewport(size)
    }

    pub fn zoom_in(&mut self) {
        if self.mapper.zoom_in() {
            log::info!("Zoom: {:.0}%", self.mapper.zoom() * 100.0);
        }
    }

    pub fn zoom_out(&mut self) {
        if self.mapper.zoom_out() {
            log::info!("Zoom: {:.0}%", self.mapper.zoom() * 100.0);
        }
    }

    pub fn reset_view(&mut self) {
        self.mapper.reset_view();
        log::info!("View reset");
    }

    pub fn pan_step(&mut self, direction: PanDirection) {
        self.mapper.pan_step(direction);
    }

    /// The brush or eraser footprint at the hover position, when one of those
    /// tools is active.
    #[must_use]
    pub fn cursor_outline(&self) -> Option<CursorOutline> {
        let center = self.hover?;
        let radius = match self.settings.tool {
            ToolKind::Brush => self.settings.stroke_thickness() / 2.0,
            ToolKind::Eraser => {
                let eraser = self.eraser();
                match eraser.mode() {
                    EraserMode::Point => eraser.stroke_style().thickness() / 2.0,
                    EraserMode::Shape => eraser.tolerance() * self.mapper.pixels_per_unit(),
                }
            }
            _ => return None,
        };
        Some(CursorOutline { center, radius })
    }

    /// Feeds one UI event into the surface.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { position, button } => match button {
                PointerButton::Primary => self.press(position),
                PointerButton::Secondary | PointerButton::Middle => self.pan_from = Some(position),
                _ => {}
            },
            InputEvent::PointerMove { position } => {
                if let Some(from) = self.pan_from {
                    self.mapper.pan_by_device_delta(position - from);
                    self.pan_from = Some(position);
                } else if self.gesture.is_some() {
                    self.drag(position);
                }
                self.hover = Some(self.mapper.to_drawing(position));
            }
            InputEvent::PointerUp { position, button } => match button {
                PointerButton::Primary => self.release(position),
                PointerButton::Secondary | PointerButton::Middle => self.pan_from = None,
                _ => {}
            },
            InputEvent::PointerLeave => {
                self.hover = None;
                self.pan_from = None;
                self.cancel();
            }
            InputEvent::Zoom { factor } => {
                if factor > 1.0 {
                    self.zoom_in();
                } else if factor < 1.0 {
                    self.zoom_out();
                }
            }
            InputEvent::Cancel => self.cancel(),
        }
    }

    /// Starts a gesture at a device position.
    pub fn press(&mut self, device: Pos2) {
        if self.gesture.is_some() {
            self.cancel();
        }

        let at = self.mapper.to_drawing(device);
        let tool = self.settings.tool;
        let style = self.settings.shape_style();

        match tool {
            ToolKind::Brush => {
                self.scene.set_current(Some(BrushStroke::starting_at(at, style).into()));
            }
            ToolKind::Eraser => Eraser::new(&self.config, &self.settings).press(&mut self.scene, at),
            ToolKind::ZoomArea => self.scene.set_current(Some(zoom_area_ghost(at, at))),
            _ => self.scene.set_current(tool.drag_shape(at, at, style)),
        }

        self.gesture = Some(Gesture { tool, anchor: at, style });
        log::debug!("{tool} gesture started at ({:.3}, {:.3})", at.x, at.y);
    }

    /// Continues the gesture in progress. Without one this is a no-op.
    pub fn drag(&mut self, device: Pos2) {
        let Some(gesture) = self.gesture else {
            return;
        };
        let at = self.mapper.to_drawing(device);

        match gesture.tool {
            ToolKind::Brush => {
                if let Some(stroke) = self.scene.current_mut().and_then(Shape::as_brush_mut) {
                    stroke.add_point(at);
                }
            }
            ToolKind::Eraser => Eraser::new(&self.config, &self.settings).drag(&mut self.scene, at),
            ToolKind::ZoomArea => {
                self.scene.set_current(Some(zoom_area_ghost(gesture.anchor, at)));
            }
            tool => {
                self.scene.set_current(tool.drag_shape(gesture.anchor, at, gesture.style));
            }
        }
    }

    /// Finishes the gesture in progress, committing its shape.
    pub fn release(&mut self, device: Pos2) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };
        let at = self.mapper.to_drawing(device);

        match gesture.tool {
            ToolKind::Brush => self.commit(),
            ToolKind::Eraser => Eraser::new(&self.config, &self.settings).release(&mut self.scene),
            ToolKind::ZoomArea => {
                self.scene.discard_current();
                if self.mapper.zoom_to_area(gesture.anchor, at, self.config.min_zoom_area) {
                    log::info!("Zoomed to area: {:.0}%", self.mapper.zoom() * 100.0);
                }
            }
            tool => {
                self.scene.set_current(tool.drag_shape(gesture.anchor, at, gesture.style));
                self.commit();
            }
        }
    }

    /// Abandons the gesture in progress. Nothing it drew is committed.
    pub fn cancel(&mut self) {
        if let Some(gesture) = self.gesture.take() {
            log::debug!("{} gesture cancelled", gesture.tool);
        }
        self.scene.discard_current();
    }

    fn commit(&mut self) {
        let kind = self.scene.current().map(Drawable::kind_name);
        if self.scene.commit_current() {
            log::debug!("Committed {}; {} shape(s)", kind.unwrap_or("shape"), self.scene.len());
        }
    }

    fn eraser(&self) -> Eraser<'_> {
        Eraser::new(&self.config, &self.settings)
    }
}

fn zoom_area_ghost(anchor: Point, at: Point) -> Shape {
    Rectangle::new(anchor, at, ShapeStyle::new(ZOOM_AREA_COLOR, 1.0, false)).into()
}
