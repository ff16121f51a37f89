//! Tool identifiers and the settings the UI layer edits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::eraser::EraserMode;
use crate::error::ToolParseError;
use crate::geometry::{Color, Point};
use crate::shape::{Circle, Ellipse, Line, MIN_THICKNESS, Rectangle, Shape, ShapeStyle, Triangle};

/// Every tool the surface understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Line,
    Rectangle,
    Circle,
    Ellipse,
    Triangle,
    Brush,
    Eraser,
    ZoomArea,
}

impl ToolKind {
    pub const ALL: [Self; 8] = [
        Self::Line,
        Self::Rectangle,
        Self::Circle,
        Self::Ellipse,
        Self::Triangle,
        Self::Brush,
        Self::Eraser,
        Self::ZoomArea,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Ellipse => "Ellipse",
            Self::Triangle => "Triangle",
            Self::Brush => "Brush",
            Self::Eraser => "Eraser",
            Self::ZoomArea => "ZoomArea",
        }
    }

    /// Whether the tool's shape is defined by a press point and a drag point.
    #[must_use]
    pub fn is_drag_shape(self) -> bool {
        matches!(
            self,
            Self::Line | Self::Rectangle | Self::Circle | Self::Ellipse | Self::Triangle
        )
    }

    /// Builds the shape a drag from `start` to `end` describes.
    ///
    /// Tools that don't produce a single-drag shape return `None`.
    #[must_use]
    pub fn drag_shape(self, start: Point, end: Point, style: ShapeStyle) -> Option<Shape> {
        let shape = match self {
            Self::Line => Line::new(start, end, style).into(),
            Self::Rectangle => Rectangle::new(start, end, style).into(),
            Self::Circle => Circle::from_drag(start, end, style).into(),
            Self::Ellipse => Ellipse::from_drag(start, end, style).into(),
            Self::Triangle => Triangle::from_drag(start, end, style).into(),
            Self::Brush | Self::Eraser | Self::ZoomArea => return None,
        };
        Some(shape)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = ToolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ToolParseError::UnknownTool(s.to_string()))
    }
}

/// The active tool and the style new shapes are created with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub tool: ToolKind,
    pub color: Color,
    pub thickness: f32,
    pub filled: bool,
    pub eraser_mode: EraserMode,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::default(),
            color: Color::RED,
            thickness: 1.0,
            filled: false,
            eraser_mode: EraserMode::default(),
        }
    }
}

impl ToolSettings {
    /// `thickness` raised to [`MIN_THICKNESS`]; the field itself is edited
    /// freely and may come back from storage out of range.
    #[must_use]
    pub fn stroke_thickness(&self) -> f32 {
        if self.thickness >= MIN_THICKNESS { self.thickness } else { MIN_THICKNESS }
    }

    /// Style for a shape started now.
    #[must_use]
    pub fn shape_style(&self) -> ShapeStyle {
        ShapeStyle::new(self.color, self.thickness, self.filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tool_names_case_insensitively() {
        assert_eq!("rectangle".parse::<ToolKind>(), Ok(ToolKind::Rectangle));
        assert_eq!(" Brush ".parse::<ToolKind>(), Ok(ToolKind::Brush));
        assert_eq!("ZOOMAREA".parse::<ToolKind>(), Ok(ToolKind::ZoomArea));
    }

    #[test]
    fn unknown_tool_is_an_error_value() {
        let error = "Hexagon".parse::<ToolKind>().unwrap_err();
        assert_eq!(error, ToolParseError::UnknownTool("Hexagon".to_string()));
        assert_eq!(error.to_string(), "Unknown tool: Hexagon");
    }

    #[test]
    fn only_drag_tools_build_shapes() {
        let style = ToolSettings::default().shape_style();
        let (a, b) = (Point::new(0.0, 0.0), Point::new(0.2, 0.1));
        for tool in ToolKind::ALL {
            assert_eq!(tool.drag_shape(a, b, style).is_some(), tool.is_drag_shape(), "{tool}");
        }
    }

    #[test]
    fn shape_style_clamps_thickness() {
        let settings = ToolSettings { thickness: 0.2, ..ToolSettings::default() };
        assert_eq!(settings.shape_style().thickness(), 1.0);
        assert_eq!(settings.stroke_thickness(), 1.0);

        let unset = ToolSettings { thickness: f32::NAN, ..ToolSettings::default() };
        assert_eq!(unset.stroke_thickness(), 1.0);
    }
}
