use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::geometry::Color;

/// Tunables for a [`crate::DrawingSurface`].
///
/// Missing fields fall back to their defaults when deserializing, so a config
/// file only has to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Clear color of the canvas, and the color point-erase paints with.
    pub background: Color,
    /// Shape-erase hit radius per unit of thickness, in drawing units.
    pub eraser_tolerance_per_thickness: f32,
    /// Point-erase strokes are this many times thicker than the brush.
    pub point_eraser_thickness_factor: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_step: f32,
    /// Drawing units moved per arrow-key press at zoom 1.
    pub pan_step: f32,
    /// Zoom-to-area selections narrower or shorter than this are ignored.
    pub min_zoom_area: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            eraser_tolerance_per_thickness: 0.02,
            point_eraser_thickness_factor: 2.0,
            min_zoom: 0.1,
            max_zoom: 5.0,
            zoom_step: 0.1,
            pan_step: 0.1,
            min_zoom_area: 0.01,
        }
    }
}

impl SurfaceConfig {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("eraser_tolerance_per_thickness", self.eraser_tolerance_per_thickness),
            ("point_eraser_thickness_factor", self.point_eraser_thickness_factor),
            ("min_zoom", self.min_zoom),
            ("zoom_step", self.zoom_step),
            ("pan_step", self.pan_step),
            ("min_zoom_area", self.min_zoom_area),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if !(self.min_zoom <= self.max_zoom && self.max_zoom.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "zoom range is empty: min_zoom {} > max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SurfaceConfig::from_json(r#"{ "max_zoom": 8.0 }"#).unwrap();
        assert_eq!(config.max_zoom, 8.0);
        assert_eq!(config.background, Color::WHITE);
        assert_eq!(config.point_eraser_thickness_factor, 2.0);
    }

    #[test]
    fn background_is_an_rgb_object() {
        let config =
            SurfaceConfig::from_json(r#"{ "background": { "r": 10, "g": 20, "b": 30 } }"#).unwrap();
        assert_eq!(config.background, Color::rgb(10, 20, 30));
    }

    #[test]
    fn rejects_inverted_zoom_range() {
        let result = SurfaceConfig::from_json(r#"{ "min_zoom": 2.0, "max_zoom": 1.0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let result = SurfaceConfig::from_json(r#"{ "eraser_tolerance_per_thickness": 0.0 }"#);
        let error = result.unwrap_err();
        assert!(error.to_string().contains("eraser_tolerance_per_thickness"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(SurfaceConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn serialized_defaults_load_back() {
        let json = SurfaceConfig::default().to_json().unwrap();
        assert_eq!(SurfaceConfig::from_json(&json).unwrap(), SurfaceConfig::default());
    }
}
