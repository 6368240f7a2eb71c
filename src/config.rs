use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::shape::ShapeStyle;
use crate::tools::DrawingTool;

/// Template the canvas copies onto each newly created shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to the defaults below
pub struct ToolSettings {
    pub tool: DrawingTool,
    pub color: Color32,
    pub stroke_width: u32,
    pub filled: bool,
    pub transparent: bool,
    pub antialiased: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: DrawingTool::Line,
            color: Color32::BLACK,
            stroke_width: 5,
            filled: false,
            transparent: false,
            antialiased: false,
        }
    }
}

impl ToolSettings {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stroke_width == 0 {
            return Err(ConfigError::InvalidValue(
                "stroke_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Style carried by shapes created from these settings
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle {
            color: self.color,
            stroke_width: self.stroke_width.max(1),
            transparent: self.transparent,
            antialiased: self.antialiased,
        }
    }
}
