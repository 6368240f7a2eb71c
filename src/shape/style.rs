use egui::Color32;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::surface::Paint;

/// Opacity used for shapes drawn with the transparency flag
pub const TRANSPARENT_OPACITY: f32 = 0.5;

/// Stable identity of a shape on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual settings copied onto every shape when it is created
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub color: Color32,
    /// Stroke width in pixels, never below 1
    pub stroke_width: u32,
    pub transparent: bool,
    pub antialiased: bool,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            stroke_width: 5,
            transparent: false,
            antialiased: false,
        }
    }
}

impl ShapeStyle {
    pub fn opacity(&self) -> f32 {
        if self.transparent { TRANSPARENT_OPACITY } else { 1.0 }
    }

    pub fn paint(&self) -> Paint {
        Paint::new(self.color, self.stroke_width.max(1) as f32)
            .with_opacity(self.opacity())
            .with_antialias(self.antialiased)
    }
}

/// Fields every shape variant carries
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBase {
    pub(crate) id: ShapeId,
    pub(crate) style: ShapeStyle,
    pub(crate) selected: bool,
}

impl ShapeBase {
    pub fn new(style: ShapeStyle) -> Self {
        Self {
            id: ShapeId::new(),
            style,
            selected: false,
        }
    }
}
