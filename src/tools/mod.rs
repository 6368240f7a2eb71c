use serde::{Deserialize, Serialize};

/// Shape a press on the canvas creates when move mode is off
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawingTool {
    #[default]
    Line,
    Rectangle,
    Ellipse,
    QuadCurve,
}

impl DrawingTool {
    pub const ALL: [DrawingTool; 4] = [
        DrawingTool::Line,
        DrawingTool::Rectangle,
        DrawingTool::Ellipse,
        DrawingTool::QuadCurve,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DrawingTool::Line => "╱ Line",
            DrawingTool::Rectangle => "▭ Rectangle",
            DrawingTool::Ellipse => "◯ Ellipse",
            DrawingTool::QuadCurve => "∿ Curve",
        }
    }
}
