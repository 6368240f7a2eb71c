use egui::{Color32, Pos2, Rect};

use crate::geometry::{dash_segments, rect_corners};

mod painter;
mod raster;

pub use painter::PainterSurface;
pub use raster::RasterSurface;

/// Per-draw paint settings derived from a shape's style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color32,
    pub width: f32,
    /// Multiplied into the colour's own alpha when compositing
    pub opacity: f32,
    pub antialias: bool,
}

impl Paint {
    pub fn new(color: Color32, width: f32) -> Self {
        Self {
            color,
            width,
            opacity: 1.0,
            antialias: false,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }
}

/// Anything shapes can be drawn into.
///
/// All coordinates are canvas coordinates; implementations map them to
/// their own space.
pub trait Surface {
    /// Fill the interior of a closed polygon
    fn fill_polygon(&mut self, points: &[Pos2], paint: &Paint);

    /// Stroke a polyline, joining the last point back to the first when `closed`
    fn stroke_path(&mut self, points: &[Pos2], closed: bool, paint: &Paint);

    /// Stroke a path with an on/off dash pattern
    fn stroke_dashed(&mut self, points: &[Pos2], closed: bool, paint: &Paint, dash: f32, gap: f32) {
        for piece in dash_segments(points, closed, dash, gap) {
            self.stroke_path(&piece, false, paint);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, paint: &Paint) {
        self.stroke_path(&rect_corners(rect), true, paint);
    }
}
