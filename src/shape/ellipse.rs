use egui::{Pos2, Rect};

use super::{FillFrame, Fillable, Shape, ShapeBase, ShapeKind, ShapeStyle};
use crate::error::ShapeError;
use crate::geometry::{HIT_TOLERANCE, distance_to_line_segment, ellipse_points};
use crate::surface::{Paint, Surface};

/// Ellipse inscribed in an axis-aligned frame
#[derive(Debug, Clone, PartialEq)]
pub struct Ellipse {
    base: ShapeBase,
    frame: FillFrame,
}

impl Ellipse {
    pub fn new(style: ShapeStyle, filled: bool, p1: Pos2, p2: Pos2) -> Self {
        Self {
            base: ShapeBase::new(style),
            frame: FillFrame::new(p1, p2, filled),
        }
    }

    pub fn frame(&self) -> &FillFrame {
        &self.frame
    }

    pub fn rect(&self) -> Rect {
        self.frame.rect()
    }
}

impl Fillable for Ellipse {
    fn is_filled(&self) -> bool {
        self.frame.filled()
    }

    fn set_filled(&mut self, filled: bool) {
        self.frame.set_filled(filled);
    }

    fn fill_shape(&self, surface: &mut dyn Surface, paint: &Paint) {
        surface.fill_polygon(&ellipse_points(self.frame.rect()), paint);
    }
}

impl Shape for Ellipse {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn draw_shape(&self, surface: &mut dyn Surface, paint: &Paint) {
        surface.stroke_path(&ellipse_points(self.frame.rect()), true, paint);
    }

    fn render(&self, surface: &mut dyn Surface) {
        let paint = self.style().paint();
        if self.is_filled() {
            self.fill_shape(surface, &paint);
        }
        self.draw_shape(surface, &paint);
    }

    fn location(&self) -> Pos2 {
        self.frame.rect().min
    }

    fn set_location(&mut self, pos: Pos2) -> Result<(), ShapeError> {
        self.frame.set_location(pos);
        Ok(())
    }

    fn contains(&self, point: Pos2) -> Result<bool, ShapeError> {
        let rect = self.frame.rect();
        // A flat frame has no interior; treat it like the segment it collapsed to.
        if rect.width() == 0.0 || rect.height() == 0.0 {
            return Ok(distance_to_line_segment(point, rect.min, rect.max) <= HIT_TOLERANCE);
        }

        let center = rect.center();
        let dx = (point.x - center.x) / (rect.width() / 2.0);
        let dy = (point.y - center.y) / (rect.height() / 2.0);
        Ok(dx * dx + dy * dy <= 1.0)
    }

    fn update_shape(&mut self, point: Pos2) {
        self.frame.update(point);
    }

    fn bounds(&self) -> Result<Rect, ShapeError> {
        Ok(self.frame.rect())
    }
}
