use egui::{Pos2, Rect};

use super::{FillFrame, Fillable, Shape, ShapeBase, ShapeKind, ShapeStyle};
use crate::error::ShapeError;
use crate::geometry::rect_corners;
use crate::surface::{Paint, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    base: ShapeBase,
    frame: FillFrame,
}

impl Rectangle {
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

impl Fillable for Rectangle {
    fn is_filled(&self) -> bool {
        self.frame.filled()
    }

    fn set_filled(&mut self, filled: bool) {
        self.frame.set_filled(filled);
    }

    fn fill_shape(&self, surface: &mut dyn Surface, paint: &Paint) {
        surface.fill_polygon(&rect_corners(self.frame.rect()), paint);
    }
}

impl Shape for Rectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn draw_shape(&self, surface: &mut dyn Surface, paint: &Paint) {
        surface.stroke_rect(self.frame.rect(), paint);
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
        Ok(self.frame.rect().contains(point))
    }

    fn update_shape(&mut self, point: Pos2) {
        self.frame.update(point);
    }

    fn bounds(&self) -> Result<Rect, ShapeError> {
        Ok(self.frame.rect())
    }
}
