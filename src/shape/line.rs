use egui::{Pos2, Rect};

use super::{Shape, ShapeBase, ShapeKind, ShapeStyle};
use crate::error::ShapeError;
use crate::geometry::{HIT_TOLERANCE, calculate_bounds, distance_to_line};
use crate::surface::{Paint, Surface};

/// Straight segment; `update_shape` drags the second endpoint.
///
/// Hit testing measures the perpendicular distance to the line through both
/// endpoints, so the extension past either end also picks the line.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    base: ShapeBase,
    p1: Pos2,
    p2: Pos2,
}

impl Line {
    pub fn new(style: ShapeStyle, p1: Pos2, p2: Pos2) -> Self {
        Self {
            base: ShapeBase::new(style),
            p1,
            p2,
        }
    }

    pub fn p1(&self) -> Pos2 {
        self.p1
    }

    pub fn p2(&self) -> Pos2 {
        self.p2
    }

    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }
}

impl Shape for Line {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn draw_shape(&self, surface: &mut dyn Surface, paint: &Paint) {
        surface.stroke_path(&[self.p1, self.p2], false, paint);
    }

    fn location(&self) -> Pos2 {
        self.p1
    }

    fn set_location(&mut self, pos: Pos2) -> Result<(), ShapeError> {
        let delta = pos - self.p1;
        self.p1 = pos;
        self.p2 += delta;
        Ok(())
    }

    fn contains(&self, point: Pos2) -> Result<bool, ShapeError> {
        let distance = if self.is_degenerate() {
            self.p1.distance(point)
        } else {
            distance_to_line(point, self.p1, self.p2)
        };
        Ok(distance <= HIT_TOLERANCE)
    }

    fn update_shape(&mut self, point: Pos2) {
        self.p2 = point;
    }

    fn bounds(&self) -> Result<Rect, ShapeError> {
        Ok(calculate_bounds(&[self.p1, self.p2], 0.0))
    }
}
