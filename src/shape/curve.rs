use egui::{Pos2, Rect};

use super::{Shape, ShapeBase, ShapeKind, ShapeStyle};
use crate::error::ShapeError;
use crate::geometry::{HIT_TOLERANCE, calculate_bounds, distance_to_path, point_in_polygon, quadratic_points};
use crate::surface::{Paint, Surface};

/// Quadratic Bézier built in two drags: first the end point, then the control point
#[derive(Debug, Clone, PartialEq)]
pub struct QuadCurve {
    base: ShapeBase,
    start: Pos2,
    control: Pos2,
    end: Pos2,
    /// When set, `update_shape` only moves the control point
    control_phase: bool,
}

impl QuadCurve {
    pub fn new(style: ShapeStyle, start: Pos2, end: Pos2, control: Pos2) -> Self {
        Self {
            base: ShapeBase::new(style),
            start,
            control,
            end,
            control_phase: false,
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn control(&self) -> Pos2 {
        self.control
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn control_phase(&self) -> bool {
        self.control_phase
    }

    pub fn set_control_phase(&mut self, control_phase: bool) {
        self.control_phase = control_phase;
    }

    fn flattened(&self) -> Vec<Pos2> {
        quadratic_points(self.start, self.control, self.end)
    }
}

impl Shape for QuadCurve {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::QuadCurve
    }

    fn draw_shape(&self, surface: &mut dyn Surface, paint: &Paint) {
        surface.stroke_path(&self.flattened(), false, paint);
    }

    fn location(&self) -> Pos2 {
        self.start
    }

    fn set_location(&mut self, pos: Pos2) -> Result<(), ShapeError> {
        let delta = pos - self.start;
        self.start = pos;
        self.control += delta;
        self.end += delta;
        Ok(())
    }

    /// Hit when inside the region closed by the curve and its chord, or on the stroke itself
    fn contains(&self, point: Pos2) -> Result<bool, ShapeError> {
        let path = self.flattened();
        Ok(distance_to_path(point, &path) <= HIT_TOLERANCE || point_in_polygon(point, &path))
    }

    fn update_shape(&mut self, point: Pos2) {
        self.control = point;
        if !self.control_phase {
            self.end = point;
        }
    }

    fn bounds(&self) -> Result<Rect, ShapeError> {
        Ok(calculate_bounds(&[self.start, self.control, self.end], 0.0))
    }
}
