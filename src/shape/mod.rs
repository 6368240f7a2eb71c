use egui::{Color32, Pos2, Rect, Vec2};

mod curve;
mod ellipse;
mod fillable;
mod line;
mod rectangle;
mod style;

pub use curve::QuadCurve;
pub use ellipse::Ellipse;
pub use fillable::{FillFrame, Fillable};
pub use line::Line;
pub use rectangle::Rectangle;
pub use style::{ShapeBase, ShapeId, ShapeStyle, TRANSPARENT_OPACITY};

use crate::error::ShapeError;
use crate::geometry::rect_corners;
use crate::surface::{Paint, Surface};

/// Side length of the square handles drawn on a selected shape's corners
pub const HANDLE_SIZE: f32 = 15.0;
const SELECTION_DASH: f32 = 4.0;
const SELECTION_COLOR: Color32 = Color32::from_rgb(30, 120, 255);

/// The concrete geometry a shape carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Ellipse,
    QuadCurve,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::QuadCurve => "quadratic curve",
        }
    }
}

/// Error for a capability a variant does not provide
pub fn unsupported(kind: ShapeKind, operation: &'static str) -> ShapeError {
    ShapeError::Unsupported {
        shape: kind.name(),
        operation,
    }
}

/// Common contract of everything that can live on the canvas.
///
/// `set_location`, `contains` and `bounds` default to reporting
/// [`ShapeError::Unsupported`]; a variant that cannot answer one of them
/// must leave the default in place rather than approximate.
pub trait Shape {
    fn base(&self) -> &ShapeBase;

    fn base_mut(&mut self) -> &mut ShapeBase;

    fn kind(&self) -> ShapeKind;

    fn id(&self) -> ShapeId {
        self.base().id
    }

    fn style(&self) -> &ShapeStyle {
        &self.base().style
    }

    fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.base_mut().style
    }

    fn is_selected(&self) -> bool {
        self.base().selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.base_mut().selected = selected;
    }

    /// Stroke the outline with the given paint
    fn draw_shape(&self, surface: &mut dyn Surface, paint: &Paint);

    /// Draw the shape itself, without any selection decoration
    fn render(&self, surface: &mut dyn Surface) {
        self.draw_shape(surface, &self.style().paint());
    }

    /// Draw the shape plus, when selected, its selection overlay
    fn draw(&self, surface: &mut dyn Surface) -> Result<(), ShapeError> {
        let overlay = if self.is_selected() { Some(self.bounds()?) } else { None };
        self.render(surface);
        if let Some(bounds) = overlay {
            draw_selection_overlay(surface, bounds);
        }
        Ok(())
    }

    /// Reference point: the start point for open shapes, top-left for framed ones
    fn location(&self) -> Pos2;

    /// Translate the whole shape so that `location()` becomes `pos`
    fn set_location(&mut self, _pos: Pos2) -> Result<(), ShapeError> {
        Err(unsupported(self.kind(), "set_location"))
    }

    fn contains(&self, _point: Pos2) -> Result<bool, ShapeError> {
        Err(unsupported(self.kind(), "contains"))
    }

    /// Live resize while the pointer drags during construction
    fn update_shape(&mut self, point: Pos2);

    /// Axis-aligned bounding box
    fn bounds(&self) -> Result<Rect, ShapeError> {
        Err(unsupported(self.kind(), "bounds"))
    }
}

/// Dashed bounding box with a square handle centred on each corner
pub fn draw_selection_overlay(surface: &mut dyn Surface, bounds: Rect) {
    let paint = Paint::new(SELECTION_COLOR, 1.0);
    surface.stroke_dashed(&rect_corners(bounds), true, &paint, SELECTION_DASH, SELECTION_DASH);
    for corner in rect_corners(bounds) {
        surface.stroke_rect(Rect::from_center_size(corner, Vec2::splat(HANDLE_SIZE)), &paint);
    }
}

/// Enumeration of all shape variants the canvas can hold
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeType {
    Line(Line),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    QuadCurve(QuadCurve),
}

impl ShapeType {
    pub fn as_fillable(&self) -> Option<&dyn Fillable> {
        match self {
            ShapeType::Rectangle(r) => Some(r),
            ShapeType::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_fillable_mut(&mut self) -> Option<&mut dyn Fillable> {
        match self {
            ShapeType::Rectangle(r) => Some(r),
            ShapeType::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_curve(&self) -> Option<&QuadCurve> {
        match self {
            ShapeType::QuadCurve(c) => Some(c),
            _ => None,
        }
    }
}

impl Shape for ShapeType {
    fn base(&self) -> &ShapeBase {
        match self {
            ShapeType::Line(s) => s.base(),
            ShapeType::Rectangle(s) => s.base(),
            ShapeType::Ellipse(s) => s.base(),
            ShapeType::QuadCurve(s) => s.base(),
        }
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        match self {
            ShapeType::Line(s) => s.base_mut(),
            ShapeType::Rectangle(s) => s.base_mut(),
            ShapeType::Ellipse(s) => s.base_mut(),
            ShapeType::QuadCurve(s) => s.base_mut(),
        }
    }

    fn kind(&self) -> ShapeKind {
        match self {
            ShapeType::Line(_) => ShapeKind::Line,
            ShapeType::Rectangle(_) => ShapeKind::Rectangle,
            ShapeType::Ellipse(_) => ShapeKind::Ellipse,
            ShapeType::QuadCurve(_) => ShapeKind::QuadCurve,
        }
    }

    fn draw_shape(&self, surface: &mut dyn Surface, paint: &Paint) {
        match self {
            ShapeType::Line(s) => s.draw_shape(surface, paint),
            ShapeType::Rectangle(s) => s.draw_shape(surface, paint),
            ShapeType::Ellipse(s) => s.draw_shape(surface, paint),
            ShapeType::QuadCurve(s) => s.draw_shape(surface, paint),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            ShapeType::Line(s) => s.render(surface),
            ShapeType::Rectangle(s) => s.render(surface),
            ShapeType::Ellipse(s) => s.render(surface),
            ShapeType::QuadCurve(s) => s.render(surface),
        }
    }

    fn draw(&self, surface: &mut dyn Surface) -> Result<(), ShapeError> {
        match self {
            ShapeType::Line(s) => s.draw(surface),
            ShapeType::Rectangle(s) => s.draw(surface),
            ShapeType::Ellipse(s) => s.draw(surface),
            ShapeType::QuadCurve(s) => s.draw(surface),
        }
    }

    fn location(&self) -> Pos2 {
        match self {
            ShapeType::Line(s) => s.location(),
            ShapeType::Rectangle(s) => s.location(),
            ShapeType::Ellipse(s) => s.location(),
            ShapeType::QuadCurve(s) => s.location(),
        }
    }

    fn set_location(&mut self, pos: Pos2) -> Result<(), ShapeError> {
        match self {
            ShapeType::Line(s) => s.set_location(pos),
            ShapeType::Rectangle(s) => s.set_location(pos),
            ShapeType::Ellipse(s) => s.set_location(pos),
            ShapeType::QuadCurve(s) => s.set_location(pos),
        }
    }

    fn contains(&self, point: Pos2) -> Result<bool, ShapeError> {
        match self {
            ShapeType::Line(s) => s.contains(point),
            ShapeType::Rectangle(s) => s.contains(point),
            ShapeType::Ellipse(s) => s.contains(point),
            ShapeType::QuadCurve(s) => s.contains(point),
        }
    }

    fn update_shape(&mut self, point: Pos2) {
        match self {
            ShapeType::Line(s) => s.update_shape(point),
            ShapeType::Rectangle(s) => s.update_shape(point),
            ShapeType::Ellipse(s) => s.update_shape(point),
            ShapeType::QuadCurve(s) => s.update_shape(point),
        }
    }

    fn bounds(&self) -> Result<Rect, ShapeError> {
        match self {
            ShapeType::Line(s) => s.bounds(),
            ShapeType::Rectangle(s) => s.bounds(),
            ShapeType::Ellipse(s) => s.bounds(),
            ShapeType::QuadCurve(s) => s.bounds(),
        }
    }
}

impl From<Line> for ShapeType {
    fn from(line: Line) -> Self {
        ShapeType::Line(line)
    }
}

impl From<Rectangle> for ShapeType {
    fn from(rect: Rectangle) -> Self {
        ShapeType::Rectangle(rect)
    }
}

impl From<Ellipse> for ShapeType {
    fn from(ellipse: Ellipse) -> Self {
        ShapeType::Ellipse(ellipse)
    }
}

impl From<QuadCurve> for ShapeType {
    fn from(curve: QuadCurve) -> Self {
        ShapeType::QuadCurve(curve)
    }
}

/// Factory functions for creating shapes from a style template
pub mod factory {
    use super::*;

    pub fn create_line(style: ShapeStyle, p1: Pos2, p2: Pos2) -> ShapeType {
        ShapeType::Line(Line::new(style, p1, p2))
    }

    pub fn create_rectangle(style: ShapeStyle, filled: bool, p1: Pos2, p2: Pos2) -> ShapeType {
        ShapeType::Rectangle(Rectangle::new(style, filled, p1, p2))
    }

    pub fn create_ellipse(style: ShapeStyle, filled: bool, p1: Pos2, p2: Pos2) -> ShapeType {
        ShapeType::Ellipse(Ellipse::new(style, filled, p1, p2))
    }

    pub fn create_curve(style: ShapeStyle, start: Pos2, end: Pos2, control: Pos2) -> ShapeType {
        ShapeType::QuadCurve(QuadCurve::new(style, start, end, control))
    }
}
