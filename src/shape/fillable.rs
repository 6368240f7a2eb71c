use egui::{Pos2, Rect};

use super::Shape;
use crate::surface::{Paint, Surface};

/// Shapes that may paint a solid interior before their outline
pub trait Fillable: Shape {
    fn is_filled(&self) -> bool;

    fn set_filled(&mut self, filled: bool);

    fn fill_shape(&self, surface: &mut dyn Surface, paint: &Paint);
}

/// Axis-aligned frame spanned by the press point and the current pointer.
///
/// `update` always rebuilds the frame from the anchor, so dragging past the
/// anchor flips the frame instead of growing it from its last position.
#[derive(Debug, Clone, PartialEq)]
pub struct FillFrame {
    anchor: Pos2,
    rect: Rect,
    filled: bool,
}

impl FillFrame {
    pub fn new(anchor: Pos2, corner: Pos2, filled: bool) -> Self {
        Self {
            anchor,
            rect: Rect::from_two_pos(anchor, corner),
            filled,
        }
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn filled(&self) -> bool {
        self.filled
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }

    pub fn update(&mut self, corner: Pos2) {
        self.rect = Rect::from_two_pos(self.anchor, corner);
    }

    /// Move the top-left corner to `pos`; size is unchanged. The anchor stays
    /// at the original press point.
    pub fn set_location(&mut self, pos: Pos2) {
        self.rect = self.rect.translate(pos - self.rect.min);
    }
}
