use egui::{Color32, Painter, Pos2, Shape, Stroke, Vec2};

use super::{Paint, Surface};

/// Draws onto an egui painter, offsetting canvas coordinates into screen space
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    offset: Vec2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, offset: Vec2) -> Self {
        Self { painter, offset }
    }

    fn to_screen(&self, points: &[Pos2]) -> Vec<Pos2> {
        points.iter().map(|p| *p + self.offset).collect()
    }

    // egui feathers every edge through its tessellator, so `antialias` has no
    // per-shape effect here.
    fn color(paint: &Paint) -> Color32 {
        paint.color.gamma_multiply(paint.opacity)
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_polygon(&mut self, points: &[Pos2], paint: &Paint) {
        if points.len() < 3 {
            return;
        }
        self.painter.add(Shape::convex_polygon(
            self.to_screen(points),
            Self::color(paint),
            Stroke::NONE,
        ));
    }

    fn stroke_path(&mut self, points: &[Pos2], closed: bool, paint: &Paint) {
        let stroke = Stroke::new(paint.width, Self::color(paint));
        let screen = self.to_screen(points);
        match screen.len() {
            0 => {}
            1 => {
                self.painter.circle_filled(screen[0], paint.width / 2.0, stroke.color);
            }
            _ if closed => {
                self.painter.add(Shape::closed_line(screen, stroke));
            }
            _ => {
                self.painter.add(Shape::line(screen, stroke));
            }
        }
    }

    fn stroke_dashed(&mut self, points: &[Pos2], closed: bool, paint: &Paint, dash: f32, gap: f32) {
        let mut screen = self.to_screen(points);
        if closed {
            if let Some(first) = screen.first().copied() {
                screen.push(first);
            }
        }
        let stroke = Stroke::new(paint.width, Self::color(paint));
        self.painter.extend(Shape::dashed_line(&screen, stroke, dash, gap));
    }
}
