use egui::{Pos2, Rect};
use image::RgbaImage;

use super::{Paint, Surface};
use crate::geometry::{calculate_bounds, distance_to_path, point_in_polygon};

/// Software rasteriser drawing straight into an RGBA buffer
pub struct RasterSurface<'a> {
    image: &'a mut RgbaImage,
}

impl<'a> RasterSurface<'a> {
    pub fn new(image: &'a mut RgbaImage) -> Self {
        Self { image }
    }

    /// Pixel range `[x0, x1) x [y0, y1)` covering `rect`, clipped to the image
    fn pixel_window(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let (width, height) = self.image.dimensions();
        let x0 = rect.min.x.floor().max(0.0) as u32;
        let y0 = rect.min.y.floor().max(0.0) as u32;
        let x1 = (rect.max.x.ceil().max(0.0) as u32).saturating_add(1).min(width);
        let y1 = (rect.max.y.ceil().max(0.0) as u32).saturating_add(1).min(height);
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    fn blend(&mut self, x: u32, y: u32, paint: &Paint, coverage: f32) {
        let [r, g, b, a] = paint.color.to_srgba_unmultiplied();
        let alpha = (a as f32 / 255.0) * paint.opacity * coverage;
        if alpha <= 0.0 {
            return;
        }

        let dst = self.image.get_pixel_mut(x, y);
        for (channel, src) in [r, g, b].into_iter().enumerate() {
            let mixed = src as f32 * alpha + dst[channel] as f32 * (1.0 - alpha);
            dst[channel] = mixed.round().clamp(0.0, 255.0) as u8;
        }
        let dst_alpha = dst[3] as f32 / 255.0;
        dst[3] = ((alpha + dst_alpha * (1.0 - alpha)) * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

/// Stroke coverage for a pixel centre `distance` away from the path
fn stroke_coverage(distance: f32, half_width: f32, antialias: bool) -> f32 {
    if antialias {
        (half_width + 0.5 - distance).clamp(0.0, 1.0)
    } else if distance <= half_width {
        1.0
    } else {
        0.0
    }
}

const SUBSAMPLES: [(f32, f32); 4] = [(0.25, 0.25), (0.75, 0.25), (0.25, 0.75), (0.75, 0.75)];

impl Surface for RasterSurface<'_> {
    fn fill_polygon(&mut self, points: &[Pos2], paint: &Paint) {
        if points.len() < 3 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.pixel_window(calculate_bounds(points, 0.0)) else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let coverage = if paint.antialias {
                    let hits = SUBSAMPLES
                        .iter()
                        .filter(|(dx, dy)| point_in_polygon(Pos2::new(x as f32 + dx, y as f32 + dy), points))
                        .count();
                    hits as f32 / SUBSAMPLES.len() as f32
                } else if point_in_polygon(Pos2::new(x as f32 + 0.5, y as f32 + 0.5), points) {
                    1.0
                } else {
                    0.0
                };
                self.blend(x, y, paint, coverage);
            }
        }
    }

    fn stroke_path(&mut self, points: &[Pos2], closed: bool, paint: &Paint) {
        let mut path = points.to_vec();
        if closed && points.len() > 2 {
            path.push(points[0]);
        }
        if path.is_empty() {
            return;
        }

        let half_width = (paint.width / 2.0).max(0.5);
        let Some((x0, y0, x1, y1)) = self.pixel_window(calculate_bounds(&path, half_width + 1.0)) else {
            return;
        };

        // One coverage value per pixel keeps overlapping segments of the same
        // path from blending twice.
        for y in y0..y1 {
            for x in x0..x1 {
                let centre = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let distance = distance_to_path(centre, &path);
                let coverage = stroke_coverage(distance, half_width, paint.antialias);
                self.blend(x, y, paint, coverage);
            }
        }
    }
}
