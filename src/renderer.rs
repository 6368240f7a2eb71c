use egui::{Color32, ColorImage, Context, Painter, Pos2, Rect, TextureHandle, TextureId, TextureOptions, pos2, vec2};
use image::RgbaImage;

use crate::canvas::Canvas;
use crate::error::CanvasResult;
use crate::geometry::rect_corners;
use crate::surface::{Paint, PainterSurface, Surface};

pub const IMAGE_FRAME_DASH: f32 = 15.0;
pub const IMAGE_FRAME_WIDTH: f32 = 2.0;
const IMAGE_FRAME_COLOR: Color32 = Color32::DARK_GRAY;

/// Draws a [`Canvas`] into an egui painter: background raster, its dashed
/// frame, then the live shapes clipped to the raster.
#[derive(Default)]
pub struct Renderer {
    /// Uploaded background and the raster version it was built from
    texture: Option<(u64, TextureHandle)>,
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("texture_version", &self.texture.as_ref().map(|(v, _)| *v))
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raster version of the cached texture, if one is uploaded
    pub fn texture_version(&self) -> Option<u64> {
        self.texture.as_ref().map(|(version, _)| *version)
    }

    /// Renders the canvas with its origin at `rect.min`
    pub fn render(&mut self, ctx: &Context, painter: &Painter, rect: Rect, canvas: &Canvas) -> CanvasResult<()> {
        let offset = rect.min.to_vec2();

        let clip = match canvas.background() {
            Some(image) => {
                let size = vec2(image.width() as f32, image.height() as f32);
                let screen_rect = Rect::from_min_size(rect.min, size);
                if let Some(texture) = self.background_texture(ctx, canvas.raster_version(), image) {
                    painter.image(
                        texture,
                        screen_rect,
                        Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                        Color32::WHITE,
                    );
                }

                let frame = Rect::from_min_size(Pos2::ZERO, size);
                let mut surface = PainterSurface::new(painter, offset);
                surface.stroke_dashed(
                    &rect_corners(frame),
                    true,
                    &Paint::new(IMAGE_FRAME_COLOR, IMAGE_FRAME_WIDTH),
                    IMAGE_FRAME_DASH,
                    IMAGE_FRAME_DASH,
                );
                screen_rect.intersect(rect)
            }
            None => {
                self.texture = None;
                rect
            }
        };

        let clipped = painter.with_clip_rect(clip);
        let mut surface = PainterSurface::new(&clipped, offset);
        canvas.paint(&mut surface)
    }

    /// Re-uploads the background only when the raster version moved
    fn background_texture(&mut self, ctx: &Context, version: u64, image: &RgbaImage) -> Option<TextureId> {
        if self.texture_version() != Some(version) {
            log::debug!("Uploading background texture v{}", version);
            let color_image = ColorImage::from_rgba_unmultiplied(
                [image.width() as usize, image.height() as usize],
                image.as_raw(),
            );
            let handle = ctx.load_texture("canvas-background", color_image, TextureOptions::NEAREST);
            self.texture = Some((version, handle));
        }
        self.texture.as_ref().map(|(_, handle)| handle.id())
    }
}
