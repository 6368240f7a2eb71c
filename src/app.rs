use std::cell::RefCell;
use std::rc::Rc;

use egui::{Color32, Rect, Sense};
use image::{Rgba, RgbaImage};

use crate::canvas::Canvas;
use crate::config::ToolSettings;
use crate::error::FilterError;
use crate::event::CanvasEvent;
use crate::filters::{
    ConvolveFilter, ImageFilter, Kernel, KernelPreset, LookupFilter, LookupTable, PopArt, Posterize, RedIsolation,
    ToneShift,
};
use crate::input::InputHandler;
use crate::renderer::Renderer;
use crate::shape::Shape;
use crate::tools::DrawingTool;

const NEW_IMAGE_SIZE: (u32, u32) = (640, 480);

fn boxed(filter: impl ImageFilter + 'static) -> Box<dyn ImageFilter> {
    Box::new(filter)
}

/// Desktop front-end: a tools panel on the left and the canvas filling the rest
pub struct CanvasApp {
    canvas: Canvas,
    renderer: Renderer,
    input: InputHandler,
    /// Last notification from the canvas, shown in the status bar
    status: Rc<RefCell<String>>,
}

impl CanvasApp {
    /// Called once before the first frame.
    ///
    /// Explicit `settings` win over the ones persisted by the last session.
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Option<ToolSettings>) -> Self {
        let settings = settings
            .or_else(|| {
                cc.storage
                    .and_then(|storage| eframe::get_value::<ToolSettings>(storage, eframe::APP_KEY))
                    .filter(|restored| restored.validate().is_ok())
            })
            .unwrap_or_default();
        Self::with_canvas(Canvas::with_settings(settings))
    }

    fn with_canvas(canvas: Canvas) -> Self {
        let status = Rc::new(RefCell::new(String::from("Ready")));
        let sink = Rc::clone(&status);
        canvas.on_event(move |event| {
            let text = match event {
                CanvasEvent::ShapeAdded(shape) => format!("Added {}", shape.kind().name()),
                CanvasEvent::ShapeSelected(shape) => format!("Selected {} at {:?}", shape.kind().name(), shape.location()),
                CanvasEvent::EditingModeExited => String::from("Editing mode changed"),
            };
            *sink.borrow_mut() = text;
        });

        Self {
            canvas,
            renderer: Renderer::new(),
            input: InputHandler::new(Rect::NOTHING),
            status,
        }
    }

    fn report(&self, message: impl Into<String>) {
        *self.status.borrow_mut() = message.into();
    }

    fn tools_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tools");
        ui.separator();

        let current = self.canvas.tool();
        for tool in DrawingTool::ALL {
            if ui.selectable_label(current == tool, tool.label()).clicked() && current != tool {
                self.canvas.set_tool(tool);
            }
        }

        ui.separator();
        let mut settings = *self.canvas.settings();

        ui.horizontal(|ui| {
            ui.label("Color:");
            if egui::color_picker::color_edit_button_srgba(ui, &mut settings.color, egui::color_picker::Alpha::Opaque)
                .changed()
            {
                self.canvas.set_color(settings.color);
            }
        });
        ui.horizontal(|ui| {
            ui.label("Thickness:");
            if ui.add(egui::Slider::new(&mut settings.stroke_width, 1..=50)).changed() {
                self.canvas.set_stroke_width(settings.stroke_width);
            }
        });
        if ui.checkbox(&mut settings.filled, "Filled").changed() {
            self.canvas.set_filled(settings.filled);
        }
        if ui.checkbox(&mut settings.transparent, "Transparent").changed() {
            self.canvas.set_transparent(settings.transparent);
        }
        if ui.checkbox(&mut settings.antialiased, "Antialiased").changed() {
            self.canvas.set_antialiased(settings.antialiased);
        }

        ui.separator();
        let mut modes = self.canvas.modes();
        if ui.checkbox(&mut modes.move_enabled, "Move").changed() {
            self.canvas.set_move_mode(modes.move_enabled);
        }
        if ui.checkbox(&mut modes.fix_enabled, "Fix on hover").changed() {
            self.canvas.set_fix_mode(modes.fix_enabled);
        }
        if ui.checkbox(&mut modes.erase_enabled, "Erase on hover").changed() {
            self.canvas.set_erase_mode(modes.erase_enabled);
        }

        ui.separator();
        if ui.button("New image").clicked() {
            let (w, h) = NEW_IMAGE_SIZE;
            self.canvas
                .set_background(Some(RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]))));
            self.report(format!("New {w}×{h} image"));
        }

        ui.collapsing("Filters", |ui| self.filters_menu(ui));
    }

    fn filters_menu(&mut self, ui: &mut egui::Ui) {
        let color = self.canvas.settings().color;
        let mut chosen: Option<Result<Box<dyn ImageFilter>, FilterError>> = None;

        if ui.button("Posterize").clicked() {
            chosen = Some(Posterize::new(4).map(boxed));
        }
        if ui.button("Pop art").clicked() {
            chosen = Some(Ok(Box::new(PopArt::new(128, color, Color32::BLACK))));
        }
        if ui.button("Red isolation").clicked() {
            chosen = Some(Ok(Box::new(RedIsolation::new(20))));
        }
        if ui.button("Tone shift").clicked() {
            chosen = Some(ToneShift::new(color, 20.0, 180.0).map(boxed));
        }
        if ui.button("Sepia").clicked() {
            chosen = Some(Ok(Box::new(LookupFilter::new(LookupTable::sepia()))));
        }
        if ui.button("Contrast").clicked() {
            chosen = Some(Ok(Box::new(LookupFilter::new(LookupTable::abc(0, 96, 255)))));
        }
        if ui.button("Blur 5×5").clicked() {
            chosen = Some(Ok(Box::new(ConvolveFilter::new(Kernel::preset(KernelPreset::Mean5x5)))));
        }
        if ui.button("Blur 7×7").clicked() {
            chosen = Some(Ok(Box::new(ConvolveFilter::new(Kernel::preset(KernelPreset::Mean7x7)))));
        }
        if ui.button("Sharpen").clicked() {
            chosen = Some(Ok(Box::new(ConvolveFilter::new(Kernel::sharpen(1.0)))));
        }

        match chosen {
            Some(Ok(filter)) => match self.canvas.apply_filter(filter.as_ref()) {
                Ok(()) => self.report(format!("Applied {}", filter.name())),
                Err(err) => {
                    log::warn!("Filter failed: {}", err);
                    self.report(err.to_string());
                }
            },
            Some(Err(err)) => self.report(err.to_string()),
            None => {}
        }
    }

    fn status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(self.status.borrow().as_str());
            ui.separator();
            ui.label(format!("{} shapes", self.canvas.shapes().len()));
            if let Some(sample) = self.canvas.pointer_sample() {
                ui.separator();
                ui.label(format!("({:.0}, {:.0})", sample.position.x, sample.position.y));
                if let Some([r, g, b]) = sample.rgb {
                    ui.label(format!("RGB {r} {g} {b}"));
                }
            }
        });
    }
}

impl eframe::App for CanvasApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.canvas.settings());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("tools_panel").show(ctx, |ui| self.tools_panel(ui));
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| self.status_bar(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
            let rect = response.rect;
            self.input.set_canvas_rect(rect);

            for event in self.input.process_input(ctx) {
                if let Err(err) = self.canvas.handle_input(&event) {
                    log::warn!("Canvas input failed: {}", err);
                    self.report(err.to_string());
                }
            }

            if response.hovered() {
                ctx.set_cursor_icon(self.canvas.cursor_icon());
            }

            if let Err(err) = self.renderer.render(ctx, &painter, rect, &self.canvas) {
                log::warn!("Canvas render failed: {}", err);
            }
        });

        if self.canvas.take_repaint() {
            ctx.request_repaint();
        }
    }
}
