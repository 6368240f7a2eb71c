//! The interactive drawing canvas.
//!
//! [`Canvas`] owns the ordered shape list (insertion order is paint order, so
//! the last shape is drawn on top and hit-tested first), the style template
//! for new shapes, the background raster and the pointer interaction state.
//! All mutation happens synchronously inside the pointer and setter methods;
//! callers must drive it from a single thread.
//!
//! Interaction summary:
//! - Drawing tools: press creates a shape and appends it, drag resizes it
//!   through [`Shape::update_shape`], release ends the gesture.
//! - Quadratic curves take two press/drag/release cycles. The first drags the
//!   end point (control follows it); the curve lives outside the list until
//!   the second press appends it and switches it to control-point editing.
//! - Move mode: press picks the topmost shape under the pointer and selects
//!   it; drags translate it by the incremental pointer delta.
//! - Fix and erase modes act on **hover**, not on click: merely moving the
//!   pointer across a shape bakes it into the raster (fix) or deletes it
//!   (erase). Fix takes precedence when both are enabled.

use egui::{Color32, CursorIcon, PointerButton, Pos2};
use image::RgbaImage;
use log::{debug, info, warn};

use crate::config::ToolSettings;
use crate::error::{CanvasError, CanvasResult, ShapeError};
use crate::event::{CanvasEvent, CanvasListener, EventBus};
use crate::filters::ImageFilter;
use crate::input::InputEvent;
use crate::shape::{QuadCurve, Shape, ShapeId, ShapeType, factory};
use crate::state::{CurveStep, EditModes, HoverAction};
use crate::surface::{RasterSurface, Surface};
use crate::tools::DrawingTool;

/// Pointer position recorded on hover, with the raster colour beneath it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Pos2,
    /// `None` when the pointer is outside the raster or there is none
    pub rgb: Option<[u8; 3]>,
}

pub struct Canvas {
    shapes: Vec<ShapeType>,
    settings: ToolSettings,
    modes: EditModes,
    /// Committed shape being constructed or dragged
    current: Option<ShapeId>,
    selected: Option<ShapeId>,
    /// Last pointer position of a move-mode drag
    anchor: Option<Pos2>,
    curve: CurveStep,
    button_down: bool,
    background: Option<RgbaImage>,
    raster_version: u64,
    pointer: Option<PointerSample>,
    repaint: bool,
    events: EventBus,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("shapes", &self.shapes.len())
            .field("settings", &self.settings)
            .field("modes", &self.modes)
            .field("current", &self.current)
            .field("selected", &self.selected)
            .field("curve", &self.curve)
            .field("background", &self.background.as_ref().map(|img| img.dimensions()))
            .field("raster_version", &self.raster_version)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self::with_settings(ToolSettings::default())
    }

    pub fn with_settings(settings: ToolSettings) -> Self {
        Self {
            shapes: Vec::new(),
            settings,
            modes: EditModes::default(),
            current: None,
            selected: None,
            anchor: None,
            curve: CurveStep::default(),
            button_down: false,
            background: None,
            raster_version: 0,
            pointer: None,
            repaint: false,
            events: EventBus::new(),
        }
    }

    // ---- listeners -------------------------------------------------------

    pub fn add_listener(&self, listener: impl CanvasListener + 'static) {
        self.events.subscribe(Box::new(listener));
    }

    pub fn on_event<F>(&self, f: F)
    where
        F: FnMut(&CanvasEvent<'_>) + 'static,
    {
        self.events.subscribe_fn(f);
    }

    // ---- accessors -------------------------------------------------------

    pub fn shapes(&self) -> &[ShapeType] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&ShapeType> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    fn index_of(&self, id: ShapeId) -> Option<usize> {
        self.shapes.iter().position(|s| s.id() == id)
    }

    fn shape_mut(&mut self, id: ShapeId) -> Option<&mut ShapeType> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn selected_shape(&self) -> Option<&ShapeType> {
        self.selected.and_then(|id| self.shape(id))
    }

    /// The committed shape the last press created or picked
    pub fn current_shape(&self) -> Option<&ShapeType> {
        self.current.and_then(|id| self.shape(id))
    }

    /// A curve whose first drag is done or underway but which is not yet in the list
    pub fn pending_curve(&self) -> Option<&QuadCurve> {
        self.curve.pending()
    }

    pub fn curve_step(&self) -> &CurveStep {
        &self.curve
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn tool(&self) -> DrawingTool {
        self.settings.tool
    }

    pub fn modes(&self) -> EditModes {
        self.modes
    }

    pub fn background(&self) -> Option<&RgbaImage> {
        self.background.as_ref()
    }

    /// Bumped whenever the raster content changes
    pub fn raster_version(&self) -> u64 {
        self.raster_version
    }

    pub fn set_background(&mut self, image: Option<RgbaImage>) {
        self.background = image;
        self.raster_version += 1;
        self.repaint = true;
    }

    pub fn pointer_sample(&self) -> Option<PointerSample> {
        self.pointer
    }

    /// Returns and clears the pending repaint request
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint)
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        if !self.modes.move_enabled {
            CursorIcon::Crosshair
        } else if self.button_down && self.current.is_some() {
            CursorIcon::Move
        } else {
            CursorIcon::Grab
        }
    }

    // ---- pointer events --------------------------------------------------

    /// Route an input event to the matching pointer handler
    pub fn handle_input(&mut self, event: &InputEvent) -> CanvasResult<()> {
        match event {
            InputEvent::PointerDown { location, button: PointerButton::Primary } if location.is_in_canvas => {
                self.pointer_pressed(location.canvas_position)
            }
            InputEvent::PointerMove { location, held_buttons } => {
                if held_buttons.contains(&PointerButton::Primary) {
                    self.pointer_dragged(location.canvas_position)
                } else if location.is_in_canvas {
                    self.pointer_moved(location.canvas_position)
                } else {
                    Ok(())
                }
            }
            InputEvent::PointerUp { location, button: PointerButton::Primary } => {
                self.pointer_released(location.canvas_position);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    pub fn pointer_pressed(&mut self, point: Pos2) -> CanvasResult<()> {
        self.button_down = true;

        if self.modes.move_enabled {
            self.current = self.shape_at(point)?;
            if let Some(id) = self.current {
                self.select(id);
                self.anchor = Some(point);
                if let Some(index) = self.index_of(id) {
                    info!("Selected {} {}", self.shapes[index].kind().name(), id);
                    self.events.emit(CanvasEvent::ShapeSelected(&self.shapes[index]));
                }
            }
            return Ok(());
        }

        let style = self.settings.style();
        let filled = self.settings.filled;
        let shape = match self.settings.tool {
            DrawingTool::Line => factory::create_line(style, point, point),
            DrawingTool::Rectangle => factory::create_rectangle(style, filled, point, point),
            DrawingTool::Ellipse => factory::create_ellipse(style, filled, point, point),
            DrawingTool::QuadCurve => {
                self.press_curve(point);
                return Ok(());
            }
        };
        self.commit(shape);
        Ok(())
    }

    fn press_curve(&mut self, point: Pos2) {
        match std::mem::take(&mut self.curve) {
            CurveStep::AwaitingFirstClick => {
                debug!("Curve started at {:?}", point);
                self.current = None;
                self.curve = CurveStep::DraggingEnd(QuadCurve::new(self.settings.style(), point, point, point));
            }
            CurveStep::DraggingEnd(mut curve) | CurveStep::AwaitingSecondClick(mut curve) => {
                curve.set_control_phase(true);
                self.commit(curve.into());
            }
        }
        self.repaint = true;
    }

    /// Append a shape and announce it
    fn commit(&mut self, shape: ShapeType) {
        let id = shape.id();
        info!("Added {} {}", shape.kind().name(), id);
        self.shapes.push(shape);
        self.current = Some(id);
        self.repaint = true;
        if let Some(shape) = self.shapes.last() {
            self.events.emit(CanvasEvent::ShapeAdded(shape));
        }
    }

    pub fn pointer_dragged(&mut self, point: Pos2) -> CanvasResult<()> {
        if !self.button_down {
            return Ok(());
        }

        if self.modes.move_enabled {
            let (Some(id), Some(anchor)) = (self.current, self.anchor) else {
                return Ok(());
            };
            let delta = point - anchor;
            if let Some(shape) = self.shape_mut(id) {
                let location = shape.location();
                shape.set_location(location + delta)?;
            }
            self.anchor = Some(point);
        } else if let CurveStep::DraggingEnd(curve) = &mut self.curve {
            curve.update_shape(point);
        } else if let Some(id) = self.current {
            if let Some(shape) = self.shape_mut(id) {
                shape.update_shape(point);
            }
        }

        self.repaint = true;
        Ok(())
    }

    pub fn pointer_released(&mut self, _point: Pos2) {
        self.button_down = false;
        self.curve = match std::mem::take(&mut self.curve) {
            CurveStep::DraggingEnd(curve) => CurveStep::AwaitingSecondClick(curve),
            other => other,
        };
        self.repaint = true;
    }

    /// Hover without a button held: samples the raster and applies fix/erase
    pub fn pointer_moved(&mut self, point: Pos2) -> CanvasResult<()> {
        let result = self.hover(point);
        self.pointer = Some(self.sample(point));
        result
    }

    fn hover(&mut self, point: Pos2) -> CanvasResult<()> {
        let Some(action) = self.modes.hover_action() else {
            return Ok(());
        };
        let Some(id) = self.shape_at(point)? else {
            return Ok(());
        };
        match action {
            HoverAction::Fix => {
                self.fix_shape(id)?;
            }
            HoverAction::Erase => {
                self.erase_shape(id);
            }
        }
        Ok(())
    }

    fn sample(&self, point: Pos2) -> PointerSample {
        let rgb = self.background.as_ref().and_then(|img| {
            if point.x < 0.0 || point.y < 0.0 {
                return None;
            }
            let (x, y) = (point.x as u32, point.y as u32);
            (x < img.width() && y < img.height()).then(|| {
                let px = img.get_pixel(x, y);
                [px[0], px[1], px[2]]
            })
        });
        PointerSample { position: point, rgb }
    }

    // ---- hit testing & selection ----------------------------------------

    /// Topmost shape containing `point`
    pub fn shape_at(&self, point: Pos2) -> Result<Option<ShapeId>, ShapeError> {
        for shape in self.shapes.iter().rev() {
            if shape.contains(point)? {
                return Ok(Some(shape.id()));
            }
        }
        Ok(None)
    }

    fn select(&mut self, id: ShapeId) {
        if let Some(previous) = self.selected.take() {
            if let Some(shape) = self.shape_mut(previous) {
                shape.set_selected(false);
            }
        }
        if let Some(shape) = self.shape_mut(id) {
            shape.set_selected(true);
            self.selected = Some(id);
        }
        self.repaint = true;
    }

    fn unselect(&mut self) {
        if let Some(previous) = self.selected.take() {
            if let Some(shape) = self.shape_mut(previous) {
                shape.set_selected(false);
            }
            self.repaint = true;
        }
    }

    // ---- fix / erase -----------------------------------------------------

    /// Bake a shape into the raster and drop it from the list.
    ///
    /// Returns `Ok(false)` when no shape has that id.
    pub fn fix_shape(&mut self, id: ShapeId) -> CanvasResult<bool> {
        let Some(index) = self.index_of(id) else {
            return Ok(false);
        };
        let Some(background) = self.background.as_mut() else {
            warn!("Cannot fix {}: no background image", id);
            return Err(CanvasError::NoBackground);
        };

        self.shapes[index].render(&mut RasterSurface::new(background));
        let shape = self.remove_at(index);
        self.raster_version += 1;
        info!("Fixed {} {} into the image", shape.kind().name(), id);
        Ok(true)
    }

    /// Drop a shape from the list without touching the raster
    pub fn erase_shape(&mut self, id: ShapeId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let shape = self.remove_at(index);
        info!("Erased {} {}", shape.kind().name(), id);
        true
    }

    fn remove_at(&mut self, index: usize) -> ShapeType {
        let shape = self.shapes.remove(index);
        let id = shape.id();
        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.current == Some(id) {
            self.current = None;
            self.anchor = None;
        }
        self.repaint = true;
        shape
    }

    // ---- tool and mode settings ------------------------------------------

    pub fn set_tool(&mut self, tool: DrawingTool) {
        info!("Tool changed to {:?}", tool);
        self.settings.tool = tool;
        self.exit_editing_mode();
    }

    pub fn set_fix_mode(&mut self, enabled: bool) {
        self.modes.fix_enabled = enabled;
        self.exit_editing_mode();
    }

    pub fn set_erase_mode(&mut self, enabled: bool) {
        self.modes.erase_enabled = enabled;
        self.exit_editing_mode();
    }

    /// Turning move mode off also clears the selection
    pub fn set_move_mode(&mut self, enabled: bool) {
        if !enabled {
            self.unselect();
        }
        self.modes.move_enabled = enabled;
        self.reset_interaction();
    }

    fn exit_editing_mode(&mut self) {
        self.reset_interaction();
        self.events.emit(CanvasEvent::EditingModeExited);
    }

    /// Drop any half-built curve and forget the in-progress shape
    fn reset_interaction(&mut self) {
        if let Some(curve) = self.curve.pending() {
            debug!("Discarding unfinished curve {}", curve.id());
        }
        self.curve = CurveStep::AwaitingFirstClick;
        self.current = None;
        self.anchor = None;
        self.button_down = false;
        self.repaint = true;
    }

    // ---- style settings --------------------------------------------------

    pub fn set_color(&mut self, color: Color32) {
        self.settings.color = color;
        self.apply_to_selection(|shape| shape.style_mut().color = color);
    }

    pub fn set_stroke_width(&mut self, width: u32) {
        let width = width.max(1);
        self.settings.stroke_width = width;
        self.apply_to_selection(|shape| shape.style_mut().stroke_width = width);
    }

    pub fn set_transparent(&mut self, transparent: bool) {
        self.settings.transparent = transparent;
        self.apply_to_selection(|shape| shape.style_mut().transparent = transparent);
    }

    pub fn set_antialiased(&mut self, antialiased: bool) {
        self.settings.antialiased = antialiased;
        self.apply_to_selection(|shape| shape.style_mut().antialiased = antialiased);
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.settings.filled = filled;
        self.apply_to_selection(|shape| match shape.as_fillable_mut() {
            Some(fillable) => fillable.set_filled(filled),
            None => debug!("{} shapes have no fill", shape.kind().name()),
        });
    }

    /// Push a style change onto the selected shape; only active in move mode
    fn apply_to_selection(&mut self, apply: impl FnOnce(&mut ShapeType)) {
        if !self.modes.move_enabled {
            return;
        }
        let Some(id) = self.selected else {
            return;
        };
        if let Some(shape) = self.shape_mut(id) {
            apply(shape);
            self.repaint = true;
        }
    }

    // ---- rendering -------------------------------------------------------

    /// Draw every live shape (selection overlays included) and the pending curve.
    ///
    /// A shape that fails to draw is skipped; the first failure is returned
    /// after the rest have been drawn.
    pub fn paint(&self, surface: &mut dyn Surface) -> CanvasResult<()> {
        let mut first_error = None;
        for shape in &self.shapes {
            if let Err(err) = shape.draw(surface) {
                warn!("Failed to draw {} {}: {}", shape.kind().name(), shape.id(), err);
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
        if let Some(curve) = self.curve.pending() {
            curve.render(surface);
        }
        match first_error {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Background with every live shape composited on top, without selection overlays
    pub fn painted_image(&self) -> Option<RgbaImage> {
        let mut image = self.background.clone()?;
        let mut surface = RasterSurface::new(&mut image);
        for shape in &self.shapes {
            shape.render(&mut surface);
        }
        Some(image)
    }

    /// Replace the raster with the filter's output
    pub fn apply_filter(&mut self, filter: &dyn ImageFilter) -> CanvasResult<()> {
        let output = filter.apply(self.background.as_ref())?;
        info!("Applied {} filter", filter.name());
        self.background = Some(output);
        self.raster_version += 1;
        self.repaint = true;
        Ok(())
    }
}
