mod bus;
mod events;

pub use bus::EventBus;
pub use events::CanvasEvent;

use crate::shape::ShapeType;

/// Observer of canvas notifications.
///
/// Every method has an empty default so implementors only override what
/// they care about.
pub trait CanvasListener {
    /// A shape was appended to the canvas
    fn shape_added(&mut self, _shape: &ShapeType) {}

    /// A shape was picked in move mode
    fn shape_selected(&mut self, _shape: &ShapeType) {}

    /// The tool or the fix/erase mode changed
    fn editing_mode_exited(&mut self) {}

    fn handle_event(&mut self, event: &CanvasEvent<'_>) {
        match event {
            CanvasEvent::ShapeAdded(shape) => self.shape_added(shape),
            CanvasEvent::ShapeSelected(shape) => self.shape_selected(shape),
            CanvasEvent::EditingModeExited => self.editing_mode_exited(),
        }
    }
}
