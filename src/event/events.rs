use crate::shape::{Shape, ShapeType};

/// Notifications broadcast by the canvas
#[derive(Debug, Clone, Copy)]
pub enum CanvasEvent<'a> {
    ShapeAdded(&'a ShapeType),
    ShapeSelected(&'a ShapeType),
    EditingModeExited,
}

impl CanvasEvent<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            CanvasEvent::ShapeAdded(_) => "shape_added",
            CanvasEvent::ShapeSelected(_) => "shape_selected",
            CanvasEvent::EditingModeExited => "editing_mode_exited",
        }
    }

    /// The shape the event is about, if any
    pub fn shape(&self) -> Option<&ShapeType> {
        match self {
            CanvasEvent::ShapeAdded(shape) | CanvasEvent::ShapeSelected(shape) => Some(*shape),
            CanvasEvent::EditingModeExited => None,
        }
    }
}

impl std::fmt::Display for CanvasEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.shape() {
            Some(shape) => write!(f, "{}({} {})", self.name(), shape.kind().name(), shape.id()),
            None => write!(f, "{}", self.name()),
        }
    }
}
