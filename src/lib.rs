#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod event;
pub mod filters;
pub mod geometry;
pub mod input;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod surface;
pub mod tools;

pub use app::CanvasApp;
pub use canvas::{Canvas, PointerSample};
pub use config::ToolSettings;
pub use error::{CanvasError, CanvasResult, ConfigError, FilterError, ShapeError};
pub use event::{CanvasEvent, CanvasListener, EventBus};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::Renderer;
pub use shape::{Shape, ShapeId, ShapeKind, ShapeStyle, ShapeType};
pub use state::{CurveStep, EditModes, HoverAction};
pub use tools::DrawingTool;
