use thiserror::Error;

/// Errors raised by a shape variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The variant does not implement the requested capability
    #[error("{operation} is not supported by {shape} shapes")]
    Unsupported {
        shape: &'static str,
        operation: &'static str,
    },
}

/// Errors raised while building or running an image filter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("invalid filter argument: {0}")]
    InvalidArgument(String),

    #[error("no source image to filter")]
    MissingSource,
}

/// Errors surfaced by canvas operations
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    /// A shape was about to be baked but the canvas has no raster
    #[error("the canvas has no background image")]
    NoBackground,
}

/// Errors that can occur while loading tool settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting: {0}")]
    InvalidValue(String),
}

pub type CanvasResult<T> = Result<T, CanvasError>;
