use thiserror::Error;

use crate::geometry::Accuracy;

/// Top-level error type for curve evaluation and rendering.
#[derive(Debug, Error)]
pub enum BezkitError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    CloseMode(#[from] CloseModeError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Sketch(#[from] SketchError),
}

/// Malformed or inconsistent point input.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("control point list is empty")]
    Empty,

    #[error("at least {required} control points are required, got {actual}")]
    TooFewPoints { required: usize, actual: usize },

    #[error("control point {index} has {actual} coordinates, expected {expected}")]
    MixedDimensions {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("a point needs 2 or 3 coordinates, got {actual}")]
    CoordinateCount { actual: usize },

    #[error("curve degree {degree} exceeds the supported limit of {limit}")]
    DegreeTooHigh { degree: usize, limit: usize },

    #[error("the number of control points changed from {expected} to {actual}")]
    CountChanged { expected: usize, actual: usize },

    #[error("invalid dash pattern: {0}")]
    InvalidDashPattern(String),
}

/// A coordinate is missing, or 2D and 3D operands were mixed.
#[derive(Debug, Error, PartialEq)]
pub enum DimensionError {
    #[error("cannot combine a {left}D point with a {right}D point")]
    Mismatch { left: usize, right: usize },

    #[error("x, y and z are needed to move a 3D curve")]
    MissingZ,

    #[error("surface is {surface}D but the curve is {curve}D")]
    SurfaceMismatch { surface: usize, curve: usize },
}

/// A close-mode token is neither `OPEN` nor `CLOSE`.
#[derive(Debug, Error, PartialEq)]
pub enum CloseModeError {
    #[error("a bezier curve can only be OPEN or CLOSE, got {0:?}")]
    Unknown(String),
}

/// The bound surface cannot be drawn on.
#[derive(Debug, Error, PartialEq)]
pub enum SurfaceError {
    #[error("surface is not supported: {0}")]
    Unsupported(String),
}

/// Errors related to retained curves.
#[derive(Debug, Error, PartialEq)]
pub enum SketchError {
    #[error("curve not found")]
    CurveNotFound,
}

/// Non-fatal notice that a curve was re-tessellated before dashing.
///
/// Dashes drawn over coarse segments land visibly off their intended
/// spacing, so dashing raises the accuracy to [`Accuracy::DASH_MIN`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("accuracy raised from level {} to {} for a dashed curve", .from.level(), .to.level())]
pub struct DashFidelityWarning {
    pub from: Accuracy,
    pub to: Accuracy,
}

/// Convenience type alias for results using [`BezkitError`].
pub type Result<T> = std::result::Result<T, BezkitError>;
