pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod render;
pub mod sketch;
pub mod tessellation;

pub use error::{BezkitError, Result};
pub use geometry::{Accuracy, BezierCurve, CloseMode, Dimension, Point};
pub use render::{DashPattern, DrawReport, DrawingSurface, RecordingSurface};
pub use sketch::{CurveId, Sketch};
pub use tessellation::TessellationParams;
