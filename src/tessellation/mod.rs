mod concentrate;
mod tessellate_bezier;

pub use concentrate::{Concentrate, CONCENTRATION_SEED};
pub use tessellate_bezier::TessellateBezier;

use crate::error::Result;
use crate::geometry::point::common_dimension;
use crate::geometry::{Accuracy, CloseMode, Point};
use crate::math::vertex::closed_curve_extra_points;

/// Parameters controlling how control points become a polyline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TessellationParams {
    /// Whether the curve loops back to its first point.
    pub close: CloseMode,
    /// Sampling density.
    pub accuracy: Accuracy,
}

impl TessellationParams {
    /// Creates a new parameter set.
    #[must_use]
    pub fn new(close: CloseMode, accuracy: Accuracy) -> Self {
        Self { close, accuracy }
    }

    /// Returns the parameters with a different close mode.
    #[must_use]
    pub fn with_close(mut self, close: CloseMode) -> Self {
        self.close = close;
        self
    }

    /// Returns the parameters with a different accuracy level.
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: Accuracy) -> Self {
        self.accuracy = accuracy;
        self
    }
}

/// Returns the control points that are actually evaluated.
///
/// Oversized lists are concentrated first; closed curves then get the three
/// closing points appended. The input is copied, never modified.
///
/// # Errors
///
/// Returns an error if the list is empty, mixes dimensions, or is closed with
/// fewer than two points.
pub fn effective_control_points(points: &[Point], close: CloseMode) -> Result<Vec<Point>> {
    common_dimension(points)?;
    let mut effective = Concentrate::new(points, close.is_closed()).execute();
    if close.is_closed() {
        let extra = closed_curve_extra_points(&effective)?;
        effective.extend(extra);
    }
    Ok(effective)
}
