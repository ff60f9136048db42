mod recorder;
mod stroke_dashed;
mod stroke_path;
mod stroke_style;

pub use recorder::{PathCommand, RecordingSurface};
pub use stroke_dashed::{DashSummary, StrokeDashed};
pub use stroke_path::StrokePath;
pub use stroke_style::DashPattern;

use crate::error::{DashFidelityWarning, Result, SurfaceError};
use crate::geometry::{Dimension, Point};

/// Fill and stroke flags currently set on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceStyle {
    /// Whether closed paths are filled.
    pub fill: bool,
    /// Whether paths are stroked.
    pub stroke: bool,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            fill: true,
            stroke: true,
        }
    }
}

/// Outcome of drawing a retained curve.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawReport {
    /// How the length was split, for dashed draws.
    pub dash: Option<DashSummary>,
    /// Set when the curve had to be re-tessellated before dashing.
    pub upgraded: Option<DashFidelityWarning>,
}

/// Path-based drawing target that curves are emitted onto.
///
/// Implementations forward to a real canvas, a GPU pipeline, or a recorder.
/// Points handed to `move_to` and `line_to` always have the surface's
/// dimension.
pub trait DrawingSurface {
    /// Number of coordinate axes the surface draws in.
    fn dimensions(&self) -> usize;

    /// Whether the surface understands path primitives at all.
    fn supports_paths(&self) -> bool {
        true
    }

    /// Current fill/stroke flags.
    fn style(&self) -> SurfaceStyle;

    /// Starts a new path, discarding any unfinished one.
    fn begin_path(&mut self);

    /// Starts a subpath at `point` without drawing.
    fn move_to(&mut self, point: &Point);

    /// Adds a straight segment to `point`.
    fn line_to(&mut self, point: &Point);

    /// Joins the current subpath back to its start.
    fn close_path(&mut self);

    /// Fills the current path.
    fn fill(&mut self);

    /// Strokes the current path.
    fn stroke(&mut self);
}

/// Checks that a surface can be drawn on and returns its dimension.
///
/// # Errors
///
/// Returns [`SurfaceError::Unsupported`] if the surface has no path
/// primitives or is neither 2D nor 3D.
pub fn surface_dimension<S: DrawingSurface + ?Sized>(surface: &S) -> Result<Dimension> {
    if !surface.supports_paths() {
        return Err(SurfaceError::Unsupported("surface has no path primitives".to_owned()).into());
    }
    let count = surface.dimensions();
    Dimension::from_count(count).ok_or_else(|| {
        SurfaceError::Unsupported(format!("{count}-dimensional surfaces cannot be drawn on")).into()
    })
}

/// Fills and/or strokes the current path according to the surface's flags.
fn apply_style<S: DrawingSurface + ?Sized>(surface: &mut S, allow_fill: bool) {
    let style = surface.style();
    if allow_fill && style.fill {
        surface.fill();
    }
    if style.stroke {
        surface.stroke();
    }
}
