use std::sync::{Arc, Once};

use tracing::warn;

use crate::error::{DashFidelityWarning, DimensionError, Result, ShapeError};
use crate::math::{CoefficientTable, Vector3};
use crate::operations::query::{ClosestVertex, ClosestVertexOnPolyline, Length};
use crate::operations::transform::Translate;
use crate::render::{
    surface_dimension, DashPattern, DrawReport, DrawingSurface, StrokeDashed, StrokePath,
};
use crate::tessellation::{effective_control_points, TessellateBezier, TessellationParams};

use super::point::common_dimension;
use super::{Accuracy, CloseMode, Dimension, Point};

static DASH_UPGRADE_WARNING: Once = Once::new();

/// A retained Bezier curve with its cached tessellation.
///
/// The caller's point list is kept as an `Arc<[Point]>`. Passing the same
/// `Arc` back to [`set_control_points`](Self::set_control_points) is a no-op;
/// a new list must be passed to force a rebuild. Every rebuild bumps
/// [`generation`](Self::generation).
#[derive(Debug, Clone)]
pub struct BezierCurve {
    source: Arc<[Point]>,
    control_points: Vec<Point>,
    params: TessellationParams,
    dimension: Dimension,
    offset: Vector3,
    vertices: Vec<Point>,
    generation: u64,
}

impl BezierCurve {
    /// Creates a curve and tessellates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are empty or mix dimensions, or if a
    /// closed curve has fewer than two points.
    pub fn new(
        points: impl Into<Arc<[Point]>>,
        params: TessellationParams,
        table: &mut CoefficientTable,
    ) -> Result<Self> {
        let source = points.into();
        let dimension = common_dimension(&source)?;
        let offset = Vector3::zeros();
        let (control_points, vertices) = tessellate(&source, params, &offset, table)?;

        Ok(Self {
            source,
            control_points,
            params,
            dimension,
            offset,
            vertices,
            generation: 0,
        })
    }

    /// Builds a curve that shares `self`'s control points but uses the given
    /// vertices and accumulated offset.
    pub(crate) fn with_vertices(&self, vertices: Vec<Point>, offset: Vector3) -> Self {
        Self {
            source: Arc::clone(&self.source),
            control_points: self.control_points.clone(),
            params: self.params,
            dimension: self.dimension,
            offset,
            vertices,
            generation: 0,
        }
    }

    /// Returns the point list the curve was created or last updated with.
    #[must_use]
    pub fn source_points(&self) -> &Arc<[Point]> {
        &self.source
    }

    /// Returns the evaluated control points, after concentration and closing.
    #[must_use]
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    /// Returns the cached tessellation.
    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Returns the degree of the evaluated curve.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    /// Returns whether the curve is 2D or 3D.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns whether the curve loops back to its start.
    #[must_use]
    pub fn close_mode(&self) -> CloseMode {
        self.params.close
    }

    /// Returns the tessellation level currently cached.
    #[must_use]
    pub fn accuracy(&self) -> Accuracy {
        self.params.accuracy
    }

    /// Returns the translation applied on top of the evaluated curve.
    #[must_use]
    pub fn offset(&self) -> &Vector3 {
        &self.offset
    }

    /// Returns how many times the tessellation has been rebuilt in place.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the control points and rebuilds the tessellation.
    ///
    /// Returns `false` without doing anything if `points` is the same `Arc`
    /// the curve already holds. The curve is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CountChanged`] if the point count differs from
    /// the current list, or an error if the new points are malformed or of a
    /// different dimension.
    pub fn set_control_points(
        &mut self,
        points: impl Into<Arc<[Point]>>,
        table: &mut CoefficientTable,
    ) -> Result<bool> {
        let points = points.into();
        if points.len() != self.source.len() {
            return Err(ShapeError::CountChanged {
                expected: self.source.len(),
                actual: points.len(),
            }
            .into());
        }
        if Arc::ptr_eq(&points, &self.source) {
            return Ok(false);
        }

        let dimension = common_dimension(&points)?;
        if dimension != self.dimension {
            return Err(DimensionError::Mismatch {
                left: self.dimension.count(),
                right: dimension.count(),
            }
            .into());
        }

        let (control_points, vertices) = tessellate(&points, self.params, &self.offset, table)?;
        self.source = points;
        self.control_points = control_points;
        self.vertices = vertices;
        self.generation += 1;
        Ok(true)
    }

    /// Re-tessellates at [`Accuracy::DASH_MIN`] if the current level is too
    /// coarse for dashing.
    ///
    /// # Errors
    ///
    /// Returns an error if the rebuild fails.
    pub fn ensure_dash_fidelity(
        &mut self,
        table: &mut CoefficientTable,
    ) -> Result<Option<DashFidelityWarning>> {
        let from = self.params.accuracy;
        if from.supports_dash() {
            return Ok(None);
        }

        let params = self.params.with_accuracy(Accuracy::DASH_MIN);
        let (control_points, vertices) = tessellate(&self.source, params, &self.offset, table)?;
        self.params = params;
        self.control_points = control_points;
        self.vertices = vertices;
        self.generation += 1;

        let warning = DashFidelityWarning {
            from,
            to: Accuracy::DASH_MIN,
        };
        DASH_UPGRADE_WARNING.call_once(|| {
            warn!(
                from = from.level(),
                to = Accuracy::DASH_MIN.level(),
                "accuracy raised for a dashed curve"
            );
        });
        Ok(Some(warning))
    }

    /// Draws the cached tessellation, solid or dashed.
    ///
    /// Solid draws never re-evaluate. A dashed draw first raises the accuracy
    /// if needed, reporting it in [`DrawReport::upgraded`].
    ///
    /// # Errors
    ///
    /// Returns an error if the surface is unsupported or its dimension
    /// differs from the curve's.
    pub fn redraw<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        dash: Option<DashPattern>,
        table: &mut CoefficientTable,
    ) -> Result<DrawReport> {
        self.check_surface(surface)?;
        let Some(pattern) = dash else {
            StrokePath::new(&self.vertices, self.params.close).execute(surface);
            return Ok(DrawReport::default());
        };

        let upgraded = self.ensure_dash_fidelity(table)?;
        let summary = StrokeDashed::new(&self.vertices, pattern).execute(surface)?;
        Ok(DrawReport {
            dash: Some(summary),
            upgraded,
        })
    }

    /// Returns a moved copy of the curve; `self` is left untouched.
    ///
    /// `dz` is ignored for 2D curves.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::MissingZ`] if the curve is 3D and `dz` is
    /// `None`.
    pub fn translate(&self, dx: f64, dy: f64, dz: Option<f64>) -> Result<Self> {
        Translate::new(dx, dy, dz).execute(self)
    }

    /// Returns the cached vertex nearest to `probe`.
    ///
    /// # Errors
    ///
    /// Returns an error if `probe` has a different dimension than the curve.
    pub fn nearest(&self, probe: &Point) -> Result<ClosestVertex> {
        ClosestVertexOnPolyline::new(&self.vertices, *probe).execute()
    }

    /// Returns the arc length of the cached tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error if the tessellation mixes dimensions.
    pub fn length(&self) -> Result<f64> {
        Length::new(&self.vertices).execute()
    }

    fn check_surface<S: DrawingSurface + ?Sized>(&self, surface: &S) -> Result<()> {
        let surface = surface_dimension(surface)?;
        if surface != self.dimension {
            return Err(DimensionError::SurfaceMismatch {
                surface: surface.count(),
                curve: self.dimension.count(),
            }
            .into());
        }
        Ok(())
    }
}

/// Evaluates `points` into effective control points and shifted vertices.
fn tessellate(
    points: &[Point],
    params: TessellationParams,
    offset: &Vector3,
    table: &mut CoefficientTable,
) -> Result<(Vec<Point>, Vec<Point>)> {
    let control_points = effective_control_points(points, params.close)?;
    let mut vertices = TessellateBezier::new(&control_points, params.accuracy).execute(table)?;
    if *offset != Vector3::zeros() {
        for vertex in &mut vertices {
            *vertex = vertex.translated(offset);
        }
    }
    Ok((control_points, vertices))
}
