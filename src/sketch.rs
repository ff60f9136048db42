use std::sync::Arc;

use slotmap::SlotMap;
use tracing::debug;

use crate::error::{DimensionError, Result, SketchError};
use crate::geometry::{BezierCurve, Dimension, Point};
use crate::math::CoefficientTable;
use crate::operations::query::ClosestVertex;
use crate::render::{surface_dimension, DashPattern, DrawReport, DrawingSurface, StrokePath};
use crate::tessellation::{effective_control_points, TessellateBezier, TessellationParams};

slotmap::new_key_type! {
    /// Unique identifier for a curve retained by a [`Sketch`].
    pub struct CurveId;
}

/// A drawing surface bound together with the curves drawn on it.
///
/// The surface's dimension is read once in [`bind`](Self::bind); every curve
/// must match it. The sketch owns the coefficient table shared by all of its
/// curves.
#[derive(Debug)]
pub struct Sketch<S: DrawingSurface> {
    surface: S,
    dimension: Dimension,
    table: CoefficientTable,
    curves: SlotMap<CurveId, BezierCurve>,
}

impl<S: DrawingSurface> Sketch<S> {
    /// Binds a surface.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Unsupported`](crate::error::SurfaceError::Unsupported)
    /// if the surface has no path primitives or is neither 2D nor 3D.
    pub fn bind(surface: S) -> Result<Self> {
        let dimension = surface_dimension(&surface)?;
        debug!(dimension = dimension.count(), "Bound drawing surface");
        Ok(Self {
            surface,
            dimension,
            table: CoefficientTable::new(),
            curves: SlotMap::with_key(),
        })
    }

    /// Returns the dimension read from the surface at bind time.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Returns the bound surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the bound surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Unbinds the surface, dropping every retained curve.
    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Returns the number of retained curves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns `true` if no curves are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Evaluates and strokes a curve without retaining it.
    ///
    /// Returns the control points that were evaluated, after concentration
    /// and closing.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are malformed or do not match the
    /// surface's dimension.
    pub fn draw(&mut self, points: &[Point], params: TessellationParams) -> Result<Vec<Point>> {
        let control_points = effective_control_points(points, params.close)?;
        self.check_dimension(control_points[0].dimension())?;
        let vertices =
            TessellateBezier::new(&control_points, params.accuracy).execute(&mut self.table)?;
        StrokePath::new(&vertices, params.close).execute(&mut self.surface);
        Ok(control_points)
    }

    /// Creates a retained curve and returns its handle. Nothing is drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the points are malformed or do not match the
    /// surface's dimension.
    pub fn create_curve(
        &mut self,
        points: impl Into<Arc<[Point]>>,
        params: TessellationParams,
    ) -> Result<CurveId> {
        let curve = BezierCurve::new(points, params, &mut self.table)?;
        self.check_dimension(curve.dimension())?;
        Ok(self.curves.insert(curve))
    }

    /// Returns the curve for a handle.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::CurveNotFound`] for an unknown or removed handle.
    pub fn curve(&self, id: CurveId) -> Result<&BezierCurve> {
        self.curves
            .get(id)
            .ok_or_else(|| SketchError::CurveNotFound.into())
    }

    /// Returns the curve for a handle, mutably.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::CurveNotFound`] for an unknown or removed handle.
    pub fn curve_mut(&mut self, id: CurveId) -> Result<&mut BezierCurve> {
        self.curves
            .get_mut(id)
            .ok_or_else(|| SketchError::CurveNotFound.into())
    }

    /// Draws a retained curve from its cached tessellation.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown.
    pub fn redraw(&mut self, id: CurveId, dash: Option<DashPattern>) -> Result<DrawReport> {
        let curve = self
            .curves
            .get_mut(id)
            .ok_or(SketchError::CurveNotFound)?;
        curve.redraw(&mut self.surface, dash, &mut self.table)
    }

    /// Replaces a curve's control points. See
    /// [`BezierCurve::set_control_points`].
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown or the update is rejected.
    pub fn update(&mut self, id: CurveId, points: impl Into<Arc<[Point]>>) -> Result<bool> {
        let curve = self
            .curves
            .get_mut(id)
            .ok_or(SketchError::CurveNotFound)?;
        curve.set_control_points(points, &mut self.table)
    }

    /// Retains a translated copy of a curve and returns the new handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown, or the curve is 3D and `dz`
    /// is `None`.
    pub fn translate(&mut self, id: CurveId, dx: f64, dy: f64, dz: Option<f64>) -> Result<CurveId> {
        let moved = self.curve(id)?.translate(dx, dy, dz)?;
        Ok(self.curves.insert(moved))
    }

    /// Like [`translate`](Self::translate), then draws the new curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the translation fails.
    pub fn translate_and_redraw(
        &mut self,
        id: CurveId,
        dx: f64,
        dy: f64,
        dz: Option<f64>,
        dash: Option<DashPattern>,
    ) -> Result<(CurveId, DrawReport)> {
        let moved = self.translate(id, dx, dy, dz)?;
        let report = self.redraw(moved, dash)?;
        Ok((moved, report))
    }

    /// Returns the vertex of a curve nearest to `probe`.
    ///
    /// # Errors
    ///
    /// Returns an error if the handle is unknown or `probe` has the wrong
    /// dimension.
    pub fn nearest(&self, id: CurveId, probe: &Point) -> Result<ClosestVertex> {
        self.curve(id)?.nearest(probe)
    }

    /// Drops a curve, returning it if the handle was live.
    pub fn remove(&mut self, id: CurveId) -> Option<BezierCurve> {
        self.curves.remove(id)
    }

    fn check_dimension(&self, curve: Dimension) -> Result<()> {
        if curve != self.dimension {
            return Err(DimensionError::SurfaceMismatch {
                surface: self.dimension.count(),
                curve: curve.count(),
            }
            .into());
        }
        Ok(())
    }
}
