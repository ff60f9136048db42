use tracing::debug;

use crate::error::{DimensionError, Result};
use crate::geometry::{BezierCurve, Dimension};
use crate::math::Vector3;

/// Translates a curve by a displacement.
///
/// The result is a new curve sharing the source control points. Only the
/// cached vertices are shifted; the displacement is remembered so that a
/// later rebuild of the new curve lands in the same place.
#[derive(Debug)]
pub struct Translate {
    dx: f64,
    dy: f64,
    dz: Option<f64>,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(dx: f64, dy: f64, dz: Option<f64>) -> Self {
        Self { dx, dy, dz }
    }

    /// Returns the displacement applied to a curve of `dimension`.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::MissingZ`] for 3D without a `dz`.
    pub fn displacement(&self, dimension: Dimension) -> Result<Vector3> {
        match (dimension, self.dz) {
            (Dimension::Two, _) => Ok(Vector3::new(self.dx, self.dy, 0.0)),
            (Dimension::Three, Some(dz)) => Ok(Vector3::new(self.dx, self.dy, dz)),
            (Dimension::Three, None) => Err(DimensionError::MissingZ.into()),
        }
    }

    /// Executes the translation, leaving `curve` untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if `curve` is 3D and no `dz` was given.
    pub fn execute(&self, curve: &BezierCurve) -> Result<BezierCurve> {
        let displacement = self.displacement(curve.dimension())?;
        debug!(
            dx = displacement.x,
            dy = displacement.y,
            dz = displacement.z,
            vertices = curve.vertices().len(),
            "Translating curve"
        );

        let vertices = curve
            .vertices()
            .iter()
            .map(|v| v.translated(&displacement))
            .collect();
        Ok(curve.with_vertices(vertices, curve.offset() + displacement))
    }
}
