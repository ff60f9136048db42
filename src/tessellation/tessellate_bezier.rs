use crate::error::{Result, ShapeError};
use crate::geometry::point::common_dimension;
use crate::geometry::{Accuracy, Point};
use crate::math::{CoefficientTable, Point3, Vector3, DEGREE_LIMIT};

/// Samples a Bezier curve of any degree into a polyline.
///
/// Vertices are evaluated with the Bernstein form
/// `B(t) = Σ C(n, i) (1 - t)^(n - i) t^i P_i` at `t = k / segments` for
/// `k = 0..=segments`, then the literal last control point is appended so the
/// polyline always ends exactly on it. The output is a pure function of the
/// inputs.
#[derive(Debug)]
pub struct TessellateBezier<'a> {
    points: &'a [Point],
    accuracy: Accuracy,
}

impl<'a> TessellateBezier<'a> {
    /// Creates a new `TessellateBezier` operation.
    #[must_use]
    pub fn new(points: &'a [Point], accuracy: Accuracy) -> Self {
        Self { points, accuracy }
    }

    /// Executes the tessellation, growing `table` to the curve's degree first.
    ///
    /// # Errors
    ///
    /// Returns an error if the point list is empty, mixes dimensions, or has
    /// a degree above [`DEGREE_LIMIT`].
    pub fn execute(&self, table: &mut CoefficientTable) -> Result<Vec<Point>> {
        let dimension = common_dimension(self.points)?;
        let degree = self.points.len() - 1;
        if degree > DEGREE_LIMIT {
            return Err(ShapeError::DegreeTooHigh {
                degree,
                limit: DEGREE_LIMIT,
            }
            .into());
        }
        table.ensure(degree);

        let controls: Vec<Vector3> = self.points.iter().map(|p| p.to_point3().coords).collect();
        let segments = self.accuracy.segments();
        let mut vertices = Vec::with_capacity(segments as usize + 2);

        for k in 0..=segments {
            let t = f64::from(k) / f64::from(segments);
            let position = bernstein(&controls, t, table);
            vertices.push(Point::from_point3(&Point3::from(position), dimension));
        }
        vertices.push(self.points[degree]);

        Ok(vertices)
    }
}

/// Evaluates the Bernstein sum at `t`.
fn bernstein(controls: &[Vector3], t: f64, table: &CoefficientTable) -> Vector3 {
    let n = controls.len() - 1;
    let s = 1.0 - t;
    controls
        .iter()
        .enumerate()
        .fold(Vector3::zeros(), |acc, (i, p)| {
            let weight = table.binomial(n, i) * powu(s, n - i) * powu(t, i);
            acc + p * weight
        })
}

fn powu(base: f64, exp: usize) -> f64 {
    base.powi(i32::try_from(exp).unwrap_or(i32::MAX))
}
