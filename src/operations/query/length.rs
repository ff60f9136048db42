use crate::error::Result;
use crate::geometry::Point;
use crate::math::vertex::distance;

/// Computes the arc length of a tessellated curve.
pub struct Length<'a> {
    vertices: &'a [Point],
}

impl<'a> Length<'a> {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(vertices: &'a [Point]) -> Self {
        Self { vertices }
    }

    /// Executes the query, returning the summed length of every segment.
    ///
    /// Fewer than two vertices have zero length.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertices mix 2D and 3D points.
    pub fn execute(&self) -> Result<f64> {
        self.vertices
            .windows(2)
            .try_fold(0.0, |acc, pair| Ok(acc + distance(&pair[0], &pair[1])?))
    }
}
