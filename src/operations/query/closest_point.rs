use crate::error::{Result, ShapeError};
use crate::geometry::Point;
use crate::math::vertex::distance;

/// Result of a closest vertex query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestVertex {
    /// The closest tessellated vertex.
    pub vertex: Point,
    /// Position of the vertex in the tessellation.
    pub index: usize,
    /// The distance from the probe to the vertex.
    pub distance: f64,
}

/// Finds the tessellated vertex nearest to a probe point.
///
/// A plain linear scan: a curve has at most `segments + 2` vertices, so no
/// spatial index is built. Ties go to the earliest vertex.
pub struct ClosestVertexOnPolyline<'a> {
    vertices: &'a [Point],
    probe: Point,
}

impl<'a> ClosestVertexOnPolyline<'a> {
    /// Creates a new `ClosestVertexOnPolyline` query.
    #[must_use]
    pub fn new(vertices: &'a [Point], probe: Point) -> Self {
        Self { vertices, probe }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no vertices, or the probe's dimension
    /// differs from the vertices'.
    pub fn execute(&self) -> Result<ClosestVertex> {
        let mut best: Option<ClosestVertex> = None;

        for (index, vertex) in self.vertices.iter().enumerate() {
            let d = distance(vertex, &self.probe)?;
            let closer = match best {
                Some(b) => d < b.distance,
                None => true,
            };
            if closer {
                best = Some(ClosestVertex {
                    vertex: *vertex,
                    index,
                    distance: d,
                });
            }
        }

        best.ok_or_else(|| ShapeError::Empty.into())
    }
}
