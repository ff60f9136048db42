use crate::error::Result;
use crate::geometry::Point;
use crate::math::vertex::{distance, interpolate};

use super::{apply_style, DashPattern, DrawingSurface};

/// Arc length spent in each phase of a dashed stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DashSummary {
    /// Length drawn.
    pub solid_length: f64,
    /// Length skipped.
    pub gap_length: f64,
    /// Number of solid runs started.
    pub dashes: usize,
}

impl DashSummary {
    /// Returns the total arc length walked.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.solid_length + self.gap_length
    }
}

/// Emits a tessellated curve as alternating solid and gap runs.
///
/// The polyline is walked at constant arc length. Phase changes that fall
/// inside a segment are placed by interpolation, so dash boundaries do not
/// snap to tessellation vertices. A solid run still in progress at the end
/// is drawn up to the last vertex. Dashed paths are never closed or filled.
#[derive(Debug)]
pub struct StrokeDashed<'a> {
    vertices: &'a [Point],
    pattern: DashPattern,
}

impl<'a> StrokeDashed<'a> {
    /// Creates a new `StrokeDashed` operation.
    #[must_use]
    pub fn new(vertices: &'a [Point], pattern: DashPattern) -> Self {
        Self { vertices, pattern }
    }

    /// Executes the operation, returning how the length was split.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertices mix 2D and 3D points.
    pub fn execute<S: DrawingSurface + ?Sized>(&self, surface: &mut S) -> Result<DashSummary> {
        let mut summary = DashSummary::default();
        let Some((first, rest)) = self.vertices.split_first() else {
            return Ok(summary);
        };

        surface.begin_path();
        surface.move_to(first);

        let mut solid = true;
        let mut needed = self.pattern.solid();
        let mut cursor = *first;
        summary.dashes = 1;

        for vertex in rest {
            let mut available = distance(&cursor, vertex)?;

            while available >= needed {
                let t = if available > 0.0 { needed / available } else { 0.0 };
                let boundary = interpolate(&cursor, vertex, t);
                if solid {
                    surface.line_to(&boundary);
                    summary.solid_length += needed;
                } else {
                    surface.move_to(&boundary);
                    summary.gap_length += needed;
                }

                cursor = boundary;
                available -= needed;
                solid = !solid;
                needed = if solid {
                    summary.dashes += 1;
                    self.pattern.solid()
                } else {
                    self.pattern.gap()
                };
            }

            if solid {
                if available > 0.0 {
                    surface.line_to(vertex);
                }
                summary.solid_length += available;
            } else {
                summary.gap_length += available;
            }
            needed -= available;
            cursor = *vertex;
        }

        apply_style(surface, false);
        Ok(summary)
    }
}
