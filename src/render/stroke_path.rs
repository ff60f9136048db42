use crate::geometry::{CloseMode, Point};

use super::{apply_style, DrawingSurface};

/// Emits a tessellated curve as one continuous path.
#[derive(Debug)]
pub struct StrokePath<'a> {
    vertices: &'a [Point],
    close: CloseMode,
}

impl<'a> StrokePath<'a> {
    /// Creates a new `StrokePath` operation.
    #[must_use]
    pub fn new(vertices: &'a [Point], close: CloseMode) -> Self {
        Self { vertices, close }
    }

    /// Executes the operation: `begin_path`, `move_to` the first vertex,
    /// `line_to` every other vertex, `close_path` for closed curves, then
    /// fill and stroke per the surface's flags.
    pub fn execute<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return;
        };

        surface.begin_path();
        surface.move_to(first);
        for vertex in rest {
            surface.line_to(vertex);
        }
        if self.close.is_closed() {
            surface.close_path();
        }
        apply_style(surface, true);
    }
}
