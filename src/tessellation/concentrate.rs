use tracing::debug;

use crate::geometry::Point;
use crate::math::lcg::Lcg;
use crate::math::DEGREE_LIMIT;

/// Seed of the removal sequence. Changing it changes every reduced curve.
pub const CONCENTRATION_SEED: u32 = 0x2020_0815;

/// Points at either end of the list that are never removed.
const MARGIN: usize = 5;

/// Random draws per removal before falling back to linear probing.
const MAX_ATTEMPTS: usize = 64;

/// Control points synthesized when a curve is closed.
const CLOSING_POINTS: usize = 3;

/// Drops control points until the list fits under [`DEGREE_LIMIT`].
///
/// The k-th removal draws an index uniformly from `[5 + k, limit - 5 + k)`
/// using a fixed-seed [`Lcg`], redrawing on collision with an index already
/// removed. The same input always loses the same points, and the first and
/// last few points are always kept.
#[derive(Debug)]
pub struct Concentrate<'a> {
    points: &'a [Point],
    closing: bool,
}

impl<'a> Concentrate<'a> {
    /// Creates a new `Concentrate` operation.
    ///
    /// When `closing` is set, room is left for the three closing points.
    #[must_use]
    pub fn new(points: &'a [Point], closing: bool) -> Self {
        Self { points, closing }
    }

    /// Returns the largest point count that passes through untouched.
    #[must_use]
    pub fn limit(&self) -> usize {
        if self.closing {
            DEGREE_LIMIT - CLOSING_POINTS
        } else {
            DEGREE_LIMIT
        }
    }

    /// Returns the indices that would be removed, in removal order.
    #[must_use]
    pub fn removed_indices(&self) -> Vec<usize> {
        let len = self.points.len();
        let limit = self.limit();
        if len <= limit {
            return Vec::new();
        }

        let excess = len - limit;
        let window = limit - 2 * MARGIN;
        let mut removed = vec![false; len];
        let mut order = Vec::with_capacity(excess);
        let mut lcg = Lcg::new(CONCENTRATION_SEED);

        for k in 0..excess {
            let mut index = lcg.next_index(MARGIN + k, window);
            let mut attempts = 1;
            while removed[index] {
                if attempts == MAX_ATTEMPTS {
                    index = next_free(&removed, index);
                    break;
                }
                index = lcg.next_index(MARGIN + k, window);
                attempts += 1;
            }
            removed[index] = true;
            order.push(index);
        }

        order
    }

    /// Executes the operation, returning the reduced point list.
    #[must_use]
    pub fn execute(&self) -> Vec<Point> {
        let removed = self.removed_indices();
        if removed.is_empty() {
            return self.points.to_vec();
        }

        let mut keep = vec![true; self.points.len()];
        for &index in &removed {
            keep[index] = false;
        }

        debug!(
            input = self.points.len(),
            removed = removed.len(),
            "Concentrated control points"
        );

        self.points
            .iter()
            .zip(keep)
            .filter_map(|(point, kept)| kept.then_some(*point))
            .collect()
    }
}

/// Finds the next unremoved index after `from`, wrapping inside the margins.
fn next_free(removed: &[bool], from: usize) -> usize {
    let lo = MARGIN;
    let span = removed.len() - 2 * MARGIN;
    (1..=span)
        .map(|step| lo + (from - lo + step) % span)
        .find(|&i| !removed[i])
        .unwrap_or(from)
}
