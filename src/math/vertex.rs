use crate::error::{DimensionError, Result, ShapeError};
use crate::geometry::Point;
use crate::math::{Point2, Point3};

/// Returns the Euclidean distance between two points of the same dimension.
///
/// # Errors
///
/// Returns [`DimensionError::Mismatch`] if one point is 2D and the other 3D.
pub fn distance(a: &Point, b: &Point) -> Result<f64> {
    match (a, b) {
        (Point::Xy(a), Point::Xy(b)) => Ok(nalgebra::distance(a, b)),
        (Point::Xyz(a), Point::Xyz(b)) => Ok(nalgebra::distance(a, b)),
        _ => Err(DimensionError::Mismatch {
            left: a.dimension().count(),
            right: b.dimension().count(),
        }
        .into()),
    }
}

/// Returns `a + (b - a) * t`.
///
/// Mixed 2D/3D operands return `b` unchanged; callers should not rely on it.
#[must_use]
pub fn interpolate(a: &Point, b: &Point, t: f64) -> Point {
    match (a, b) {
        (Point::Xy(a), Point::Xy(b)) => Point::Xy(a + (b - a) * t),
        (Point::Xyz(a), Point::Xyz(b)) => Point::Xyz(a + (b - a) * t),
        _ => *b,
    }
}

/// Computes the three control points that close a curve smoothly.
///
/// Returns `[2 * last - second_last, 2 * first - second, first]`. The two
/// reflections keep the tangent continuous across the seam and the repeated
/// first point closes the loop. With exactly two points the reflections are
/// collinear with the input and the closed curve degenerates to a segment
/// traced back and forth.
///
/// # Errors
///
/// Returns [`ShapeError::TooFewPoints`] for fewer than two points.
pub fn closed_curve_extra_points(points: &[Point]) -> Result<[Point; 3]> {
    let n = points.len();
    if n < 2 {
        return Err(ShapeError::TooFewPoints {
            required: 2,
            actual: n,
        }
        .into());
    }

    let first = points[0];
    let second = points[1];
    let last = points[n - 1];
    let second_last = points[n - 2];

    Ok([
        reflect(&second_last, &last),
        reflect(&second, &first),
        first,
    ])
}

/// Reflects `p` through `pivot`: `2 * pivot - p`, per component.
fn reflect(p: &Point, pivot: &Point) -> Point {
    match (p, pivot) {
        (Point::Xy(p), Point::Xy(pivot)) => {
            Point::Xy(Point2::from(pivot.coords * 2.0 - p.coords))
        }
        (Point::Xyz(p), Point::Xyz(pivot)) => {
            Point::Xyz(Point3::from(pivot.coords * 2.0 - p.coords))
        }
        _ => *pivot,
    }
}
