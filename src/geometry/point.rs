use crate::error::{Result, ShapeError};
use crate::math::{Point2, Point3, Vector3};

/// Number of coordinate axes a curve lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Planar `(x, y)` coordinates.
    Two,
    /// Spatial `(x, y, z)` coordinates.
    Three,
}

impl Dimension {
    /// Returns the dimension for an axis count, if it is 2 or 3.
    #[must_use]
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }

    /// Returns the number of coordinate axes.
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

/// A control point or tessellated vertex in 2D or 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Point {
    /// Planar point.
    Xy(Point2),
    /// Spatial point.
    Xyz(Point3),
}

impl Point {
    /// Creates a 2D point.
    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::Xy(Point2::new(x, y))
    }

    /// Creates a 3D point.
    #[must_use]
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::Xyz(Point3::new(x, y, z))
    }

    /// Creates a point from a coordinate slice of length 2 or 3.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CoordinateCount`] for any other length.
    pub fn from_slice(coords: &[f64]) -> Result<Self> {
        match *coords {
            [x, y] => Ok(Self::xy(x, y)),
            [x, y, z] => Ok(Self::xyz(x, y, z)),
            _ => Err(ShapeError::CoordinateCount {
                actual: coords.len(),
            }
            .into()),
        }
    }

    /// Rebuilds a point of `dimension` from a 3D position, dropping `z` for 2D.
    #[must_use]
    pub fn from_point3(p: &Point3, dimension: Dimension) -> Self {
        match dimension {
            Dimension::Two => Self::xy(p.x, p.y),
            Dimension::Three => Self::Xyz(*p),
        }
    }

    /// Returns whether the point is 2D or 3D.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Xy(_) => Dimension::Two,
            Self::Xyz(_) => Dimension::Three,
        }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Xy(p) => p.x,
            Self::Xyz(p) => p.x,
        }
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        match self {
            Self::Xy(p) => p.y,
            Self::Xyz(p) => p.y,
        }
    }

    /// Returns `z`, or `None` for a 2D point.
    #[must_use]
    pub fn z(&self) -> Option<f64> {
        match self {
            Self::Xy(_) => None,
            Self::Xyz(p) => Some(p.z),
        }
    }

    /// Returns the coordinates as a slice of length 2 or 3.
    #[must_use]
    pub fn coords(&self) -> &[f64] {
        match self {
            Self::Xy(p) => p.coords.as_slice(),
            Self::Xyz(p) => p.coords.as_slice(),
        }
    }

    /// Lifts the point into 3D space (`z = 0` for 2D points).
    #[must_use]
    pub fn to_point3(&self) -> Point3 {
        match self {
            Self::Xy(p) => Point3::new(p.x, p.y, 0.0),
            Self::Xyz(p) => *p,
        }
    }

    /// Returns the point shifted by `offset`; `offset.z` is ignored in 2D.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        match self {
            Self::Xy(p) => Self::xy(p.x + offset.x, p.y + offset.y),
            Self::Xyz(p) => Self::Xyz(p + offset),
        }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::xy(x, y)
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::xyz(x, y, z)
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::Xy(p)
    }
}

impl From<Point3> for Point {
    fn from(p: Point3) -> Self {
        Self::Xyz(p)
    }
}

/// Checks that every point shares the first point's dimension.
///
/// # Errors
///
/// Returns [`ShapeError::Empty`] for an empty list and
/// [`ShapeError::MixedDimensions`] naming the first offending point.
pub fn common_dimension(points: &[Point]) -> Result<Dimension> {
    let first = points.first().ok_or(ShapeError::Empty)?.dimension();
    for (index, point) in points.iter().enumerate().skip(1) {
        let actual = point.dimension();
        if actual != first {
            return Err(ShapeError::MixedDimensions {
                index,
                expected: first.count(),
                actual: actual.count(),
            }
            .into());
        }
    }
    Ok(first)
}
