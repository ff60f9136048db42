pub mod coefficients;
pub mod lcg;
pub mod vertex;

pub use coefficients::{CoefficientTable, DEGREE_LIMIT};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;
