mod accuracy;
mod bezier;
mod close_mode;
pub mod point;

pub use accuracy::Accuracy;
pub use bezier::BezierCurve;
pub use close_mode::CloseMode;
pub use point::{Dimension, Point};
