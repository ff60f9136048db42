mod closest_point;
mod length;

pub use closest_point::{ClosestVertex, ClosestVertexOnPolyline};
pub use length::Length;
