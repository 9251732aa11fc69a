mod area;
mod bounding_box;

pub use area::Area;
pub use bounding_box::{Aabb, BoundingBox};
