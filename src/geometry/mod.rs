pub mod plane;
pub mod polygon;

pub use plane::Plane;
pub use polygon::Polygon;
