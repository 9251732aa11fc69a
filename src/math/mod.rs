pub mod polygon_3d;
pub mod vector_3d;

pub use vector_3d::VectorExt;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Default tolerance for degeneracy checks (near-zero lengths, near-collinear
/// points). Callers override it per operation through the `tolerance` fields.
pub const EPSILON: f64 = 1e-5;

/// Lengths at or below this are treated as exactly zero when normalizing.
pub const TOLERANCE_ZERO: f64 = 1e-12;
