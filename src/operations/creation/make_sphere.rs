use crate::error::Result;
use crate::math::{Point3, Vector3, EPSILON};
use crate::topology::Solid;

use super::{EllipsoidOptions, MakeEllipsoid};

/// Parameters of a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereOptions {
    pub center: Point3,
    pub radius: f64,
    pub segments: usize,
    /// Orientation of the tessellation; the pole lies along `axes[2]`.
    pub axes: [Vector3; 3],
    pub tolerance: f64,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            radius: 1.0,
            segments: 12,
            axes: [Vector3::x(), Vector3::y(), Vector3::z()],
            tolerance: EPSILON,
        }
    }
}

impl From<SphereOptions> for EllipsoidOptions {
    fn from(o: SphereOptions) -> Self {
        Self {
            center: o.center,
            radius: [o.radius; 3],
            segments: o.segments,
            axes: o.axes,
            tolerance: o.tolerance,
        }
    }
}

/// Creates a sphere solid.
///
/// Forwards to [`MakeEllipsoid`] with all three semi-axes equal to the radius.
pub struct MakeSphere {
    options: SphereOptions,
}

impl MakeSphere {
    /// Creates a new `MakeSphere` operation.
    #[must_use]
    pub fn new(options: SphereOptions) -> Self {
        Self { options }
    }

    /// Executes the operation, returning the boundary polygons as a solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive or the tessellation
    /// parameters are invalid.
    pub fn execute(&self) -> Result<Solid> {
        MakeEllipsoid::new(self.options.into()).execute()
    }
}
