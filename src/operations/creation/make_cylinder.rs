use std::f64::consts::TAU;

use crate::error::Result;
use crate::math::{Point3, EPSILON};
use crate::topology::Solid;

use super::{CylinderEllipticOptions, MakeCylinderElliptic};

/// Parameters of a circular cylinder, cone frustum or wedge thereof.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderOptions {
    pub center: Point3,
    pub height: f64,
    pub start_radius: f64,
    pub end_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub segments: usize,
    pub tolerance: f64,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            height: 2.0,
            start_radius: 1.0,
            end_radius: 1.0,
            start_angle: 0.0,
            end_angle: TAU,
            segments: 12,
            tolerance: EPSILON,
        }
    }
}

impl From<CylinderOptions> for CylinderEllipticOptions {
    fn from(o: CylinderOptions) -> Self {
        Self {
            center: o.center,
            height: o.height,
            start_radius: [o.start_radius, o.start_radius],
            end_radius: [o.end_radius, o.end_radius],
            start_angle: o.start_angle,
            end_angle: o.end_angle,
            segments: o.segments,
            tolerance: o.tolerance,
        }
    }
}

/// Creates a circular cylinder solid.
///
/// Forwards to [`MakeCylinderElliptic`] with equal X/Y radii at each end.
pub struct MakeCylinder {
    options: CylinderOptions,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    #[must_use]
    pub fn new(options: CylinderOptions) -> Self {
        Self { options }
    }

    /// Executes the operation, returning the boundary polygons as a solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the elliptic generator rejects the parameters;
    /// radius failures are reported as `start_radius` / `end_radius`.
    pub fn execute(&self) -> Result<Solid> {
        MakeCylinderElliptic::new(self.options.into()).execute()
    }
}
