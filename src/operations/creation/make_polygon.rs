use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::{Point3, EPSILON};

/// Creates a planar polygon from an ordered point loop.
pub struct MakePolygon {
    points: Vec<Point3>,
    tolerance: f64,
}

impl MakePolygon {
    /// Creates a new `MakePolygon` operation with the default tolerance.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self {
            points,
            tolerance: EPSILON,
        }
    }

    /// Sets the tolerance used to reject collinear or coincident vertices.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the operation, returning the polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 points were given or no plane can be
    /// derived from them.
    pub fn execute(self) -> Result<Polygon> {
        Polygon::from_points_with_tolerance(self.points, self.tolerance)
    }
}
