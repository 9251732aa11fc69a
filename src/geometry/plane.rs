use crate::error::Result;
use crate::math::{Point3, Vector3, VectorExt};

/// An infinite oriented plane in 3D space.
///
/// Stored in Hessian normal form: every point `p` on the plane satisfies
/// `normal · p = offset`, and `normal` has unit length. The positive side is
/// the side `normal` points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector3,
    offset: f64,
}

impl Plane {
    /// Creates a plane from a normal direction and a point on the plane.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal vector is zero-length.
    pub fn from_normal(origin: &Point3, normal: &Vector3) -> Result<Self> {
        let normal = normal.unit()?;
        Ok(Self {
            normal,
            offset: normal.dot(&origin.coords),
        })
    }

    /// Returns the unit normal of the plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the signed distance of the plane from the origin along the normal.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Signed distance from `point` to the plane, positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        self.normal.dot(&point.coords) - self.offset
    }

    /// Returns the same plane facing the opposite way.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            offset: -self.offset,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    #[test]
    fn from_normal_normalizes() {
        let plane = Plane::from_normal(&p(0.0, 0.0, 2.0), &v(0.0, 0.0, 5.0)).unwrap();
        assert_relative_eq!(*plane.normal(), Vector3::z());
        assert_relative_eq!(plane.offset(), 2.0);
    }

    #[test]
    fn zero_normal_fails() {
        assert!(Plane::from_normal(&p(0.0, 0.0, 0.0), &Vector3::zeros()).is_err());
    }

    #[test]
    fn signed_distance_sides() {
        let plane = Plane::from_normal(&p(1.0, 0.0, 0.0), &v(1.0, 0.0, 0.0)).unwrap();
        assert_relative_eq!(plane.signed_distance(&p(3.0, 7.0, -1.0)), 2.0);
        assert_relative_eq!(plane.signed_distance(&p(0.0, 0.0, 0.0)), -1.0);
        assert_relative_eq!(plane.signed_distance(&p(1.0, 5.0, 5.0)), 0.0);
    }

    #[test]
    fn flipped_swaps_sides() {
        let plane = Plane::from_normal(&p(0.0, 0.0, 1.0), &Vector3::z()).unwrap();
        let flipped = plane.flipped();
        let q = p(0.0, 0.0, 4.0);
        assert_relative_eq!(flipped.signed_distance(&q), -plane.signed_distance(&q));
    }
}
