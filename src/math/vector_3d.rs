//! Vector helpers on top of nalgebra.
//!
//! Addition, subtraction, scaling, dot and cross products and length are the
//! nalgebra operators (`a + b`, `a - b`, `v * s`, `a.dot(&b)`, `a.cross(&b)`,
//! `v.norm()`). This module adds the fallible normalization and the frame
//! seeding the generators need.

use crate::error::{GeometryError, Result};

use super::{Vector3, TOLERANCE_ZERO};

/// Extra operations on [`Vector3`].
pub trait VectorExt {
    /// Returns the vector scaled to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the vector has (near) zero or
    /// non-finite length.
    fn unit(&self) -> Result<Vector3>;

    /// Returns a deterministic unit vector that is not parallel to `self`.
    ///
    /// Picks the global X axis, or the global Y axis when `self` is nearly
    /// parallel to X.
    fn arbitrary_orthogonal_seed(&self) -> Vector3;

    /// Returns a unit vector perpendicular to `self`, built from
    /// [`arbitrary_orthogonal_seed`](Self::arbitrary_orthogonal_seed).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if `self` is zero-length.
    fn orthogonal_unit(&self) -> Result<Vector3>;
}

impl VectorExt for Vector3 {
    fn unit(&self) -> Result<Vector3> {
        let len = self.norm();
        if !len.is_finite() || len <= TOLERANCE_ZERO {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self / len)
    }

    fn arbitrary_orthogonal_seed(&self) -> Vector3 {
        if self.x.abs() < 0.9 * self.norm() {
            Vector3::x()
        } else {
            Vector3::y()
        }
    }

    fn orthogonal_unit(&self) -> Result<Vector3> {
        let axis = self.unit()?;
        let seed = axis.arbitrary_orthogonal_seed();
        (seed - axis * seed.dot(&axis)).unit()
    }
}
