use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::topology::Solid;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

/// Computes the axis-aligned bounding box of a solid.
pub struct BoundingBox<'a> {
    solid: &'a Solid,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB of all polygon vertices.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::EmptySolid`] if the solid has no polygons.
    pub fn execute(&self) -> Result<Aabb> {
        let mut vertices = self.solid.iter().flat_map(|poly| poly.vertices().iter());
        let first = vertices.next().ok_or(OperationError::EmptySolid)?;
        let (min, max) = vertices.fold((*first, *first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        });
        Ok(Aabb { min, max })
    }
}
