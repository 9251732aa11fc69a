use crate::error::{GeometryError, Result};
use crate::math::polygon_3d::{
    max_plane_deviation, newell_normal, polygon_area_3d, triangle_normal,
};
use crate::math::{Point3, EPSILON};

use super::Plane;

/// A planar polygon: an ordered vertex loop plus its supporting plane.
///
/// The vertex order defines the winding; the plane normal follows the
/// right-hand rule, so a counter-clockwise loop seen from outside a solid
/// has an outward-facing normal.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point3>,
    plane: Plane,
}

impl Polygon {
    /// Creates a polygon from an ordered point loop using the default
    /// [`EPSILON`] tolerance.
    ///
    /// # Errors
    ///
    /// See [`Polygon::from_points_with_tolerance`].
    pub fn from_points(points: Vec<Point3>) -> Result<Self> {
        Self::from_points_with_tolerance(points, EPSILON)
    }

    /// Creates a polygon from an ordered point loop.
    ///
    /// The points are kept exactly as given: no reordering, no deduplication.
    /// The plane is taken from the first proper triangle `(p0, pi, pj)` with
    /// `i < j`, scanning in vertex order.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidPolygon`] for fewer than 3 points, and
    /// [`GeometryError::DegeneratePolygon`] if every candidate triangle is
    /// collinear or coincident under `tolerance`.
    pub fn from_points_with_tolerance(points: Vec<Point3>, tolerance: f64) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::InvalidPolygon {
                count: points.len(),
            }
            .into());
        }

        let anchor = points[0];
        let normal = (1..points.len())
            .flat_map(|i| (i + 1..points.len()).map(move |j| (i, j)))
            .find_map(|(i, j)| triangle_normal(&anchor, &points[i], &points[j], tolerance))
            .ok_or(GeometryError::DegeneratePolygon)?;

        let plane = Plane::from_normal(&anchor, &normal)?;
        Ok(Self {
            vertices: points,
            plane,
        })
    }

    /// Creates a polygon from a loop whose shape is known to be planar and
    /// convex, taking the plane from the Newell normal of the whole loop.
    ///
    /// No length tolerance applies, so arbitrarily small or thin generated
    /// faces keep their exact vertices and a correct plane.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidPolygon`] for fewer than 3 points and
    /// [`GeometryError::DegeneratePolygon`] if the loop encloses no area.
    pub(crate) fn from_loop(points: Vec<Point3>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::InvalidPolygon {
                count: points.len(),
            }
            .into());
        }
        let normal = newell_normal(&points).ok_or(GeometryError::DegeneratePolygon)?;
        let plane = Plane::from_normal(&points[0], &normal)?;
        Ok(Self {
            vertices: points,
            plane,
        })
    }

    /// Returns the vertex loop in construction order.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the supporting plane.
    #[must_use]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the polygon has no vertices (never the case for a
    /// constructed polygon).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Area enclosed by the vertex loop.
    #[must_use]
    pub fn area(&self) -> f64 {
        polygon_area_3d(&self.vertices, self.plane.normal())
    }

    /// Returns `true` if every vertex lies within `tolerance` of the plane.
    #[must_use]
    pub fn is_coplanar(&self, tolerance: f64) -> bool {
        max_plane_deviation(&self.vertices, self.plane.normal(), self.plane.offset()) <= tolerance
    }

    /// Returns the polygon with reversed winding and flipped plane.
    #[must_use]
    pub fn inverted(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self {
            vertices,
            plane: self.plane.flipped(),
        }
    }

    /// Consumes the polygon, returning its vertices.
    #[must_use]
    pub fn into_vertices(self) -> Vec<Point3> {
        self.vertices
    }
}
