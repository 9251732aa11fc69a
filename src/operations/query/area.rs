use crate::geometry::Polygon;
use crate::topology::Solid;

/// Computes the total surface area of a solid.
///
/// Sums the exact areas of the boundary polygons, so the result is the area
/// of the tessellated surface, not of the ideal curved one.
pub struct Area<'a> {
    solid: &'a Solid,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the total surface area. An empty solid
    /// has zero area.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.solid.iter().map(Polygon::area).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{
        CylinderOptions, EllipsoidOptions, MakeCylinder, MakeEllipsoid, MakeSphere, SphereOptions,
    };
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn empty_solid_area() {
        assert_relative_eq!(Area::new(&Solid::default()).execute(), 0.0);
    }

    #[test]
    fn cylinder_area() {
        let solid = MakeCylinder::new(CylinderOptions {
            start_radius: 2.0,
            end_radius: 2.0,
            height: 5.0,
            segments: 8,
            ..Default::default()
        })
        .execute()
        .unwrap();

        let area = Area::new(&solid).execute();
        // Two regular octagons plus eight chord-wide rectangles.
        let n = 8.0;
        let caps = 2.0 * 0.5 * n * 4.0 * (2.0 * PI / n).sin();
        let sides = n * 2.0 * 2.0 * (PI / n).sin() * 5.0;
        assert_relative_eq!(area, caps + sides, epsilon = 1e-9);
    }

    #[test]
    fn sphere_area_approaches_ideal() {
        let solid = MakeSphere::new(SphereOptions {
            radius: 3.0,
            segments: 64,
            ..Default::default()
        })
        .execute()
        .unwrap();

        let area = Area::new(&solid).execute();
        let ideal = 4.0 * PI * 9.0;
        assert!(area < ideal);
        assert!((ideal - area) / ideal < 0.01, "area {area} too far from {ideal}");
    }

    #[test]
    fn ellipsoid_area_scales_with_radius() {
        let small = MakeEllipsoid::new(EllipsoidOptions::default())
            .execute()
            .unwrap();
        let large = MakeEllipsoid::new(EllipsoidOptions {
            radius: [2.0, 2.0, 2.0],
            ..Default::default()
        })
        .execute()
        .unwrap();
        assert_relative_eq!(
            Area::new(&large).execute(),
            4.0 * Area::new(&small).execute(),
            max_relative = 1e-12
        );
    }
}
