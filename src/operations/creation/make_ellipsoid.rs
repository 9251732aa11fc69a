use std::f64::consts::{FRAC_PI_2, TAU};

use tracing::debug;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::{Point3, Vector3, VectorExt, EPSILON};
use crate::topology::Solid;

use super::params::{check_center, check_positive, check_segments, check_tolerance, reject};

/// Parameters of a general ellipsoid.
///
/// `radius[k]` is the semi-axis length along `axes[k]`. The axes are
/// normalized before scaling but need not be orthogonal, so sheared
/// ellipsoids are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsoidOptions {
    pub center: Point3,
    pub radius: [f64; 3],
    /// Longitude tessellation count; latitude uses a quarter of it per hemisphere.
    pub segments: usize,
    pub axes: [Vector3; 3],
    /// Degeneracy tolerance (ε).
    pub tolerance: f64,
}

impl Default for EllipsoidOptions {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            radius: [1.0, 1.0, 1.0],
            segments: 12,
            axes: [Vector3::x(), Vector3::y(), Vector3::z()],
            tolerance: EPSILON,
        }
    }
}

/// Creates an ellipsoid solid.
pub struct MakeEllipsoid {
    options: EllipsoidOptions,
}

impl MakeEllipsoid {
    /// Creates a new `MakeEllipsoid` operation.
    #[must_use]
    pub fn new(options: EllipsoidOptions) -> Self {
        Self { options }
    }

    /// Executes the operation, returning the boundary polygons as a solid.
    ///
    /// The surface is cut into `segments` longitude strips, each split into
    /// `round(segments / 4)` latitude patches per hemisphere. Patches touching
    /// a pole are triangles.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidParameter`](crate::error::OperationError::InvalidParameter)
    /// naming the first rejected field.
    pub fn execute(&self) -> Result<Solid> {
        let o = &self.options;
        check_tolerance(o.tolerance)?;
        check_center(&o.center)?;
        check_positive("radius", &o.radius)?;
        check_segments(o.segments)?;

        let frame = EllipsoidFrame::new(o)?;
        let polygons = frame.polygons(o.segments)?;
        debug!(
            "ellipsoid: {} segments, {} latitude rows per hemisphere, {} polygons",
            o.segments,
            latitude_rows(o.segments),
            polygons.len()
        );
        Ok(Solid::from_polygons(polygons))
    }
}

/// Latitude rows per hemisphere: `segments / 4`, rounded half away from zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn latitude_rows(segments: usize) -> usize {
    ((segments as f64 / 4.0).round() as usize).max(1)
}

/// Shape of a single latitude patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatchShape {
    Quad,
    /// The far corners coincide at the pole; the patch has three vertices.
    PoleTriangle,
}

/// Scaled, possibly sheared frame of the ellipsoid.
struct EllipsoidFrame {
    center: Point3,
    xvector: Vector3,
    yvector: Vector3,
    zvector: Vector3,
    /// Whether the supplied axes form a right-handed basis.
    right_handed: bool,
}

impl EllipsoidFrame {
    fn new(o: &EllipsoidOptions) -> Result<Self> {
        let mut units = [Vector3::zeros(); 3];
        for (unit, axis) in units.iter_mut().zip(&o.axes) {
            *unit = axis
                .unit()
                .map_err(|_| reject("axes", "axis vectors must be non-zero"))?;
        }
        let triple = units[0].dot(&units[1].cross(&units[2]));
        if triple.abs() <= o.tolerance {
            return Err(reject("axes", "axis vectors must not be coplanar"));
        }

        Ok(Self {
            center: o.center,
            xvector: units[0] * o.radius[0],
            yvector: units[1] * o.radius[1],
            zvector: units[2] * o.radius[2],
            right_handed: triple > 0.0,
        })
    }

    /// Equatorial point at longitude `angle`.
    fn cylinder_point(&self, angle: f64) -> Vector3 {
        self.xvector * angle.cos() + self.yvector * angle.sin()
    }

    /// Surface point above (`side = 1`) or below (`side = -1`) the equator.
    fn surface_point(&self, cylinder_point: &Vector3, pitch: f64, side: f64) -> Point3 {
        self.center + cylinder_point * pitch.cos() + self.zvector * (side * pitch.sin())
    }

    /// Corners of one patch in upper-hemisphere winding order.
    fn patch(
        &self,
        longitude: [&Vector3; 2],
        pitch: [f64; 2],
        side: f64,
        shape: PatchShape,
    ) -> Vec<Point3> {
        let [c0, c1] = longitude;
        let [p0, p1] = pitch;
        match shape {
            PatchShape::Quad => vec![
                self.surface_point(c0, p0, side),
                self.surface_point(c1, p0, side),
                self.surface_point(c1, p1, side),
                self.surface_point(c0, p1, side),
            ],
            PatchShape::PoleTriangle => vec![
                self.surface_point(c0, p0, side),
                self.surface_point(c1, p0, side),
                self.center + self.zvector * side,
            ],
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn polygons(&self, segments: usize) -> Result<Vec<Polygon>> {
        let rows = latitude_rows(segments);
        let mut polygons = Vec::with_capacity(2 * segments * rows);

        for i in 0..segments {
            let c0 = self.cylinder_point(TAU * i as f64 / segments as f64);
            // The last strip closes onto the first longitude exactly.
            let c1 = if i + 1 == segments {
                self.cylinder_point(0.0)
            } else {
                self.cylinder_point(TAU * (i + 1) as f64 / segments as f64)
            };

            for j in 0..rows {
                let pitch = [
                    FRAC_PI_2 * j as f64 / rows as f64,
                    FRAC_PI_2 * (j + 1) as f64 / rows as f64,
                ];
                let shape = if j + 1 == rows {
                    PatchShape::PoleTriangle
                } else {
                    PatchShape::Quad
                };

                let mut upper = self.patch([&c0, &c1], pitch, 1.0, shape);
                let mut lower = self.patch([&c0, &c1], pitch, -1.0, shape);
                if self.right_handed {
                    lower.reverse();
                } else {
                    upper.reverse();
                }
                polygons.push(Polygon::from_loop(upper)?);
                polygons.push(Polygon::from_loop(lower)?);
            }
        }
        Ok(polygons)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64, z: f64) -> Vector3 {
        Vector3::new(x, y, z)
    }

    fn options() -> EllipsoidOptions {
        EllipsoidOptions::default()
    }

    #[test]
    fn latitude_rows_round() {
        assert_eq!(latitude_rows(4), 1);
        assert_eq!(latitude_rows(5), 1);
        assert_eq!(latitude_rows(6), 2);
        assert_eq!(latitude_rows(12), 3);
        assert_eq!(latitude_rows(13), 3);
        assert_eq!(latitude_rows(14), 4);
    }

    #[test]
    fn default_ellipsoid_counts() {
        let solid = MakeEllipsoid::new(options()).execute().unwrap();
        assert_eq!(solid.len(), 2 * 12 * 3);
        let triangles = solid.iter().filter(|p| p.len() == 3).count();
        assert_eq!(triangles, 2 * 12);
    }

    #[test]
    fn pole_triangle_uses_exact_pole() {
        let frame = EllipsoidFrame::new(&EllipsoidOptions {
            radius: [1.0, 2.0, 3.0],
            ..options()
        })
        .unwrap();
        let c0 = frame.cylinder_point(0.0);
        let c1 = frame.cylinder_point(1.0);
        let tri = frame.patch([&c0, &c1], [0.5, FRAC_PI_2], 1.0, PatchShape::PoleTriangle);
        assert_eq!(tri.len(), 3);
        assert_eq!(tri[2], Point3::new(0.0, 0.0, 3.0));
        let tri = frame.patch([&c0, &c1], [0.5, FRAC_PI_2], -1.0, PatchShape::PoleTriangle);
        assert_eq!(tri[2], Point3::new(0.0, 0.0, -3.0));
    }

    #[test]
    fn quad_patch_corners() {
        let frame = EllipsoidFrame::new(&options()).unwrap();
        let c0 = frame.cylinder_point(0.0);
        let c1 = frame.cylinder_point(FRAC_PI_2);
        let quad = frame.patch([&c0, &c1], [0.0, FRAC_PI_2 / 2.0], 1.0, PatchShape::Quad);
        assert_eq!(quad.len(), 4);
        assert_relative_eq!(quad[0], Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(quad[1], Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(quad[2], Point3::new(0.0, h, h), epsilon = 1e-12);
        assert_relative_eq!(quad[3], Point3::new(h, 0.0, h), epsilon = 1e-12);
    }

    #[test]
    fn axes_are_normalized_then_scaled() {
        let frame = EllipsoidFrame::new(&EllipsoidOptions {
            radius: [2.0, 3.0, 4.0],
            axes: [v(5.0, 0.0, 0.0), v(0.0, 0.5, 0.0), v(0.0, 0.0, 9.0)],
            ..options()
        })
        .unwrap();
        assert_relative_eq!(frame.xvector, v(2.0, 0.0, 0.0));
        assert_relative_eq!(frame.yvector, v(0.0, 3.0, 0.0));
        assert_relative_eq!(frame.zvector, v(0.0, 0.0, 4.0));
        assert!(frame.right_handed);
    }

    #[test]
    fn left_handed_axes_keep_outward_winding() {
        let left = EllipsoidOptions {
            axes: [Vector3::x(), -Vector3::y(), Vector3::z()],
            ..options()
        };
        assert!(!EllipsoidFrame::new(&left).unwrap().right_handed);
        let solid = MakeEllipsoid::new(left).execute().unwrap();
        for poly in &solid {
            let centroid = poly
                .vertices()
                .iter()
                .fold(Vector3::zeros(), |acc, p| acc + p.coords)
                / poly.len() as f64;
            assert!(poly.plane().normal().dot(&centroid) > 0.0);
        }
    }

    #[test]
    fn zero_axis_rejected() {
        let err = MakeEllipsoid::new(EllipsoidOptions {
            axes: [Vector3::x(), Vector3::zeros(), Vector3::z()],
            ..options()
        })
        .execute()
        .unwrap_err();
        assert_eq!(err.parameter(), Some("axes"));
    }

    #[test]
    fn coplanar_axes_rejected() {
        let err = MakeEllipsoid::new(EllipsoidOptions {
            axes: [Vector3::x(), Vector3::y(), v(1.0, 1.0, 0.0)],
            ..options()
        })
        .execute()
        .unwrap_err();
        assert_eq!(err.parameter(), Some("axes"));
    }

    #[test]
    fn non_positive_radius_rejected() {
        let err = MakeEllipsoid::new(EllipsoidOptions {
            radius: [1.0, 0.0, 1.0],
            ..options()
        })
        .execute()
        .unwrap_err();
        assert_eq!(err.parameter(), Some("radius"));
    }

    #[test]
    fn too_few_segments_rejected() {
        let err = MakeEllipsoid::new(EllipsoidOptions {
            segments: 3,
            ..options()
        })
        .execute()
        .unwrap_err();
        assert_eq!(err.parameter(), Some("segments"));
    }
}
