use std::f64::consts::TAU;

use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::math::{Point3, Vector3, VectorExt, EPSILON};
use crate::topology::Solid;

use super::params::{
    check_center, check_non_negative, check_positive, check_segments, check_tolerance, reject,
};

/// Parameters of an elliptic cylinder, cone frustum or wedge thereof.
///
/// The solid spans `height` along Z, centered on `center`. Each end has its
/// own pair of X/Y semi-axes, and the cross-section is swept from
/// `start_angle` to `end_angle` (radians).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderEllipticOptions {
    pub center: Point3,
    pub height: f64,
    pub start_radius: [f64; 2],
    pub end_radius: [f64; 2],
    pub start_angle: f64,
    pub end_angle: f64,
    /// Tessellation count for a full turn; partial sweeps get a proportional share.
    pub segments: usize,
    /// Degeneracy tolerance (ε).
    pub tolerance: f64,
}

impl Default for CylinderEllipticOptions {
    fn default() -> Self {
        Self {
            center: Point3::origin(),
            height: 2.0,
            start_radius: [1.0, 1.0],
            end_radius: [1.0, 1.0],
            start_angle: 0.0,
            end_angle: TAU,
            segments: 12,
            tolerance: EPSILON,
        }
    }
}

/// Creates an elliptic cylinder solid.
///
/// Covers right cylinders, cones and frusta with elliptical cross-sections,
/// and partial-rotation wedges of all of these.
pub struct MakeCylinderElliptic {
    options: CylinderEllipticOptions,
}

impl MakeCylinderElliptic {
    /// Creates a new `MakeCylinderElliptic` operation.
    #[must_use]
    pub fn new(options: CylinderEllipticOptions) -> Self {
        Self { options }
    }

    /// Executes the operation, returning the boundary polygons as a solid.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidParameter`] naming the first rejected
    /// field, or [`OperationError::InsufficientRotation`] if the angular sweep
    /// is too thin to form a solid.
    pub fn execute(&self) -> Result<Solid> {
        let o = &self.options;
        check_tolerance(o.tolerance)?;
        check_center(&o.center)?;
        if !o.height.is_finite() || o.height <= 2.0 * o.tolerance {
            return Err(reject(
                "height",
                format!("must be greater than {}, got {}", 2.0 * o.tolerance, o.height),
            ));
        }
        check_positive("start_radius", &o.start_radius)?;
        check_positive("end_radius", &o.end_radius)?;
        check_non_negative("start_angle", o.start_angle)?;
        check_non_negative("end_angle", o.end_angle)?;
        check_segments(o.segments)?;

        let sweep = Sweep::new(o.start_angle, o.end_angle);
        let min_radius = o
            .start_radius
            .iter()
            .chain(&o.end_radius)
            .copied()
            .fold(f64::INFINITY, f64::min);
        let min_angle = min_rotation(min_radius, o.tolerance);
        if sweep.rotation < min_angle {
            debug!(
                "rejected rotation {:.6} rad, minimum is {:.6} rad",
                sweep.rotation, min_angle
            );
            return Err(OperationError::InsufficientRotation {
                rotation: sweep.rotation,
                min_angle,
            }
            .into());
        }

        let tessellation = CylinderTessellation::new(o, sweep)?;
        let polygons = tessellation.polygons()?;
        debug!(
            "elliptic cylinder: rotation {:.6} rad, {} slices, {} polygons",
            sweep.rotation,
            tessellation.slices,
            polygons.len()
        );
        Ok(Solid::from_polygons(polygons))
    }
}

/// Angular extent of the sweep after normalizing both angles into `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Sweep {
    start_angle: f64,
    rotation: f64,
    closed: bool,
}

impl Sweep {
    fn new(start_angle: f64, end_angle: f64) -> Self {
        let start = start_angle.rem_euclid(TAU);
        let end = end_angle.rem_euclid(TAU);
        let (rotation, closed) = if start < end {
            (end - start, false)
        } else if start > end {
            (end + (TAU - start), false)
        } else {
            (TAU, true)
        };
        Self {
            start_angle: start,
            rotation,
            closed,
        }
    }

    /// Number of angular slices for `segments` per full turn.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn slices(&self, segments: usize) -> usize {
        ((segments as f64 * (self.rotation / TAU)).floor() as usize).max(1)
    }
}

/// Smallest sweep whose chord at `radius` is at least `tolerance` long.
fn min_rotation(radius: f64, tolerance: f64) -> f64 {
    let r2 = radius * radius;
    ((2.0 * r2 - tolerance * tolerance) / (2.0 * r2))
        .clamp(-1.0, 1.0)
        .acos()
}

/// How one end of the cylinder closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CapShape {
    /// A fan of cap triangles around the end center.
    Disc,
    /// Both semi-axes vanish: the end is a single point and the side wall
    /// meets it in triangles, with no cap.
    Apex,
}

impl CapShape {
    fn of(radius: [f64; 2], tolerance: f64) -> Self {
        if radius[0] < tolerance && radius[1] < tolerance {
            Self::Apex
        } else {
            Self::Disc
        }
    }
}

/// Sampling frame and emission rules for an elliptic cylinder.
///
/// Works on validated parameters, but tolerates one point-like end so the
/// apex branch can be exercised directly.
struct CylinderTessellation {
    center: Vector3,
    start: Vector3,
    end: Vector3,
    axis_x: Vector3,
    axis_y: Vector3,
    start_radius: [f64; 2],
    end_radius: [f64; 2],
    start_shape: CapShape,
    end_shape: CapShape,
    sweep: Sweep,
    slices: usize,
}

impl CylinderTessellation {
    fn new(o: &CylinderEllipticOptions, sweep: Sweep) -> Result<Self> {
        let start = Vector3::new(0.0, 0.0, -o.height / 2.0);
        let end = Vector3::new(0.0, 0.0, o.height / 2.0);
        let axis_z = (end - start).unit()?;
        let axis_x = axis_z.orthogonal_unit()?;
        let axis_y = axis_x.cross(&axis_z);

        let start_shape = CapShape::of(o.start_radius, o.tolerance);
        let end_shape = CapShape::of(o.end_radius, o.tolerance);
        if start_shape == CapShape::Apex && end_shape == CapShape::Apex {
            return Err(reject("end_radius", "both ends collapse to a point"));
        }

        Ok(Self {
            center: o.center.coords,
            start,
            end,
            axis_x,
            axis_y,
            start_radius: o.start_radius,
            end_radius: o.end_radius,
            start_shape,
            end_shape,
            sweep,
            slices: sweep.slices(o.segments),
        })
    }

    /// Surface point at height fraction `stack` and sweep fraction `fraction`.
    fn point(&self, stack: f64, fraction: f64, radius: [f64; 2]) -> Vector3 {
        let angle = fraction * self.sweep.rotation + self.sweep.start_angle;
        let out = self.axis_x * (radius[0] * angle.cos()) + self.axis_y * (radius[1] * angle.sin());
        self.start + (self.end - self.start) * stack + out
    }

    /// Rim point of the bottom end, or the end center for an apex.
    fn bottom_rim(&self, fraction: f64) -> Vector3 {
        match self.start_shape {
            CapShape::Disc => self.point(0.0, fraction, self.start_radius),
            CapShape::Apex => self.start,
        }
    }

    /// Rim point of the top end, or the end center for an apex.
    fn top_rim(&self, fraction: f64) -> Vector3 {
        match self.end_shape {
            CapShape::Disc => self.point(1.0, fraction, self.end_radius),
            CapShape::Apex => self.end,
        }
    }

    fn face(&self, points: &[Vector3]) -> Result<Polygon> {
        let points = points
            .iter()
            .map(|p| Point3::from(p + self.center))
            .collect();
        Polygon::from_loop(points)
    }

    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    fn polygons(&self) -> Result<Vec<Polygon>> {
        let (start, end) = (self.start, self.end);
        let straight = self.start_shape == CapShape::Disc
            && self.end_shape == CapShape::Disc
            && self.start_radius == self.end_radius;

        let mut polygons = Vec::with_capacity(4 * self.slices + 4);
        for i in 0..self.slices {
            let f0 = i as f64 / self.slices as f64;
            // The seam of a closed sweep reuses the first column exactly.
            let f1 = if self.sweep.closed && i == self.slices - 1 {
                0.0
            } else {
                (i + 1) as f64 / self.slices as f64
            };
            let (s0, s1) = (self.bottom_rim(f0), self.bottom_rim(f1));
            let (e0, e1) = (self.top_rim(f0), self.top_rim(f1));

            if self.start_shape == CapShape::Disc {
                polygons.push(self.face(&[start, s0, s1])?);
            }
            if straight {
                polygons.push(self.face(&[s0, e0, e1, s1])?);
            } else {
                match (self.start_shape, self.end_shape) {
                    (CapShape::Apex, _) => polygons.push(self.face(&[start, e0, e1])?),
                    (_, CapShape::Apex) => polygons.push(self.face(&[s0, end, s1])?),
                    (CapShape::Disc, CapShape::Disc) => {
                        polygons.push(self.face(&[s0, e0, e1])?);
                        polygons.push(self.face(&[s0, e1, s1])?);
                    }
                }
            }
            if self.end_shape == CapShape::Disc {
                polygons.push(self.face(&[end, e1, e0])?);
            }
        }

        if !self.sweep.closed {
            self.wedge_walls(&mut polygons)?;
        }
        Ok(polygons)
    }

    /// Closes a partial sweep with the two planar faces through the axis.
    fn wedge_walls(&self, polygons: &mut Vec<Polygon>) -> Result<()> {
        let (start, end) = (self.start, self.end);

        let (s, e) = (self.bottom_rim(0.0), self.top_rim(0.0));
        if self.start_shape == CapShape::Disc {
            polygons.push(self.face(&[start, end, s])?);
        }
        if self.end_shape == CapShape::Disc {
            polygons.push(self.face(&[s, end, e])?);
        }

        let (s, e) = (self.bottom_rim(1.0), self.top_rim(1.0));
        if self.start_shape == CapShape::Disc {
            polygons.push(self.face(&[start, s, end])?);
        }
        if self.end_shape == CapShape::Disc {
            polygons.push(self.face(&[s, e, end])?);
        }
        Ok(())
    }
}
