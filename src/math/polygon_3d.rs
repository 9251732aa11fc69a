use super::{Point3, Vector3};

/// Compute the area of a 3D polygon (coplanar points).
///
/// Uses the cross-product summation method projected along the polygon normal.
#[must_use]
pub fn polygon_area_3d(points: &[Point3], normal: &Vector3) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let mut cross_sum = Vector3::new(0.0, 0.0, 0.0);
    let o = &points[0];
    for i in 1..n {
        let a = points[i] - o;
        let b = points[(i + 1) % n] - o;
        cross_sum += a.cross(&b);
    }
    0.5 * cross_sum.dot(normal).abs()
}

/// Largest absolute distance of any point from the plane `normal · p = offset`.
///
/// `normal` must be unit length.
#[must_use]
pub fn max_plane_deviation(points: &[Point3], normal: &Vector3, offset: f64) -> f64 {
    points
        .iter()
        .map(|p| (normal.dot(&p.coords) - offset).abs())
        .fold(0.0, f64::max)
}

/// Returns `true` when `a`, `b` and `c` span a non-degenerate triangle.
///
/// Both edges from `a` must be longer than `tolerance`, and the sine of the
/// angle between them must exceed `tolerance`.
#[must_use]
pub fn is_proper_triangle(a: &Point3, b: &Point3, c: &Point3, tolerance: f64) -> bool {
    triangle_normal(a, b, c, tolerance).is_some()
}

/// Unit normal along `(b - a) × (c - a)`, or `None` when the triangle is
/// degenerate under `tolerance`.
#[must_use]
pub fn triangle_normal(a: &Point3, b: &Point3, c: &Point3, tolerance: f64) -> Option<Vector3> {
    let e1 = b - a;
    let e2 = c - a;
    let l1 = e1.norm();
    let l2 = e2.norm();
    if l1 <= tolerance || l2 <= tolerance {
        return None;
    }
    let cross = e1.cross(&e2);
    let len = cross.norm();
    // |e1 × e2| = |e1| |e2| sin(theta)
    if !len.is_finite() || len <= tolerance * l1 * l2 {
        return None;
    }
    Some(cross / len)
}

/// Unit normal of a closed point loop by Newell's method, or `None` when the
/// loop encloses no area.
///
/// Coordinates are taken relative to the first point and rescaled to unit
/// extent before summing, so the result depends only on the loop's shape:
/// tiny or far-from-origin loops keep full precision and no length threshold
/// is applied.
#[must_use]
pub fn newell_normal(points: &[Point3]) -> Option<Vector3> {
    let anchor = points.first()?;
    let extent = points
        .iter()
        .map(|p| (p - anchor).amax())
        .fold(0.0, f64::max);
    if !(extent.is_finite() && extent > 0.0) {
        return None;
    }

    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = (points[i] - anchor) / extent;
        let next = (points[(i + 1) % n] - anchor) / extent;
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    let largest = normal.amax();
    if !(largest.is_finite() && largest > 0.0) {
        return None;
    }
    let normal = normal / largest;
    Some(normal / normal.norm())
}
