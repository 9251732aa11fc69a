#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Once;

use geoprim::math::Point3;
use geoprim::topology::Solid;

static TRACING: Once = Once::new();

/// Installs a test-friendly tracing subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

type Key = [u64; 3];

fn key(p: &Point3) -> Key {
    // `+ 0.0` folds -0.0 into 0.0
    [(p.x + 0.0).to_bits(), (p.y + 0.0).to_bits(), (p.z + 0.0).to_bits()]
}

/// Returns the directed edges that are not matched by exactly one edge in the
/// opposite direction. Empty for a closed, consistently wound surface.
pub fn unmatched_edges(solid: &Solid) -> Vec<(Point3, Point3)> {
    let mut counts: HashMap<(Key, Key), (usize, Point3, Point3)> = HashMap::new();
    for poly in solid {
        let vs = poly.vertices();
        for i in 0..vs.len() {
            let (a, b) = (vs[i], vs[(i + 1) % vs.len()]);
            counts.entry((key(&a), key(&b))).or_insert((0, a, b)).0 += 1;
        }
    }
    counts
        .iter()
        .filter(|((a, b), (n, _, _))| *n != 1 || counts.get(&(*b, *a)).map(|e| e.0) != Some(1))
        .map(|(_, (_, a, b))| (*a, *b))
        .collect()
}

/// Signed volume enclosed by the polygons; positive when they face outward.
pub fn signed_volume(solid: &Solid) -> f64 {
    solid
        .iter()
        .map(|poly| {
            let vs = poly.vertices();
            (1..vs.len() - 1)
                .map(|i| vs[0].coords.dot(&vs[i].coords.cross(&vs[i + 1].coords)))
                .sum::<f64>()
        })
        .sum::<f64>()
        / 6.0
}

/// Asserts the structural guarantees every generator output must meet.
pub fn assert_well_formed(solid: &Solid, tolerance: f64) {
    assert!(!solid.is_empty());
    for poly in solid {
        assert!(poly.len() >= 3);
        assert!((poly.plane().normal().norm() - 1.0).abs() <= tolerance);
        assert!(poly.is_coplanar(tolerance), "non-planar polygon {poly:?}");
    }
    let open = unmatched_edges(solid);
    assert!(open.is_empty(), "{} unmatched edges, e.g. {:?}", open.len(), open.first());
    assert!(signed_volume(solid) > 0.0, "solid is inside out");
}
