use crate::geometry::Polygon;
use crate::topology::Solid;

/// Creates a solid from boundary polygons.
pub struct MakeSolid {
    polygons: Vec<Polygon>,
}

impl MakeSolid {
    /// Creates a new `MakeSolid` operation.
    #[must_use]
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    /// Executes the operation, wrapping the polygons into a solid.
    ///
    /// No validation is performed; an empty polygon list yields an empty solid.
    #[must_use]
    pub fn execute(self) -> Solid {
        Solid::from_polygons(self.polygons)
    }
}
