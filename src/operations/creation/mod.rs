mod make_cylinder;
mod make_cylinder_elliptic;
mod make_ellipsoid;
mod make_polygon;
mod make_solid;
mod make_sphere;
mod params;

pub use make_cylinder::{CylinderOptions, MakeCylinder};
pub use make_cylinder_elliptic::{CylinderEllipticOptions, MakeCylinderElliptic};
pub use make_ellipsoid::{EllipsoidOptions, MakeEllipsoid};
pub use make_polygon::MakePolygon;
pub use make_solid::MakeSolid;
pub use make_sphere::{MakeSphere, SphereOptions};
