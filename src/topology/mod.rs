mod solid;

pub use solid::Solid;
