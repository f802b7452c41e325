//! The [`Vector3`] value type.
//!
//! - `vector3`: construction, products, magnitude, elevation/azimuth
//! - `ops`: arithmetic operators and read-only indexing
//! - `rotation`: rotations about the X, Y and Z axes

mod ops;
mod rotation;
mod vector3;

pub use vector3::Vector3;
