//! Generic 3D vector value type.
//!
//! `vec3d-core` provides [`Vector3<T>`], a three-component vector over any signed
//! [`Scalar`] (`f32`, `f64`, `i8`..`i128`, `isize`), with the usual arithmetic, dot
//! and cross products, magnitude and normalisation, elevation/azimuth angles, and
//! rotations about the coordinate axes.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vector`] | [`Vector3`], its operators and axis rotations |
//! | [`scalar`] | The [`Scalar`] component trait |
//! | [`errors`] | [`VectorError`] and [`VectorResult`] for the checked APIs |
//! | [`constants`] | Angular constants (`PI`, `HALF_PI`, degree/radian factors) |
//! | [`math`] | `libm` wrappers |
//!
//! # Re-exports
//!
//! ```
//! use vec3d_core::{Scalar, Vector3, Vector3d, Vector3f, Vector3i};
//! use vec3d_core::{VectorError, VectorErrorKind, VectorResult};
//! ```
//!
//! # Example
//!
//! ```
//! use vec3d_core::Vector3d;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let mut v = Vector3d::new(3.0, 0.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//!
//! v.normalise();
//! assert!((v.magnitude() - 1.0).abs() < 1e-15);
//!
//! let turned = v.rotate_y(FRAC_PI_2);
//! assert!((turned.dot(&v)).abs() < 1e-15);
//! ```
//!
//! # Design Notes
//!
//! - **Left-handed documentation, conventional formulas**: angles are described for
//!   +x right, +y up, +z forward, but [`cross`](Vector3::cross) is the textbook
//!   component formula.
//!
//! - **No hidden validation**: the core operations never return errors. Degenerate
//!   input falls through to the component type's own arithmetic. Checked variants
//!   are separately named.
//!
//! - **Radians everywhere**: elevation, azimuth and rotation angles are in radians.
//!   Use [`constants::DEG_TO_RAD`] / [`constants::RAD_TO_DEG`] at the edges.

pub mod constants;
pub mod errors;
pub mod math;
pub mod scalar;
pub mod vector;

pub use errors::{VectorError, VectorErrorKind, VectorResult};
pub use scalar::Scalar;
pub use vector::Vector3;

/// Single-precision float vector.
pub type Vector3f = Vector3<f32>;

/// Double-precision float vector.
pub type Vector3d = Vector3<f64>;

/// 32-bit integer vector.
pub type Vector3i = Vector3<i32>;
